//! Authentication and access control
//!
//! Identity (login, sessions, passwords) lives in the upstream auth gateway;
//! this module answers what an already-identified profile may see and do.
//!
//! - [`Role`] - closed enum over the five back-office roles
//! - [`permissions`] - capability names and per-role default tables
//! - [`access`] - pure resolver: store filter, capability checks, role gates
//! - [`CurrentUser`] - axum extractor loading the profile for a request

pub mod access;
pub mod extractor;
pub mod permissions;
pub mod role;

pub use access::AccessView;
pub use extractor::CurrentUser;
pub use role::Role;
