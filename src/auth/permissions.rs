//! Permission definitions
//!
//! Capability-based permission system. One declarative table maps each role
//! to its default capability set; the same table seeds `permissions` on user
//! creation and backs the effective-permission check, so the two can never
//! drift apart. Explicit per-user grants in `UserProfile::permissions`
//! override the defaults in both directions.

use std::collections::HashMap;

use crate::auth::Role;

// === Capability names ===
pub const USERS_MANAGE: &str = "users:manage";
pub const STORES_MANAGE: &str = "stores:manage";
pub const ROKAR_VIEW: &str = "rokar:view";
pub const ROKAR_EDIT: &str = "rokar:edit";
pub const ROKAR_IMPORT: &str = "rokar:import";
pub const ATTENDANCE_MANAGE: &str = "attendance:manage";
pub const DUES_MANAGE: &str = "dues:manage";
pub const LEAVE_APPROVE: &str = "leave:approve";
pub const REPORTS_VIEW: &str = "reports:view";

/// Every capability the permission editor may grant
pub const ALL_CAPABILITIES: &[&str] = &[
    USERS_MANAGE,
    STORES_MANAGE,
    ROKAR_VIEW,
    ROKAR_EDIT,
    ROKAR_IMPORT,
    ATTENDANCE_MANAGE,
    DUES_MANAGE,
    LEAVE_APPROVE,
    REPORTS_VIEW,
];

/// Default capabilities for each role
///
/// Older profiles created before a capability existed fall back to this
/// table, so the resolver still answers sensibly for them.
pub fn default_capabilities(role: Role) -> &'static [&'static str] {
    match role {
        Role::SuperAdmin | Role::Admin => ALL_CAPABILITIES,
        Role::Owner => &[ROKAR_VIEW, DUES_MANAGE, REPORTS_VIEW],
        Role::Manager => &[
            ROKAR_VIEW,
            ROKAR_EDIT,
            ROKAR_IMPORT,
            ATTENDANCE_MANAGE,
            DUES_MANAGE,
            LEAVE_APPROVE,
            REPORTS_VIEW,
        ],
        Role::Staff => &[],
    }
}

/// Explicit permission map seeded on user creation
pub fn seed_permissions(role: Role) -> HashMap<String, bool> {
    let defaults = default_capabilities(role);
    ALL_CAPABILITIES
        .iter()
        .map(|cap| (cap.to_string(), defaults.contains(cap)))
        .collect()
}

/// Validate a capability name against the known list
pub fn is_valid_capability(capability: &str) -> bool {
    ALL_CAPABILITIES.contains(&capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_roles_get_everything() {
        for cap in ALL_CAPABILITIES {
            assert!(default_capabilities(Role::SuperAdmin).contains(cap));
            assert!(default_capabilities(Role::Admin).contains(cap));
        }
    }

    #[test]
    fn staff_gets_nothing_by_default() {
        assert!(default_capabilities(Role::Staff).is_empty());
        let seeded = seed_permissions(Role::Staff);
        assert!(seeded.values().all(|granted| !granted));
    }

    #[test]
    fn seeded_map_covers_every_capability() {
        let seeded = seed_permissions(Role::Manager);
        assert_eq!(seeded.len(), ALL_CAPABILITIES.len());
        assert_eq!(seeded.get(ROKAR_IMPORT), Some(&true));
        assert_eq!(seeded.get(USERS_MANAGE), Some(&false));
    }
}
