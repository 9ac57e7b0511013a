//! Role definitions
//!
//! The five back-office roles as a closed enum. Adding a role is a
//! compile-time exercise: every match over [`Role`] is exhaustive.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Owner,
    Manager,
    Staff,
}

impl Role {
    /// Roles whose queries are never filtered to a store subset
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Role::SuperAdmin | Role::Admin | Role::Owner => true,
            Role::Manager | Role::Staff => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Owner => "OWNER",
            Role::Manager => "MANAGER",
            Role::Staff => "STAFF",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&Role::SuperAdmin).unwrap(),
            "\"SUPER_ADMIN\""
        );
        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn scope_restriction_by_role() {
        assert!(Role::Admin.is_unrestricted());
        assert!(Role::Owner.is_unrestricted());
        assert!(!Role::Manager.is_unrestricted());
        assert!(!Role::Staff.is_unrestricted());
    }
}
