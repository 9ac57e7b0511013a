//! Access-control resolver
//!
//! Pure functions over a loaded [`UserProfile`]; no I/O. Every endpoint asks
//! the same two questions: which stores may this request be filtered to, and
//! is capability X granted. Keeping the answers here (instead of ad-hoc role
//! string comparisons at each call site) is what keeps the screens
//! consistent with each other.
//!
//! # The empty-set sentinel
//!
//! [`store_filter`] returns an **empty set for unrestricted roles**, and
//! callers must treat empty as "no filter - show all", never as "nothing
//! visible". Several screens decide whether to apply a store filter at all
//! based on this convention, so it is load-bearing and preserved exactly.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::auth::{Role, permissions};
use crate::db::models::UserProfile;

/// Which store ids the profile's queries must be filtered to.
///
/// Restricted roles (MANAGER, STAFF) get the subset of their store-membership
/// map with value `true`, with the legacy single `assigned_store` field folded
/// in for profiles created before multi-store membership existed. Unrestricted
/// roles get the empty set (see module docs). A missing profile (still
/// loading) also yields the empty set; callers gate on profile presence
/// before trusting it.
pub fn store_filter(profile: Option<&UserProfile>) -> BTreeSet<String> {
    let Some(profile) = profile else {
        return BTreeSet::new();
    };
    if profile.role.is_unrestricted() {
        return BTreeSet::new();
    }

    let mut allowed: BTreeSet<String> = profile
        .stores
        .iter()
        .filter(|(_, member)| **member)
        .map(|(store_id, _)| store_id.clone())
        .collect();
    if let Some(legacy) = &profile.assigned_store
        && !legacy.is_empty()
    {
        allowed.insert(legacy.clone());
    }
    allowed
}

/// Whether the profile may touch the given store.
///
/// An empty filter means unrestricted, per the sentinel convention.
pub fn is_store_allowed(profile: Option<&UserProfile>, store_id: &str) -> bool {
    if profile.is_none() {
        return false;
    }
    let filter = store_filter(profile);
    filter.is_empty() || filter.contains(store_id)
}

/// Effective capability check: explicit grant wins, role default otherwise.
///
/// Missing profile resolves every capability to `false` so that screens can
/// render a denied state while the profile is still loading.
pub fn has_permission(profile: Option<&UserProfile>, capability: &str) -> bool {
    let Some(profile) = profile else {
        return false;
    };
    if let Some(explicit) = profile.permissions.get(capability) {
        return *explicit;
    }
    permissions::default_capabilities(profile.role).contains(&capability)
}

// ========== Hard role gates ==========
//
// These are layered on top of the capability table: a capability grant does
// not bypass a role gate, and passing a gate does not imply the capability.

/// Operations staff-ledger actions are manager-only.
pub fn can_use_operations(profile: Option<&UserProfile>) -> bool {
    matches!(profile.map(|p| p.role), Some(Role::Manager))
}

/// Overriding the auto-captured attendance check-in time is reserved for
/// admin roles; the override is stamped with who/when/why.
pub fn can_edit_attendance_time(profile: Option<&UserProfile>) -> bool {
    matches!(
        profile.map(|p| p.role),
        Some(Role::SuperAdmin) | Some(Role::Admin)
    )
}

/// Resolver output for one profile, as consumed by every screen.
///
/// `store_filter` empty = unrestricted (sentinel convention).
#[derive(Debug, Serialize)]
pub struct AccessView {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub store_filter: Vec<String>,
    pub capabilities: HashMap<String, bool>,
    pub operations: bool,
    pub can_edit_attendance_time: bool,
}

impl AccessView {
    pub fn resolve(profile: &UserProfile) -> Self {
        let capabilities = permissions::ALL_CAPABILITIES
            .iter()
            .map(|cap| (cap.to_string(), has_permission(Some(profile), cap)))
            .collect();
        Self {
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role,
            store_filter: store_filter(Some(profile)).into_iter().collect(),
            capabilities,
            operations: can_use_operations(Some(profile)),
            can_edit_attendance_time: can_edit_attendance_time(Some(profile)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: None,
            email: "user@chain.example".to_string(),
            name: "Test User".to_string(),
            role,
            stores: HashMap::new(),
            assigned_store: None,
            is_active: true,
            permissions: HashMap::new(),
            created_at: 0,
            created_by: None,
        }
    }

    #[test]
    fn manager_filter_is_true_valued_subset() {
        let mut p = profile(Role::Manager);
        p.stores.insert("ST01".into(), true);
        p.stores.insert("ST02".into(), false);
        p.stores.insert("ST03".into(), true);

        let filter = store_filter(Some(&p));
        assert_eq!(
            filter.into_iter().collect::<Vec<_>>(),
            vec!["ST01".to_string(), "ST03".to_string()]
        );
    }

    #[test]
    fn legacy_assigned_store_is_folded_in() {
        let mut p = profile(Role::Manager);
        p.stores.insert("ST01".into(), true);
        p.assigned_store = Some("ST09".into());

        let filter = store_filter(Some(&p));
        assert!(filter.contains("ST01"));
        assert!(filter.contains("ST09"));
    }

    #[test]
    fn unrestricted_roles_get_empty_sentinel() {
        for role in [Role::SuperAdmin, Role::Admin, Role::Owner] {
            let mut p = profile(role);
            // Membership entries must not leak into the filter for
            // unrestricted roles.
            p.stores.insert("ST01".into(), true);
            assert!(store_filter(Some(&p)).is_empty());
            assert!(is_store_allowed(Some(&p), "ST99"));
        }
    }

    #[test]
    fn restricted_role_with_filter_is_scoped() {
        let mut p = profile(Role::Manager);
        p.stores.insert("ST01".into(), true);
        assert!(is_store_allowed(Some(&p), "ST01"));
        assert!(!is_store_allowed(Some(&p), "ST02"));
    }

    #[test]
    fn missing_profile_is_safe_default() {
        assert!(store_filter(None).is_empty());
        assert!(!is_store_allowed(None, "ST01"));
        for cap in permissions::ALL_CAPABILITIES {
            assert!(!has_permission(None, cap));
        }
        assert!(!can_use_operations(None));
        assert!(!can_edit_attendance_time(None));
    }

    #[test]
    fn explicit_permission_overrides_role_default() {
        // Staff gets nothing by default; explicit grant wins.
        let mut p = profile(Role::Staff);
        p.permissions.insert(permissions::ROKAR_VIEW.into(), true);
        assert!(has_permission(Some(&p), permissions::ROKAR_VIEW));

        // Manager holds rokar:import by default; explicit revoke wins.
        let mut p = profile(Role::Manager);
        p.permissions
            .insert(permissions::ROKAR_IMPORT.into(), false);
        assert!(!has_permission(Some(&p), permissions::ROKAR_IMPORT));
        // Untouched capabilities still resolve from the role default.
        assert!(has_permission(Some(&p), permissions::ATTENDANCE_MANAGE));
    }

    #[test]
    fn operations_gate_is_role_based_not_capability_based() {
        // Admin holds every capability but is not a manager.
        let p = profile(Role::Admin);
        assert!(!can_use_operations(Some(&p)));

        // A manager with every capability revoked still passes the gate.
        let mut p = profile(Role::Manager);
        for cap in permissions::ALL_CAPABILITIES {
            p.permissions.insert(cap.to_string(), false);
        }
        assert!(can_use_operations(Some(&p)));
    }

    #[test]
    fn attendance_time_gate() {
        assert!(can_edit_attendance_time(Some(&profile(Role::SuperAdmin))));
        assert!(can_edit_attendance_time(Some(&profile(Role::Admin))));
        assert!(!can_edit_attendance_time(Some(&profile(Role::Manager))));
        assert!(!can_edit_attendance_time(Some(&profile(Role::Owner))));
    }
}
