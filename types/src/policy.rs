/// Capability check used to gate UI affordances by role.
///
/// Injected into the view layer (Dioxus context) so menu gating can be
/// swapped out in tests.
pub trait AccessPolicy: Send + Sync {
    fn can_access(&self, role: &str, scope: &str, resource: &str) -> bool;
}

/// Default policy: a fixed role/resource matrix for the `menu` scope.
///
/// `admin` sees everything; `rrhh` the HR screens; `gerente` only the
/// employee roster. Anything else (including an empty role) sees no gated
/// entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleMatrix;

const MENU_MATRIX: &[(&str, &[&str])] = &[
    ("companies", &["admin"]),
    ("offices", &["admin", "rrhh"]),
    ("periods", &["admin", "rrhh"]),
    ("incidents", &["admin", "rrhh"]),
    ("employees", &["admin", "rrhh", "gerente"]),
    ("users", &["admin"]),
];

impl AccessPolicy for RoleMatrix {
    fn can_access(&self, role: &str, scope: &str, resource: &str) -> bool {
        if scope != "menu" {
            return false;
        }
        MENU_MATRIX
            .iter()
            .find(|(key, _)| *key == resource)
            .is_some_and(|(_, roles)| roles.contains(&role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_every_menu_entry() {
        for (resource, _) in MENU_MATRIX {
            assert!(RoleMatrix.can_access("admin", "menu", resource));
        }
    }

    #[test]
    fn rrhh_sees_hr_screens_only() {
        assert!(RoleMatrix.can_access("rrhh", "menu", "incidents"));
        assert!(RoleMatrix.can_access("rrhh", "menu", "employees"));
        assert!(!RoleMatrix.can_access("rrhh", "menu", "companies"));
        assert!(!RoleMatrix.can_access("rrhh", "menu", "users"));
    }

    #[test]
    fn unknown_or_empty_role_sees_nothing() {
        for (resource, _) in MENU_MATRIX {
            assert!(!RoleMatrix.can_access("becario", "menu", resource));
            assert!(!RoleMatrix.can_access("", "menu", resource));
        }
    }

    #[test]
    fn unknown_scope_denies() {
        assert!(!RoleMatrix.can_access("admin", "reports", "incidents"));
    }

    #[test]
    fn unknown_resource_denies() {
        assert!(!RoleMatrix.can_access("admin", "menu", "payroll"));
    }
}
