use serde::{Deserialize, Serialize};

/// Cookie holding the backend bearer token, issued by the external identity
/// service. This crate only reads it.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Short-lived cookies mirrored out of the navigation bar for other pages
/// to consume.
pub const ROLE_COOKIE_NAME: &str = "rol";
pub const PERIOD_COOKIE_NAME: &str = "periodo";

/// 24 hours, matching the backend session lifetime.
pub const SESSION_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// The authenticated user as returned by `auth/me`. Unknown extra fields
/// from the backend are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_extra_backend_fields() {
        let user: CurrentUser = serde_json::from_str(
            r#"{ "name": "Laura", "role": "rrhh", "employee_id": 1044, "email": "l@example.com" }"#,
        )
        .unwrap();
        assert_eq!(user.name, "Laura");
        assert_eq!(user.role, "rrhh");
    }
}
