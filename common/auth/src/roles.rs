pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EMPLOYEE: &str = "employee";
pub const ROLE_USER: &str = "user";

/// Roles allowed through the admin gate. Anything outside this list,
/// including unrecognized role strings, is not elevated.
pub const ELEVATED_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EMPLOYEE];
