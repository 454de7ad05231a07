//! Well-known storage keys shared across the client.

/// Bearer token for the current session.
pub const TOKEN: &str = "token";
/// Path to return to after a successful admin login.
pub const RETURN_URL: &str = "returnUrl";
/// Phone number used as the customer login identifier.
pub const PHONE: &str = "phone";
/// Cart line items. Deliberately stored outside the namespace, under the
/// bare key, so external scripts that read the legacy key keep working.
pub const CART: &str = "cart";
