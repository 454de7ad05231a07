use tracing::{debug, warn};

use crate::codec;
use crate::roles::ELEVATED_ROLES;

/// Route the guard sends unauthenticated visitors to.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
/// Route authenticated-but-unprivileged visitors are sent to instead.
pub const HOME_PATH: &str = "/home";

const ADMIN_PREFIX: &str = "/admin/";

/// Whether a path belongs to the protected admin area.
pub fn is_admin_route(path: &str) -> bool {
    path.starts_with(ADMIN_PREFIX)
}

/// Outcome of an admin-route access check.
///
/// Side effects are data: the caller applies the redirect and, when
/// `save_return_url` is set, records the attempted destination so the login
/// flow can come back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardDecision {
    pub allow: bool,
    pub redirect: Option<&'static str>,
    pub save_return_url: bool,
}

impl GuardDecision {
    const fn granted() -> Self {
        Self {
            allow: true,
            redirect: None,
            save_return_url: false,
        }
    }

    const fn to_admin_login() -> Self {
        Self {
            allow: false,
            redirect: Some(ADMIN_LOGIN_PATH),
            save_return_url: true,
        }
    }

    const fn to_home() -> Self {
        Self {
            allow: false,
            redirect: Some(HOME_PATH),
            save_return_url: false,
        }
    }
}

/// Evaluate admin-area access for the current token, if any.
///
/// A missing token and an undecodable token share the same terminal action
/// (deny, remember the destination, send to the admin login). A token that
/// decodes but lacks an elevated role is denied and sent home instead:
/// the visitor is authenticated, so re-prompting for admin credentials
/// would be redundant.
pub fn evaluate_admin_access(token: Option<&str>) -> GuardDecision {
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => {
            debug!("no token present, requesting admin login");
            return GuardDecision::to_admin_login();
        }
    };

    match codec::decode(token) {
        Some(claims) => {
            let elevated = claims
                .role
                .as_deref()
                .is_some_and(|role| ELEVATED_ROLES.contains(&role));
            if elevated {
                debug!(username = %claims.username, role = ?claims.role, "admin access granted");
                GuardDecision::granted()
            } else {
                warn!(username = %claims.username, role = ?claims.role, "role not elevated, redirecting home");
                GuardDecision::to_home()
            }
        }
        None => {
            warn!("token present but undecodable, requesting admin login");
            GuardDecision::to_admin_login()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn token(role: Option<&str>) -> String {
        let mut payload = json!({ "id": "u-1", "username": "tester" });
        if let Some(role) = role {
            payload["role"] = role.into();
        }
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("h.{body}.s")
    }

    #[test]
    fn admin_route_check_is_a_prefix_match() {
        assert!(is_admin_route("/admin/dashboard"));
        assert!(is_admin_route("/admin/users"));
        assert!(!is_admin_route("/admin"));
        assert!(!is_admin_route("/home"));
        assert!(!is_admin_route("/administrator/x"));
    }

    #[test]
    fn missing_token_goes_to_admin_login() {
        for token in [None, Some("")] {
            let decision = evaluate_admin_access(token);
            assert!(!decision.allow);
            assert_eq!(decision.redirect, Some(ADMIN_LOGIN_PATH));
            assert!(decision.save_return_url);
        }
    }

    #[test]
    fn undecodable_token_goes_to_admin_login() {
        let decision = evaluate_admin_access(Some("not.a-real.token"));
        assert!(!decision.allow);
        assert_eq!(decision.redirect, Some(ADMIN_LOGIN_PATH));
        assert!(decision.save_return_url);
    }

    #[test]
    fn unprivileged_token_goes_home_without_return_url() {
        for role in [Some("user"), Some("manager"), None] {
            let decision = evaluate_admin_access(Some(&token(role)));
            assert!(!decision.allow);
            assert_eq!(decision.redirect, Some(HOME_PATH));
            assert!(!decision.save_return_url);
        }
    }

    #[test]
    fn elevated_token_is_allowed_through() {
        for role in ["admin", "employee"] {
            let decision = evaluate_admin_access(Some(&token(Some(role))));
            assert!(decision.allow);
            assert_eq!(decision.redirect, None);
            assert!(!decision.save_return_url);
        }
    }
}
