use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use tracing::debug;

use crate::claims::Claims;
use crate::roles::ELEVATED_ROLES;

/// Decode a bearer token's payload without verifying its signature.
///
/// Splits on `.` and requires exactly three segments, then base64url-decodes
/// the middle segment (padded and unpadded forms both accepted) and parses it
/// as JSON. Any malformed input yields `None`, never an error.
pub fn decode(token: &str) -> Option<Claims> {
    if token.is_empty() {
        return None;
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }

    let payload = segments[1].trim_end_matches('=');
    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(%err, "token payload is not valid base64url");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(err) => {
            debug!(%err, "token payload is not a valid claims object");
            None
        }
    }
}

/// Role claim of the token, `None` when absent or undecodable.
pub fn role_of(token: &str) -> Option<String> {
    decode(token)?.role
}

/// Whether the token is expired.
///
/// Fail-closed: an undecodable token or a missing `exp` claim counts as
/// expired.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now().timestamp())
}

/// Expiry check against an explicit clock, in epoch seconds.
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match decode(token).and_then(|claims| claims.exp) {
        Some(exp) => exp < now,
        None => true,
    }
}

/// Whether the token carries one of the elevated roles.
///
/// Exact membership test: `"user"`, an absent role, an unrecognized role
/// string, and an undecodable token are all non-elevated.
pub fn has_elevated_role(token: &str) -> bool {
    match role_of(token) {
        Some(role) => ELEVATED_ROLES.iter().any(|allowed| role == *allowed),
        None => false,
    }
}
