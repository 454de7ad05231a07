use serde::{Deserialize, Serialize};

/// Decoded bearer-token payload.
///
/// Advisory only: nothing here is signature-checked. The backing services
/// stay the authority for anything security-sensitive; these claims drive
/// UI routing decisions and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Convenience helper for role checks.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}
