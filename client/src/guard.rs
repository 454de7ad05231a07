use std::sync::Arc;

use common_auth::guards::{self, GuardDecision};
use common_storage::{keys, KvStore};
use tracing::debug;

use crate::nav::Navigator;

/// Admin-area gate, consulted before every entry to a protected route.
///
/// A pure gate: it never mutates the token, never attempts a refresh, and
/// caches nothing across navigations. Denials always produce a navigation,
/// never a silent no-op, so the visitor is never left stranded on a page
/// they cannot access.
pub struct AdminGuard {
    store: KvStore,
    navigator: Arc<dyn Navigator>,
}

impl AdminGuard {
    pub fn new(store: KvStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Evaluate access to `target_path` and apply the decision's side
    /// effects: remember the destination for the post-login redirect when
    /// the visitor must authenticate, and navigate denials away.
    pub fn check(&self, target_path: &str) -> bool {
        let token = self.store.get::<String>(keys::TOKEN);
        let decision = guards::evaluate_admin_access(token.as_deref());
        self.apply(&decision, target_path);
        decision.allow
    }

    fn apply(&self, decision: &GuardDecision, target_path: &str) {
        if decision.save_return_url {
            self.store.set(keys::RETURN_URL, target_path);
        }
        match decision.redirect {
            Some(path) => self.navigator.navigate(path),
            None => debug!(target_path, "admin access granted"),
        }
    }
}
