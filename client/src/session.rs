use std::sync::Arc;

use common_auth::guards::{is_admin_route, HOME_PATH};
use common_auth::ROLE_ADMIN;
use common_cart::CartStore;
use common_storage::{keys, KvStore};
use tracing::{debug, warn};

use crate::api::{AuthClient, ProductClient};
use crate::error::ApiResult;
use crate::models::LoginRequest;
use crate::nav::Navigator;

/// Destination after an admin login with no usable return URL.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
/// Customer login page, the destination after logout.
pub const LOGIN_PATH: &str = "/login";

/// Login, logout, and purchase flows over the auth and product services.
///
/// The admin login is the consuming side of the return-URL handshake the
/// guard produces: a saved destination inside the admin area is consumed
/// and navigated to, anything else is discarded.
pub struct Session {
    store: KvStore,
    auth: AuthClient,
    navigator: Arc<dyn Navigator>,
}

impl Session {
    pub fn new(store: KvStore, auth: AuthClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            auth,
            navigator,
        }
    }

    /// Whether a bearer token is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.store.get::<String>(keys::TOKEN).is_some()
    }

    /// Admin console login. Asks the server to require the admin role, so
    /// a plain customer account comes back as a 403 rather than a token.
    pub async fn admin_login(&self, username: &str, password: &str) -> ApiResult<()> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            require_role: Some(ROLE_ADMIN.to_string()),
        };
        let response = self.auth.login(&request).await?;
        self.store.set(keys::TOKEN, &response.token);
        debug!(username, "admin login succeeded");

        match self.store.get::<String>(keys::RETURN_URL) {
            Some(url) if is_admin_route(&url) => {
                self.store.remove(keys::RETURN_URL);
                self.navigator.navigate(&url);
            }
            Some(url) => {
                // A stale or non-admin destination is dropped, not followed.
                warn!(url, "discarding non-admin return URL");
                self.store.remove(keys::RETURN_URL);
                self.navigator.navigate(ADMIN_DASHBOARD_PATH);
            }
            None => self.navigator.navigate(ADMIN_DASHBOARD_PATH),
        }
        Ok(())
    }

    /// Customer login, identified by phone number.
    pub async fn login(&self, phone: &str, password: &str) -> ApiResult<()> {
        let request = LoginRequest {
            username: phone.to_string(),
            password: password.to_string(),
            require_role: None,
        };
        let response = self.auth.login(&request).await?;
        self.store.set(keys::TOKEN, &response.token);
        self.store.set(keys::PHONE, phone);
        self.navigator.navigate(HOME_PATH);
        Ok(())
    }

    /// Create a customer account. The caller decides where to go next.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        self.auth.register(username, password).await
    }

    /// Drop the session token and return to the login page.
    pub fn logout(&self) {
        self.store.remove(keys::TOKEN);
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Buy the cart's contents, one product id per unit of quantity.
    ///
    /// On success the cart is cleared and the visitor lands back home. Any
    /// failure is returned typed and leaves the cart intact for a manual
    /// retry.
    pub async fn purchase(&self, cart: &CartStore, products: &ProductClient) -> ApiResult<()> {
        let ids: Vec<String> = cart
            .items()
            .iter()
            .flat_map(|item| std::iter::repeat(item.id.clone()).take(item.quantity as usize))
            .collect();

        products.buy(&ids).await?;
        cart.update(Vec::new());
        self.navigator.navigate(HOME_PATH);
        Ok(())
    }
}
