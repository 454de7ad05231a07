use reqwest::Client;

use crate::api::{check_status, decode_json};
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

/// Client for the remote auth service.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a bearer token. 401 means bad credentials;
    /// 403 means the account lacks the required role, with the server
    /// message and the account's actual role in the error.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    /// Create a customer account.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
