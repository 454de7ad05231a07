use anyhow::{anyhow, Context, Result};
use std::env;

/// Base URLs for the remote collaborator services.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway root for the product and order APIs.
    pub api_url: String,
    /// Auth service root.
    pub auth_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, auth_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            auth_url: auth_url.into(),
        }
    }

    /// Product API root under the gateway.
    pub fn products_url(&self) -> String {
        format!("{}/products/api", self.api_url)
    }
}

/// Load configuration from the environment, with local-dev defaults.
pub fn load_client_config() -> Result<ClientConfig> {
    let api_url = env::var("STOREFRONT_API_URL")
        .map_or_else(|_| Ok("http://localhost:3000".to_string()), |value| {
            normalize_url(&value)
        })
        .context("Failed to parse STOREFRONT_API_URL")?;

    let auth_url = env::var("STOREFRONT_AUTH_URL")
        .map_or_else(
            |_| Ok("http://localhost:3003/auth".to_string()),
            |value| normalize_url(&value),
        )
        .context("Failed to parse STOREFRONT_AUTH_URL")?;

    Ok(ClientConfig { api_url, auth_url })
}

fn normalize_url(value: &str) -> Result<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(anyhow!("URL is empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(anyhow!("URL '{trimmed}' must start with http:// or https://"));
    }
    Ok(trimmed.to_string())
}
