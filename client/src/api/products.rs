use reqwest::Client;
use serde::Serialize;

use crate::api::{check_status, decode_json};
use crate::error::ApiResult;
use crate::models::{Category, Product};

#[derive(Serialize)]
struct BuyRequest<'a> {
    ids: &'a [String],
}

/// Client for the product service's catalog and purchase endpoints.
#[derive(Clone)]
pub struct ProductClient {
    client: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get_products(&self) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_product(&self, id: &str) -> ApiResult<Product> {
        let response = self
            .client
            .get(format!("{}/products/{id}", self.base_url))
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_products_by_category(&self, category_id: &str) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .query(&[("category", category_id)])
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        let response = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    /// Purchase, one product id per unit bought. Failure statuses map to
    /// the dedicated error variants (401 unauthenticated, 503 dependency
    /// unavailable, 504 timeout); nothing is retried here.
    pub async fn buy(&self, ids: &[String]) -> ApiResult<()> {
        let response = self
            .client
            .post(format!("{}/buy", self.base_url))
            .json(&BuyRequest { ids })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
