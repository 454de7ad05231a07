use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

use common_storage::{keys, KvStore};

use crate::api::{check_status, decode_json};
use crate::error::ApiResult;
use crate::models::{
    DashboardStats, InventoryStats, Product, Sale, StatsPeriod, UpdateUserRequest, User,
};

#[derive(Serialize)]
struct StockUpdate {
    stock: i64,
}

/// Client for the role-gated admin endpoints across the auth, product, and
/// order services.
///
/// The bearer token is read from storage on every call, so a re-login or
/// logout in the same session is picked up without rebuilding the client.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    store: KvStore,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>, store: KvStore) -> Self {
        Self::with_client(Client::new(), base_url, store)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, store: KvStore) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            store,
        }
    }

    fn bearer(&self) -> String {
        self.store.get::<String>(keys::TOKEN).unwrap_or_default()
    }

    // User management

    pub async fn get_all_users(&self) -> ApiResult<Vec<User>> {
        let response = self
            .client
            .get(format!("{}/auth/users", self.base_url))
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_user(&self, user_id: &str) -> ApiResult<User> {
        let response = self
            .client
            .get(format!("{}/auth/users/{user_id}", self.base_url))
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn update_user(&self, user_id: &str, update: &UpdateUserRequest) -> ApiResult<User> {
        let response = self
            .client
            .put(format!("{}/auth/users/{user_id}", self.base_url))
            .bearer_auth(self.bearer())
            .json(update)
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        let response = self
            .client
            .delete(format!("{}/auth/users/{user_id}", self.base_url))
            .bearer_auth(self.bearer())
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    // Inventory management

    pub async fn get_inventory_stats(&self) -> ApiResult<InventoryStats> {
        let response = self
            .client
            .get(format!("{}/products/api/inventory/stats", self.base_url))
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_low_stock_products(&self, threshold: u32) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!(
                "{}/products/api/inventory/low-stock",
                self.base_url
            ))
            .query(&[("threshold", threshold)])
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn update_product_stock(&self, product_id: &str, stock: i64) -> ApiResult<Product> {
        let response = self
            .client
            .patch(format!(
                "{}/products/api/products/{product_id}/stock",
                self.base_url
            ))
            .bearer_auth(self.bearer())
            .json(&StockUpdate { stock })
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    // Sales and dashboard

    pub async fn get_dashboard_stats(&self, period: StatsPeriod) -> ApiResult<DashboardStats> {
        let response = self
            .client
            .get(format!("{}/orders/api/dashboard/stats", self.base_url))
            .query(&[("period", period.as_str())])
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_all_sales(&self, limit: u32) -> ApiResult<Vec<Sale>> {
        let response = self
            .client
            .get(format!("{}/orders/api/orders", self.base_url))
            .query(&[("limit", limit)])
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    pub async fn get_sales_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<Sale>> {
        let response = self
            .client
            .get(format!("{}/orders/api/orders/range", self.base_url))
            .query(&[("start", start.to_string()), ("end", end.to_string())])
            .bearer_auth(self.bearer())
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }
}
