mod support;

use common_storage::keys;
use httpmock::prelude::*;
use serde_json::json;
use storefront_client::models::{CategoryRef, StatsPeriod, UpdateUserRequest};
use storefront_client::{AdminClient, ProductClient};
use support::{memory_store, token_with_role};

#[tokio::test]
async fn catalog_parses_products_with_mixed_category_shapes() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(json!([
            {
                "_id": "p-1",
                "name": "Omega 3 Premium",
                "price": 52000,
                "stock": 12,
                "categories": [{ "_id": "c-1", "name": "Supplements" }]
            },
            {
                "_id": "p-2",
                "name": "Calcio + Vitamina D",
                "price": 31000,
                "description": "x",
                "stock": 0,
                "categories": ["c-1"]
            }
        ]));
    });

    let products = ProductClient::new(server.base_url())
        .get_products()
        .await
        .expect("catalog loads");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "p-1");
    assert!(matches!(products[0].categories[0], CategoryRef::Full(_)));
    assert!(matches!(products[1].categories[0], CategoryRef::Id(_)));
    assert_eq!(products[1].stock, 0);
}

#[tokio::test]
async fn admin_requests_carry_the_stored_bearer_token() {
    let server = MockServer::start();
    let token = token_with_role(Some("admin"));
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/users")
            .header("authorization", format!("Bearer {token}"));
        then.status(200).json_body(json!([
            { "_id": "u-1", "username": "boss", "email": "boss@example.com", "role": "admin" }
        ]));
    });

    let store = memory_store();
    store.set(keys::TOKEN, &token);
    let users = AdminClient::new(server.base_url(), store)
        .get_all_users()
        .await
        .expect("users load");

    mock.assert();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role.as_deref(), Some("admin"));
}

#[tokio::test]
async fn user_update_round_trips() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/auth/users/u-1")
            .json_body(json!({ "role": "employee" }));
        then.status(200).json_body(json!({
            "_id": "u-1",
            "username": "clerk",
            "email": "clerk@example.com",
            "role": "employee",
            "createdAt": "2026-01-01T00:00:00Z"
        }));
    });

    let store = memory_store();
    store.set(keys::TOKEN, &token_with_role(Some("admin")));
    let update = UpdateUserRequest {
        role: Some("employee".to_string()),
        ..UpdateUserRequest::default()
    };
    let user = AdminClient::new(server.base_url(), store)
        .update_user("u-1", &update)
        .await
        .expect("update succeeds");

    assert_eq!(user.role.as_deref(), Some("employee"));
    assert_eq!(user.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[tokio::test]
async fn dashboard_stats_pass_the_selected_period() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/orders/api/dashboard/stats")
            .query_param("period", "week");
        then.status(200).json_body(json!({
            "totalSales": 42,
            "totalRevenue": 1_250_000.0,
            "inventoryValue": 9_800_000.0,
            "lowStockProducts": 3,
            "recentSales": 7,
            "period": "week"
        }));
    });

    let store = memory_store();
    store.set(keys::TOKEN, &token_with_role(Some("admin")));
    let stats = AdminClient::new(server.base_url(), store)
        .get_dashboard_stats(StatsPeriod::Week)
        .await
        .expect("stats load");

    mock.assert();
    assert_eq!(stats.total_sales, 42);
    assert_eq!(stats.period, Some(StatsPeriod::Week));
}

#[tokio::test]
async fn low_stock_query_carries_the_threshold() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/products/api/inventory/low-stock")
            .query_param("threshold", "10");
        then.status(200).json_body(json!([]));
    });

    let store = memory_store();
    store.set(keys::TOKEN, &token_with_role(Some("employee")));
    let products = AdminClient::new(server.base_url(), store)
        .get_low_stock_products(10)
        .await
        .expect("low stock loads");

    mock.assert();
    assert!(products.is_empty());
}
