//! Order endpoints.

pub mod models;

use reqwest::Method;
use serde_json::json;
use souk_store::SnapshotStore;

use crate::{
    client::{ApiClient, ApiError, Listing},
    transport::{ApiRequest, Transport},
};

pub use models::{DailyStat, NewOrder, Order, OrderStatus};

impl<T: Transport, S: SnapshotStore> ApiClient<T, S> {
    /// Place an order. Works without a session; the storefront checkout is
    /// anonymous.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let request =
            ApiRequest::new(Method::POST, "orders/").with_body(serde_json::to_value(order)?);

        self.request_json(request).await
    }

    /// Fetch every order. Requires an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let listing: Listing<Order> = self
            .request_json(ApiRequest::new(Method::GET, "orders/"))
            .await?;

        Ok(listing.into_vec())
    }

    /// Move an order to a new status. Requires an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn update_order_status(
        &self,
        id: u64,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let request = ApiRequest::new(Method::PATCH, format!("orders/{id}/"))
            .with_body(json!({ "status": status }));

        self.request_json(request).await
    }

    /// Fetch per-day order counts for the dashboard. Requires an
    /// authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn daily_stats(&self) -> Result<Vec<DailyStat>, ApiError> {
        let listing: Listing<DailyStat> = self
            .request_json(ApiRequest::new(Method::GET, "orders/daily_stats/"))
            .await?;

        Ok(listing.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use souk_store::MemoryStore;
    use testresult::TestResult;

    use crate::{
        auth::credentials::CredentialStore,
        transport::{ApiResponse, MockTransport},
    };

    use super::*;

    fn client(transport: MockTransport) -> ApiClient<MockTransport, MemoryStore> {
        ApiClient::new(transport, CredentialStore::new(MemoryStore::new()))
    }

    const ORDER_BODY: &str = r#"{
        "id": 12,
        "customer_name": "Yasmine",
        "phone": "0600000000",
        "city": "Casablanca",
        "address": "Note: sonnerie en panne",
        "items_description": "Huile d'argan (250ml) (x2), Amlou (x1)",
        "status": "PENDING",
        "created_at": "2026-08-20T10:30:00Z"
    }"#;

    #[tokio::test]
    async fn create_order_posts_the_payload() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                let Some(body) = &request.body else {
                    return false;
                };

                request.method == Method::POST
                    && request.path == "orders/"
                    && body["customer_name"] == "Yasmine"
                    && body["status"] == "PENDING"
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::CREATED,
                    body: ORDER_BODY.to_string(),
                })
            });

        let order = client(transport)
            .create_order(&NewOrder {
                customer_name: "Yasmine".to_string(),
                phone: "0600000000".to_string(),
                city: "Casablanca".to_string(),
                address: "Note: sonnerie en panne".to_string(),
                items_description: "Huile d'argan (250ml) (x2), Amlou (x1)".to_string(),
                status: OrderStatus::Pending,
            })
            .await?;

        assert_eq!(order.id, 12);
        assert_eq!(order.status, OrderStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn status_update_patches_the_order_path() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::PATCH
                    && request.path == "orders/12/"
                    && request.body == Some(serde_json::json!({ "status": "SHIPPED" }))
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::OK,
                    body: ORDER_BODY.replace("PENDING", "SHIPPED"),
                })
            });

        let order = client(transport)
            .update_order_status(12, OrderStatus::Shipped)
            .await?;

        assert_eq!(order.status, OrderStatus::Shipped);

        Ok(())
    }

    #[tokio::test]
    async fn daily_stats_decode() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path == "orders/daily_stats/")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::OK,
                    body: r#"[{"date": "2026-08-19", "count": 3}, {"date": "2026-08-20", "count": 7}]"#
                        .to_string(),
                })
            });

        let stats = client(transport).daily_stats().await?;

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.iter().map(|stat| stat.count).sum::<u64>(), 10);

        Ok(())
    }
}
