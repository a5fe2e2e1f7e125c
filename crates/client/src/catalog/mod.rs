//! Catalog endpoints.

pub mod models;

use reqwest::Method;
use souk_store::SnapshotStore;

use crate::{
    client::{ApiClient, ApiError, Listing},
    transport::{ApiRequest, Transport},
};

pub use models::{Category, NewProduct, PriceField, Product, ProductFilter, ProductPatch};

impl<T: Transport, S: SnapshotStore> ApiClient<T, S> {
    /// Fetch every category.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let listing: Listing<Category> = self
            .request_json(ApiRequest::new(Method::GET, "categories/"))
            .await?;

        Ok(listing.into_vec())
    }

    /// Fetch products, optionally narrowed by category or promotion.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let mut request = ApiRequest::new(Method::GET, "products/");

        if let Some(category) = filter.category {
            request = request.with_query("category", category.to_string());
        }

        if filter.promotions_only {
            request = request.with_query("is_promo", "true");
        }

        let listing: Listing<Product> = self.request_json(request).await?;

        Ok(listing.into_vec())
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails, including
    /// [`ApiError::UnexpectedResponse`] for an unknown identifier.
    pub async fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        self.request_json(ApiRequest::new(Method::GET, format!("products/{id}/")))
            .await
    }

    /// Create a product. Requires an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let request =
            ApiRequest::new(Method::POST, "products/").with_body(serde_json::to_value(product)?);

        self.request_json(request).await
    }

    /// Apply a partial update to a product. Requires an authenticated
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn update_product(&self, id: u64, patch: &ProductPatch) -> Result<Product, ApiError> {
        let request = ApiRequest::new(Method::PATCH, format!("products/{id}/"))
            .with_body(serde_json::to_value(patch)?);

        self.request_json(request).await
    }

    /// Delete a product. Requires an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the session has
    /// expired.
    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        self.request_ok(ApiRequest::new(Method::DELETE, format!("products/{id}/")))
            .await
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

    fn ok(body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn product_filters_become_query_parameters() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path == "products/"
                    && request.query
                        == vec![
                            ("category".to_string(), "3".to_string()),
                            ("is_promo".to_string(), "true".to_string()),
                        ]
            })
            .times(1)
            .returning(|_| Ok(ok("[]")));

        let filter = ProductFilter {
            category: Some(3),
            promotions_only: true,
        };
        let products = client(transport).list_products(&filter).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unfiltered_listing_sends_no_query() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path == "products/" && request.query.is_empty())
            .times(1)
            .returning(|_| {
                Ok(ok(
                    r#"{"results": [{"id": 1, "name": "Argan oil", "price": 120}]}"#,
                ))
            });

        let products = client(transport)
            .list_products(&ProductFilter::default())
            .await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].display_name(), "Argan oil");

        Ok(())
    }

    #[tokio::test]
    async fn categories_accept_a_bare_array() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path == "categories/")
            .times(1)
            .returning(|_| Ok(ok(r#"[{"id": 1, "name": "Oils", "name_fr": "Huiles"}]"#)));

        let categories = client(transport).list_categories().await?;

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].display_name(), "Huiles");

        Ok(())
    }

    #[tokio::test]
    async fn create_posts_the_new_product() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                let Some(body) = &request.body else {
                    return false;
                };

                request.method == Method::POST
                    && request.path == "products/"
                    && body["name"] == "Miel de thym"
                    && body["is_promo"] == false
                    && body.get("discount_price").is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::CREATED,
                    body: r#"{"id": 11, "name": "Miel de thym", "price": 150}"#.to_string(),
                })
            });

        let created = client(transport)
            .create_product(&NewProduct {
                name: "Miel de thym".to_string(),
                name_fr: None,
                name_ar: None,
                price: rust_decimal::Decimal::from(150),
                discount_price: None,
                image: None,
                weight: None,
                is_promo: false,
                category: 2,
            })
            .await?;

        assert_eq!(created.id, 11);

        Ok(())
    }

    #[tokio::test]
    async fn update_patches_only_set_fields() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::PATCH
                    && request.path == "products/11/"
                    && request.body == Some(serde_json::json!({ "is_promo": true }))
            })
            .times(1)
            .returning(|_| {
                Ok(ok(
                    r#"{"id": 11, "name": "Miel de thym", "price": 150, "is_promo": true}"#,
                ))
            });

        let patch = ProductPatch {
            is_promo: Some(true),
            ..ProductPatch::default()
        };
        let updated = client(transport).update_product(11, &patch).await?;

        assert!(updated.is_promo);

        Ok(())
    }

    #[tokio::test]
    async fn delete_targets_the_product_path() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == Method::DELETE && request.path == "products/9/")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::NO_CONTENT,
                    body: String::new(),
                })
            });

        client(transport).delete_product(9).await?;

        Ok(())
    }
}
