//! Session authentication.

pub mod credentials;

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use souk_store::SnapshotStore;

use crate::{
    client::{ApiClient, ApiError},
    transport::{ApiRequest, Transport},
};

/// Access/refresh pair issued at login.
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access: String,
    /// Long-lived refresh token.
    pub refresh: String,
}

impl<T: Transport, S: SnapshotStore> ApiClient<T, S> {
    /// Exchange username and password for a token pair; both tokens are
    /// stored for later requests.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the credentials are rejected, the
    /// request fails, or the tokens cannot be stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::POST, "token/").with_body(json!({
            "username": username,
            "password": password,
        }));

        let pair: TokenPair = self.request_json(request).await?;

        self.credentials().store_pair(&pair.access, &pair.refresh)?;

        Ok(())
    }

    /// Drop any stored session tokens.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the credential store fails.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.credentials().clear()?;

        Ok(())
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

    #[tokio::test]
    async fn login_stores_both_tokens() -> TestResult {
        let storage = MemoryStore::new();

        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path == "token/"
                    && request.body
                        == Some(json!({ "username": "admin", "password": "secret" }))
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: StatusCode::OK,
                    body: r#"{"access": "a-token", "refresh": "r-token"}"#.to_string(),
                })
            });

        let client = ApiClient::new(transport, CredentialStore::new(storage.clone()));
        client.login("admin", "secret").await?;

        let credentials = CredentialStore::new(storage);
        assert_eq!(credentials.access_token()?.as_deref(), Some("a-token"));
        assert_eq!(credentials.refresh_token()?.as_deref(), Some("r-token"));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_login_stores_nothing() -> TestResult {
        let storage = MemoryStore::new();

        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(ApiResponse {
                status: StatusCode::BAD_REQUEST,
                body: String::new(),
            })
        });

        let client = ApiClient::new(transport, CredentialStore::new(storage.clone()));
        let result = client.login("admin", "wrong").await;

        assert!(result.is_err(), "expected rejected login to error");
        assert_eq!(CredentialStore::new(storage).access_token()?, None);

        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_the_session() -> TestResult {
        let storage = MemoryStore::new();
        let credentials = CredentialStore::new(storage.clone());
        credentials.store_pair("a", "r")?;

        let client = ApiClient::new(MockTransport::new(), credentials);
        client.logout()?;

        let credentials = CredentialStore::new(storage);
        assert_eq!(credentials.access_token()?, None);
        assert_eq!(credentials.refresh_token()?, None);

        Ok(())
    }
}
