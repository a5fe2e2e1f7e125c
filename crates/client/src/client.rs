//! Authorized API client with one-shot refresh-and-retry.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use souk_store::{SnapshotStore, StorageError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    auth::credentials::CredentialStore,
    transport::{ApiRequest, ApiResponse, Transport, TransportError},
};

/// Endpoint that exchanges a refresh token for a new access token.
pub const TOKEN_REFRESH_PATH: &str = "token/refresh/";

/// Errors raised by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Credential store failure.
    #[error("credential storage error")]
    Storage(#[from] StorageError),

    /// Refresh token was rejected; both tokens have been purged and a new
    /// login is required. The only session-ending condition.
    #[error("session expired; a new login is required")]
    SessionExpired,

    /// API answered with a non-2xx status.
    #[error("unexpected response from API: status {status}")]
    UnexpectedResponse {
        /// HTTP status of the response.
        status: StatusCode,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// Response body did not decode into the expected shape.
    #[error("failed to decode API response")]
    Decode(#[from] serde_json::Error),
}

/// Per-request retry state.
///
/// Carried explicitly through the retry decorator instead of being mutated
/// onto a shared request object, so a request can never be replayed twice.
#[derive(Debug, Clone, Copy, Default)]
struct RequestContext {
    retried: bool,
}

/// API list responses arrive either as a bare array or wrapped in a
/// `results` envelope; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Bare JSON array.
    Bare(Vec<T>),
    /// Paginated envelope.
    Paged {
        /// The page of results.
        results: Vec<T>,
    },
}

impl<T> Listing<T> {
    /// The items, whichever shape they arrived in.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paged { results: items } => items,
        }
    }
}

/// Decorator around a [`Transport`] that attaches the stored bearer token to
/// every outbound request and performs the single 401-driven
/// refresh-and-retry.
#[derive(Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    credentials: CredentialStore<S>,
}

impl<T: Transport, S: SnapshotStore> ApiClient<T, S> {
    /// Create a client over the given transport and credential store.
    #[must_use]
    pub fn new(transport: T, credentials: CredentialStore<S>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// The credential store backing this client.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    /// Send a request with bearer attachment and retry-once semantics.
    ///
    /// When an access token is stored it is attached as a bearer header;
    /// otherwise the request goes out unauthenticated. On a 401 the stored
    /// refresh token (if any) is exchanged for a new access token and the
    /// request is replayed exactly once; a 401 on the replay propagates as
    /// the response. Without a refresh token the original 401 propagates.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when the request cannot be delivered.
    /// - [`ApiError::SessionExpired`] when the refresh exchange is rejected;
    ///   both stored tokens are purged first.
    /// - [`ApiError::Storage`] when the credential store fails.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut context = RequestContext::default();

        loop {
            let mut attempt = request.clone();
            attempt.bearer = self.credentials.access_token()?;

            let response = self.transport.send(&attempt).await?;

            if response.status != StatusCode::UNAUTHORIZED || context.retried {
                return Ok(response);
            }

            let Some(refresh) = self.credentials.refresh_token()? else {
                return Ok(response);
            };

            debug!("access token rejected, attempting refresh");
            context.retried = true;
            self.refresh_access_token(&refresh).await?;
        }
    }

    /// Send a request and decode a 2xx JSON body.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::execute`] raises, plus
    /// [`ApiError::UnexpectedResponse`] for non-2xx statuses and
    /// [`ApiError::Decode`] for undecodable bodies.
    pub async fn request_json<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let response = self.execute(request).await?;

        if !response.is_success() {
            return Err(ApiError::UnexpectedResponse {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.json()?)
    }

    /// Send a request and require a 2xx status, discarding the body.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::execute`] raises, plus
    /// [`ApiError::UnexpectedResponse`] for non-2xx statuses.
    pub async fn request_ok(&self, request: ApiRequest) -> Result<(), ApiError> {
        let response = self.execute(request).await?;

        if !response.is_success() {
            return Err(ApiError::UnexpectedResponse {
                status: response.status,
                body: response.body,
            });
        }

        Ok(())
    }

    /// Exchange the refresh token and store the new access token. Any
    /// rejection purges both stored tokens and ends the session.
    async fn refresh_access_token(&self, refresh: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::POST, TOKEN_REFRESH_PATH)
            .with_body(json!({ "refresh": refresh }));

        let outcome = self.transport.send(&request).await;

        match outcome {
            Ok(response) if response.is_success() => {
                let parsed: RefreshResponse = response.json()?;
                self.credentials.store_access_token(&parsed.access)?;

                Ok(())
            }
            Ok(response) => {
                warn!("token refresh rejected with status {}", response.status);
                self.credentials.clear()?;

                Err(ApiError::SessionExpired)
            }
            Err(error) => {
                self.credentials.clear()?;

                Err(error.into())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}
