//! HTTP client for the storefront REST API.
//!
//! [`transport::Transport`] is the seam between request descriptions and the
//! wire; [`client::ApiClient`] decorates it with bearer attachment and the
//! single 401-driven refresh-and-retry. The [`catalog`], [`orders`], and
//! [`auth`] modules add typed wrappers for every endpoint the storefront and
//! the admin dashboard consume.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod orders;
pub mod transport;

pub use auth::credentials::CredentialStore;
pub use client::{ApiClient, ApiError, Listing};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};
