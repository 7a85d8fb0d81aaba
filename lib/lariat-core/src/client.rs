//! HTTP client traits.
//!
//! - [`HttpClient`] - Low-level HTTP execution
//! - [`LariatClient`] - High-level client with base URL and default headers
//!   (what the `#[lariat]` macro generates code against)
//!
//! Most users should use the `#[lariat]` macro which generates clients
//! automatically. Implement [`LariatClient`] directly for custom auth or
//! testing.

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// This trait defines the interface for executing HTTP requests.
/// Implementations should be async-first and support connection pooling.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid response
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

// ============================================================================
// Lariat Client Trait
// ============================================================================

/// Trait for types that can serve as lariat API clients.
///
/// Combines HTTP execution with a base URL and a set of default headers.
/// Request paths are appended to the base URL as-is, so a base of
/// `https://host/api/v1` keeps its path segments.
///
/// Default headers are copied into every request before per-call headers are
/// applied, so a per-call header with the same name wins without mutating the
/// defaults.
///
/// # Implementing `LariatClient`
///
/// Implement this trait for your own types to:
/// - Add custom request interceptors (e.g., authentication headers)
/// - Create mock clients for testing
/// - Wrap existing HTTP clients with additional functionality
///
/// # Example
///
/// ```ignore
/// use lariat::{LariatClient, Request, Response, Result};
/// use bytes::Bytes;
///
/// #[derive(Clone)]
/// struct RecordingClient {
///     inner: HyperClient,
///     base_url: String,
///     defaults: HashMap<String, String>,
/// }
///
/// impl LariatClient for RecordingClient {
///     fn execute(
///         &self,
///         request: Request<Bytes>,
///     ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
///         let inner = self.inner.clone();
///         async move {
///             tracing::info!(url = %request.url(), "outgoing");
///             inner.execute(request).await
///         }
///     }
///
///     fn base_url(&self) -> &str {
///         &self.base_url
///     }
///
///     fn default_headers(&self) -> &HashMap<String, String> {
///         &self.defaults
///     }
/// }
/// ```
pub trait LariatClient: Clone + Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid response
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;

    /// The base URL all request paths are appended to.
    fn base_url(&self) -> &str;

    /// Headers applied to every request, unless a call overrides them.
    fn default_headers(&self) -> &HashMap<String, String>;
}
