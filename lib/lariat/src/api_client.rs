//! Generic API client wrapper.
//!
//! This module provides [`ApiClient`], a wrapper that combines any
//! [`HttpClient`] with a base URL and default headers to form a
//! [`LariatClient`].

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;

use crate::{HttpClient, LariatClient, Request, Response, Result};

/// Generic API client wrapper.
///
/// Wraps any [`HttpClient`] with a base URL and default headers. This is what
/// the `#[lariat]` macro builds under the hood, and it is also useful for
/// sharing a single HTTP client (with its connection pool and middleware)
/// across multiple API traits.
///
/// # Example
///
/// ```ignore
/// use std::collections::HashMap;
/// use lariat::{ApiClient, HyperClient};
///
/// let http = HyperClient::builder().with_logging().build();
///
/// let github = ApiClient::new(http.clone(), "https://api.github.com", HashMap::new());
/// let gitlab = ApiClient::new(http, "https://gitlab.com/api/v4", HashMap::new());
/// ```
#[derive(Debug)]
pub struct ApiClient<C> {
    client: C,
    base_url: String,
    headers: HashMap<String, String>,
}

impl<C: Clone> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            headers: self.headers.clone(),
        }
    }
}

impl<C> ApiClient<C> {
    /// Create a new API client.
    ///
    /// Request paths are appended to `base_url` as-is, so a base URL with
    /// path segments (e.g. `https://host/api/v1`) keeps them. A trailing
    /// slash on the base URL is dropped to avoid doubled slashes.
    #[must_use]
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        headers: HashMap<String, String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            headers,
        }
    }

    /// Add a default header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the wrapper and return the inner HTTP client.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C> LariatClient for ApiClient<C>
where
    C: HttpClient + Clone + Send + Sync,
{
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        self.client.execute(request)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
