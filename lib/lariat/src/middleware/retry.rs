//! Retry middleware for HTTP requests.
//!
//! Provides a fixed-wait retry policy for use with `tower::retry::RetryLayer`.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use tower::retry::Policy;

use crate::{Error, Request, Response};

/// A fixed-wait retry policy for HTTP requests.
///
/// Retries:
/// - Transport failures (no response received, including timeouts)
/// - 5xx server errors
/// - 429 Too Many Requests
///
/// Between attempts the policy waits a fixed duration.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use lariat::middleware::RetryPolicy;
/// use tower::retry::RetryLayer;
///
/// let layer = RetryLayer::new(RetryPolicy::new(3, Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    remaining: u32,
    wait: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy with the given retry count and wait.
    #[must_use]
    pub const fn new(max_retries: u32, wait: Duration) -> Self {
        Self {
            remaining: max_retries,
            wait,
        }
    }

    /// Returns `true` if the response should be retried.
    fn should_retry_response(response: &Response<Bytes>) -> bool {
        let status = response.status();
        status >= 500 || status == 429
    }

    /// Returns `true` if the error should be retried.
    fn should_retry_error(error: &Error) -> bool {
        error.is_transport()
    }
}

impl Policy<Request<Bytes>, Response<Bytes>, Error> for RetryPolicy {
    type Future = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn retry(
        &mut self,
        _req: &mut Request<Bytes>,
        result: &mut Result<Response<Bytes>, Error>,
    ) -> Option<Self::Future> {
        if self.remaining == 0 {
            return None;
        }

        let should_retry = match result {
            Ok(response) => Self::should_retry_response(response),
            Err(error) => Self::should_retry_error(error),
        };

        if should_retry {
            self.remaining -= 1;
            let wait = self.wait;
            Some(Box::pin(tokio::time::sleep(wait)))
        } else {
            None
        }
    }

    fn clone_request(&mut self, req: &Request<Bytes>) -> Option<Request<Bytes>> {
        // Clone the request for retry
        Some(req.clone())
    }
}
