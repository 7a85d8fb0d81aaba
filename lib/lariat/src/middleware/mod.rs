//! Tower middleware layers for the lariat HTTP client.
//!
//! This module provides composable middleware layers that can be applied to
//! the HTTP client using Tower's `Layer` trait. Middleware layers are applied
//! in reverse order - the last layer added is the first to process requests.
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//! - [`RetryPolicy`] - Fixed-wait retry policy for [`RetryLayer`]
//! - [`RetryLayer`] - Retries failed requests based on a policy (from `tower`)
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use lariat::HyperClient;
//!
//! let client = HyperClient::builder()
//!     .with_retry(3, Duration::from_secs(1))
//!     .with_logging()
//!     .build();
//! ```

mod logging;
mod retry;

pub use logging::{LogLevel, Logging, LoggingLayer};
pub use retry::RetryPolicy;

// Re-export tower types for convenience
pub use tower::retry::RetryLayer;
pub use tower::{Layer, ServiceBuilder};
