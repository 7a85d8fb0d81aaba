//! Declarative HTTP client for Rust.
//!
//! Describe a remote API as a trait, annotate each method with a directive
//! string, and let the `#[lariat]` attribute generate the client.
//!
//! # Example
//!
//! ```ignore
//! use lariat::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[lariat(url = "https://api.example.com")]
//! pub trait UserApi {
//!     #[directive("@GET /users/{id} | @Path id")]
//!     async fn get_user(&self, id: u64) -> lariat::Result<User>;
//!
//!     #[directive("@POST /users | @Body user")]
//!     async fn create_user(&self, user: &User) -> lariat::Result<User>;
//! }
//!
//! let client = UserApiClient::builder().build()?;
//! let user = client.get_user(42).await?;
//! ```
//!
//! # Directive grammar
//!
//! A directive is a `|`-separated list of tags. The first tag names the HTTP
//! verb and the request path; the rest bind method arguments:
//!
//! * `@GET /users/{id}`: verb and path (placeholders in braces)
//! * `@Path name`: substitute a path placeholder
//! * `@Query name`: append a query parameter
//! * `@Header Name`: set a request header
//! * `@Body`: serialize an argument as the JSON request body
//!
//! Arguments are matched to tags positionally: the body argument (if any)
//! comes first, then path values, query values, and header values, in
//! declaration order within each group.

mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

// Re-export client types
pub use api_client::ApiClient;
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::ClientConfig;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use lariat_core::{
    APPLICATION_JSON, BindingRole, CallArgs, CallTemplate, Error, HttpClient, HttpError,
    LariatClient, Method, ParamBinding, Request, RequestBuilder, Response, Result, build_request,
    from_json, invoke, invoke_raw, invoke_unit, status_text, to_json,
};

// Re-export http types for status codes and headers
pub use lariat_core::{StatusCode, header};

// Re-export the attribute macro
pub use lariat_macro::lariat;
