//! Procedural macros for the lariat declarative HTTP client.
//!
//! This crate provides the `#[lariat]` attribute for declaring HTTP clients.
//! Each trait method carries a `#[directive("...")]` attribute describing the
//! endpoint; the macro compiles the directive at build time and generates a
//! client struct and builder.
//!
//! # Example
//!
//! ```ignore
//! use lariat::prelude::*;
//!
//! #[lariat(url = "https://api.example.com")]
//! pub trait UserApi {
//!     #[directive("@GET /users/{id} | @Path id")]
//!     async fn get_user(&self, id: u64) -> lariat::Result<User>;
//! }
//!
//! // Usage:
//! let client = UserApiClient::builder().build()?;
//! let user = client.get_user(42).await?;
//! ```

mod codegen;
mod directive;
mod expand;

use proc_macro::TokenStream;

/// Mark a trait as a lariat HTTP client.
///
/// This macro generates:
/// - A clean trait (without the `#[directive]` attributes)
/// - A client struct implementing the trait (e.g. `UserApiClient`)
/// - A builder struct for constructing the client (e.g. `UserApiClientBuilder`)
///
/// # Attributes
///
/// - `url` (optional): the base URL for the client. When omitted, the base
///   URL must come from the builder or the client configuration.
///
/// # Directives
///
/// Every method needs a `#[directive("...")]` attribute made of `|`-separated
/// segments. The first names the verb and path; the rest bind arguments:
///
/// ```text
/// @GET /users/{id}/posts | @Path id | @Query page | @Header Authorization
/// @POST /users | @Body user
/// ```
///
/// Method arguments are positional: the body first (when `@Body` is present),
/// then one value per path, query, and header binding, in that order. A
/// mismatch between the argument count and the directive is a compile error.
///
/// # Example
///
/// ```ignore
/// #[lariat(url = "https://api.example.com")]
/// pub trait UserApi {
///     #[directive("@GET /users/{id} | @Path id")]
///     async fn get_user(&self, id: u64) -> lariat::Result<User>;
///
///     #[directive("@POST /users | @Body user")]
///     async fn create_user(&self, user: &NewUser) -> lariat::Result<User>;
/// }
///
/// let client = UserApiClient::builder().build()?;
/// let user = client.get_user(42).await?;
/// ```
#[proc_macro_attribute]
pub fn lariat(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::expand_lariat_trait(attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
