//! Core types and the shared invoker for the lariat declarative HTTP client.
//!
//! This crate provides the foundational types used by lariat:
//! - [`Method`] - HTTP method enum
//! - [`CallTemplate`] and [`ParamBinding`] - compiled endpoint directives
//! - [`CallArgs`] and the `invoke_*` functions - template execution
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Error`], [`HttpError`], and [`Result`] - Error handling
//! - [`HttpClient`] - Core client trait for HTTP execution
//! - [`LariatClient`] - Extended client trait with base URL and default headers
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod error;
pub mod invoker;
mod method;
pub mod prelude;
mod request;
mod response;
pub mod template;

pub use body::{APPLICATION_JSON, from_json, to_json};
pub use client::{HttpClient, LariatClient};
pub use error::{Error, HttpError, Result};
pub use invoker::{CallArgs, build_request, invoke, invoke_raw, invoke_unit};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::{Response, status_text};
pub use template::{BindingRole, CallTemplate, ParamBinding};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
