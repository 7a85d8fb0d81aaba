//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and macros for glob importing:
//!
//! ```ignore
//! use lariat::prelude::*;
//! ```

pub use crate::{
    ApiClient, ClientConfig, Error, HttpClient, HttpError, HyperClient, LariatClient, Method,
    Request, RequestBuilder, Response, Result, StatusCode, from_json, header, lariat, to_json,
};
pub use serde::{Deserialize, Serialize};
