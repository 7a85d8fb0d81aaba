//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use lariat_core::prelude::*;
//! ```

pub use crate::{
    CallArgs, CallTemplate, Error, HttpClient, HttpError, LariatClient, Method, ParamBinding,
    Request, RequestBuilder, Response, Result, from_json, to_json,
};
