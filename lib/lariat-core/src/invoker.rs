//! Template execution.
//!
//! The `#[lariat]` macro generates one thin method per endpoint; every one of
//! them funnels into the functions here. [`build_request`] turns a
//! [`CallTemplate`] plus positional [`CallArgs`] into a concrete [`Request`],
//! and the `invoke_*` functions execute it and map the response.

use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::template::{BindingRole, CallTemplate};
use crate::{Error, HttpError, LariatClient, Request, Result};

// Encodes all except unreserved characters (A-Z a-z 0-9 - . _ ~) and
// sub-delims, so spaces, `&`, `?`, `/` etc. in a path value never change the
// URL structure.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Positional arguments for one call.
///
/// Values are consumed in template binding order (path placeholders, then
/// query parameters, then headers); the optional body rides alongside.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    values: Vec<String>,
    body: Option<Bytes>,
}

impl CallArgs {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next positional value.
    #[must_use]
    pub fn value(mut self, value: impl ToString) -> Self {
        self.values.push(value.to_string());
        self
    }

    /// Sets a JSON-serialized body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json_body<T: serde::Serialize>(mut self, value: &T) -> Result<Self> {
        self.body = Some(crate::to_json(value)?);
        Ok(self)
    }

    /// Number of positional values supplied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if no positional values were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the concrete request for one call.
///
/// The path template's `{name}` placeholders are substituted with
/// percent-encoded values; a placeholder with no matching binding is left in
/// the path verbatim. The path is appended to the client's base URL by string
/// concatenation, so base URLs with path segments (e.g. `https://host/api/v1`)
/// keep them. Default headers are copied in first, then per-call headers, so
/// a per-call header wins without mutating the client's defaults.
///
/// # Errors
///
/// - [`Error::ArityMismatch`] if the number of supplied values differs from
///   the number of template bindings.
/// - [`Error::InvalidUrl`] if the concatenated URL does not parse.
pub fn build_request<C: LariatClient>(
    client: &C,
    template: &CallTemplate,
    args: &CallArgs,
) -> Result<Request<Bytes>> {
    if args.values.len() != template.arity() {
        return Err(Error::ArityMismatch {
            expected: template.arity(),
            actual: args.values.len(),
        });
    }

    // Bindings and values are index-aligned: path, then query, then header.
    let bound = || template.bindings.iter().zip(&args.values);

    let mut path = template.path.to_string();
    for (binding, value) in bound() {
        if binding.role == BindingRole::Path {
            let placeholder = format!("{{{}}}", binding.name);
            let encoded = utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string();
            path = path.replace(&placeholder, &encoded);
        }
    }

    let url = url::Url::parse(&format!("{}{path}", client.base_url()))?;

    let mut builder = Request::builder(template.method, url)
        .headers(client.default_headers().clone().into_iter());

    if let Some(body) = &args.body {
        builder = builder
            .header("Content-Type", crate::APPLICATION_JSON)
            .body(body.clone());
    }

    for (binding, value) in bound() {
        builder = match binding.role {
            BindingRole::Path => builder,
            BindingRole::Query => builder.query(binding.name, value),
            BindingRole::Header => builder.header(binding.name, value),
        };
    }

    Ok(builder.build())
}

/// Execute a call and decode the 2xx response body as JSON.
///
/// # Errors
///
/// - [`Error::Http`] for non-2xx responses or transport failures.
/// - [`Error::Decode`] if a 2xx body does not deserialize into `T`.
pub async fn invoke<C, T>(client: &C, template: &CallTemplate, args: CallArgs) -> Result<T>
where
    C: LariatClient,
    T: serde::de::DeserializeOwned,
{
    let response = execute(client, template, args).await?;
    response.json()
}

/// Execute a call, discarding any 2xx response body.
///
/// # Errors
///
/// Returns [`Error::Http`] for non-2xx responses or transport failures.
pub async fn invoke_unit<C>(client: &C, template: &CallTemplate, args: CallArgs) -> Result<()>
where
    C: LariatClient,
{
    execute(client, template, args).await.map(|_| ())
}

/// Execute a call, returning the raw 2xx response body.
///
/// # Errors
///
/// Returns [`Error::Http`] for non-2xx responses or transport failures.
pub async fn invoke_raw<C>(client: &C, template: &CallTemplate, args: CallArgs) -> Result<Bytes>
where
    C: LariatClient,
{
    let response = execute(client, template, args).await?;
    Ok(response.into_body())
}

async fn execute<C: LariatClient>(
    client: &C,
    template: &CallTemplate,
    args: CallArgs,
) -> Result<crate::Response<Bytes>> {
    let request = build_request(client, template, &args)?;
    tracing::debug!(
        method = %request.method(),
        url = %request.url(),
        "executing call"
    );
    let response = client.execute(request).await?;
    if response.is_success() {
        Ok(response)
    } else {
        let err: HttpError = response.into_http_error();
        tracing::debug!(status = err.status, "call failed: {}", err.status_text);
        Err(err.into())
    }
}
