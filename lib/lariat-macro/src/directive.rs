//! Directive string parsing.
//!
//! An endpoint directive is a single string of `|`- or newline-separated
//! segments. One segment names the HTTP verb and path; the rest bind method
//! arguments to path placeholders, query parameters, headers, or the request
//! body:
//!
//! ```text
//! @GET /users/{id} | @Path id | @Query verbose | @Header Authorization
//! @POST /users | @Body user
//! ```
//!
//! Tags are case-insensitive (`@PATH` and `@Path` are the same binding) and
//! segments may appear in any order. Segments with an unrecognized tag or
//! with a missing value are skipped, so directives can carry annotations this
//! library does not interpret.

/// Where a directive binds an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `@Path name` - substituted into a `{name}` placeholder.
    Path,
    /// `@Query name` - appended as a query parameter.
    Query,
    /// `@Header name` - sent as a request header.
    Header,
}

/// One parsed `@Path` / `@Query` / `@Header` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBinding {
    /// Placeholder, parameter, or header name.
    pub name: String,
    /// Binding kind.
    pub kind: BindingKind,
}

/// A fully parsed endpoint directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Upper-case HTTP verb (`GET`, `POST`, ...).
    pub verb: String,
    /// Path template, possibly containing `{name}` placeholders.
    pub path: String,
    /// Bindings in declaration order.
    pub bindings: Vec<DirectiveBinding>,
    /// Whether a `@Body` segment is present.
    pub has_body: bool,
}

impl Directive {
    /// Bindings regrouped as path, then query, then header, each group in
    /// declaration order. This is the positional order generated methods
    /// consume their arguments in.
    #[must_use]
    pub fn grouped_bindings(&self) -> Vec<&DirectiveBinding> {
        let mut grouped = Vec::with_capacity(self.bindings.len());
        for kind in [BindingKind::Path, BindingKind::Query, BindingKind::Header] {
            grouped.extend(self.bindings.iter().filter(|b| b.kind == kind));
        }
        grouped
    }

    /// Number of method arguments this directive expects, body included.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.bindings.len() + usize::from(self.has_body)
    }
}

const SUPPORTED_VERBS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

// Verb-shaped tags we recognize but do not support; using one is a mistake
// worth naming, not an annotation to skip.
const UNSUPPORTED_VERBS: &[&str] = &["TRACE", "CONNECT"];

/// Parse a directive string.
///
/// Segments may appear in any order; tags are matched case-insensitively.
/// Segments with an unrecognized tag or a missing value are skipped.
///
/// # Errors
///
/// Returns a message describing the first problem found: a missing or
/// duplicate verb segment, an unsupported verb, a path that does not start
/// with `/`, or a duplicate `@Body`.
pub fn parse_directive(input: &str) -> Result<Directive, String> {
    let mut verb: Option<String> = None;
    let mut path = String::new();
    let mut bindings = Vec::new();
    let mut has_body = false;

    for segment in input.split(['|', '\n']).map(str::trim) {
        let (tag, value) = match segment.split_once(char::is_whitespace) {
            Some((tag, value)) => (tag, value.trim()),
            None => (segment, ""),
        };
        let Some(tag) = tag.strip_prefix('@') else {
            continue;
        };
        let tag = tag.to_uppercase();

        if SUPPORTED_VERBS.contains(&tag.as_str()) {
            if verb.is_some() {
                return Err(format!("duplicate verb directive: @{tag}"));
            }
            if value.is_empty() {
                return Err("missing HTTP method or path".to_string());
            }
            if !value.starts_with('/') {
                return Err(format!("path must start with '/', got \"{value}\""));
            }
            verb = Some(tag);
            path = value.to_string();
            continue;
        }
        if UNSUPPORTED_VERBS.contains(&tag.as_str()) {
            return Err(format!(
                "unsupported HTTP verb: {tag}. Supported: {}",
                SUPPORTED_VERBS.join(", ")
            ));
        }

        let kind = match tag.as_str() {
            "PATH" => BindingKind::Path,
            "QUERY" => BindingKind::Query,
            "HEADER" => BindingKind::Header,
            "BODY" => {
                // A bare @Body (no name) is a malformed entry, skipped like
                // any other.
                if !value.is_empty() {
                    if has_body {
                        return Err("duplicate @Body segment".to_string());
                    }
                    has_body = true;
                }
                continue;
            }
            // Unrecognized tags are deliberately skipped.
            _ => continue,
        };

        // Binding tag without a name: malformed entry, skipped.
        if !value.is_empty() {
            bindings.push(DirectiveBinding {
                name: value.to_string(),
                kind,
            });
        }
    }

    let verb = verb.ok_or_else(|| "missing HTTP method or path".to_string())?;

    Ok(Directive {
        verb,
        path,
        bindings,
        has_body,
    })
}

/// Extract `{name}` placeholder names from a path template, in order.
#[must_use]
pub fn extract_path_placeholders(path: &str) -> Vec<String> {
    let mut placeholders = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        placeholders.push(rest[start + 1..start + len].to_string());
        rest = &rest[start + len + 1..];
    }
    placeholders
}
