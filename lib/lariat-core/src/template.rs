//! Compiled call templates.
//!
//! A [`CallTemplate`] is the compiled form of a directive string like
//! `@GET /users/{id} | @Query page | @Header Authorization`: the HTTP method,
//! the path template, the ordered parameter bindings, and whether the call
//! carries a body. The `#[lariat]` macro emits one `const` template per trait
//! method; the invoker in [`crate::invoker`] executes them.

use crate::Method;

/// Where a bound value goes in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingRole {
    /// Substituted into a `{name}` placeholder in the path.
    Path,
    /// Appended as a `name=value` query parameter.
    Query,
    /// Sent as a `name: value` request header.
    Header,
}

/// A single named binding in a call template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamBinding {
    /// Placeholder, query parameter, or header name.
    pub name: &'static str,
    /// Where the bound value goes.
    pub role: BindingRole,
}

impl ParamBinding {
    /// A path placeholder binding.
    #[must_use]
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            role: BindingRole::Path,
        }
    }

    /// A query parameter binding.
    #[must_use]
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            role: BindingRole::Query,
        }
    }

    /// A header binding.
    #[must_use]
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            role: BindingRole::Header,
        }
    }
}

/// The compiled form of one endpoint directive.
///
/// Bindings are ordered: all path bindings first, then query, then header,
/// matching the positional argument order of the generated method
/// (`[body,] path values.., query values.., header values..`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTemplate {
    /// HTTP method from the directive verb.
    pub method: Method,
    /// Path template, possibly containing `{name}` placeholders.
    pub path: &'static str,
    /// Ordered value bindings.
    pub bindings: &'static [ParamBinding],
    /// Whether the call sends a JSON body.
    pub has_body: bool,
}

impl CallTemplate {
    /// Creates a new call template.
    #[must_use]
    pub const fn new(
        method: Method,
        path: &'static str,
        bindings: &'static [ParamBinding],
        has_body: bool,
    ) -> Self {
        Self {
            method,
            path,
            bindings,
            has_body,
        }
    }

    /// Number of positional values this template consumes (body excluded).
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.bindings.len()
    }

    /// Bindings with the given role, in declaration order.
    pub fn bindings_with_role(
        &self,
        role: BindingRole,
    ) -> impl Iterator<Item = &'static ParamBinding> {
        self.bindings.iter().filter(move |b| b.role == role)
    }
}
