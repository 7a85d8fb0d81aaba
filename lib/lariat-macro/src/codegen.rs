//! Code generation for the `#[lariat]` proc-macro.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type, Visibility};

use crate::directive::{BindingKind, Directive};

/// Generate the client struct and builder for a trait-based API.
///
/// `base_url` is the optional `url = "..."` literal from the `#[lariat]`
/// attribute; the builder also accepts a base URL directly or through the
/// client configuration, with the builder value winning.
pub fn generate_client_struct(
    vis: &Visibility,
    client_name: &Ident,
    builder_name: &Ident,
    base_url: Option<&str>,
) -> TokenStream {
    let literal_url = match base_url {
        Some(url) => quote! { ::core::option::Option::Some(#url.to_string()) },
        None => quote! { ::core::option::Option::None },
    };

    quote! {
        /// Generated client struct implementing the API trait.
        #vis struct #client_name {
            inner: ::lariat::ApiClient<::lariat::HyperClient>,
        }

        impl #client_name {
            /// Start building a client.
            #[must_use]
            pub fn builder() -> #builder_name {
                #builder_name::default()
            }

            /// The resolved base URL.
            #[must_use]
            pub fn base_url(&self) -> &str {
                ::lariat::LariatClient::base_url(&self.inner)
            }
        }

        impl ::core::fmt::Debug for #client_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(::core::stringify!(#client_name))
                    .field("inner", &self.inner)
                    .finish()
            }
        }

        impl ::core::clone::Clone for #client_name {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }
        }

        /// Builder for the client struct.
        #vis struct #builder_name {
            base_url: ::core::option::Option<String>,
            config: ::lariat::ClientConfig,
            client: ::core::option::Option<::lariat::HyperClient>,
        }

        impl ::core::default::Default for #builder_name {
            fn default() -> Self {
                Self {
                    base_url: ::core::option::Option::None,
                    config: ::lariat::ClientConfig::default(),
                    client: ::core::option::Option::None,
                }
            }
        }

        impl #builder_name {
            /// Override the base URL.
            ///
            /// Takes precedence over the attribute URL and the configured one.
            #[must_use]
            pub fn base_url(mut self, url: impl ::core::convert::Into<String>) -> Self {
                self.base_url = ::core::option::Option::Some(url.into());
                self
            }

            /// Use a client configuration (timeout, retries, default headers).
            #[must_use]
            pub fn config(mut self, config: ::lariat::ClientConfig) -> Self {
                self.config = config;
                self
            }

            /// Add a default header sent with every request.
            #[must_use]
            pub fn header(
                mut self,
                name: impl ::core::convert::Into<String>,
                value: impl ::core::convert::Into<String>,
            ) -> Self {
                self.config = self.config.header(name, value);
                self
            }

            /// Use a custom HTTP client instead of one built from the config.
            #[must_use]
            pub fn client(mut self, client: ::lariat::HyperClient) -> Self {
                self.client = ::core::option::Option::Some(client);
                self
            }

            /// Build the client.
            ///
            /// # Errors
            ///
            /// Fails when no base URL is available from the builder, the
            /// attribute, or the configuration.
            pub fn build(self) -> ::lariat::Result<#client_name> {
                let base_url = self
                    .base_url
                    .or_else(|| #literal_url)
                    .or_else(|| self.config.base_url.clone())
                    .ok_or_else(|| ::lariat::Error::invalid_request(
                        "no base URL: set one on the attribute, the builder, or the configuration",
                    ))?;

                let headers = self.config.headers.clone();
                let client = match self.client {
                    ::core::option::Option::Some(client) => client,
                    ::core::option::Option::None => ::lariat::HyperClient::from_config(&self.config),
                };

                Ok(#client_name {
                    inner: ::lariat::ApiClient::new(client, base_url, headers),
                })
            }
        }
    }
}

/// The kind of return type for a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTypeKind {
    /// JSON deserialization (default): `Result<T>`
    Json,
    /// Raw body bytes: `Result<Bytes>`
    Raw,
    /// Unit type: `Result<()>`
    Unit,
}

/// Analyze the return type to determine how to map the response.
///
/// Extracts the inner type from `Result<T>` and determines:
/// - `Unit`: the type is `()`
/// - `Raw`: the type is `Bytes`
/// - `Json`: everything else (deserialize JSON)
pub fn analyze_return_type(return_type: &syn::ReturnType) -> ReturnTypeKind {
    let ty = match return_type {
        syn::ReturnType::Default => return ReturnTypeKind::Unit,
        syn::ReturnType::Type(_, ty) => ty.as_ref(),
    };

    let inner = unwrap_result_type(ty).unwrap_or(ty);

    if is_unit_type(inner) {
        return ReturnTypeKind::Unit;
    }
    if is_bytes_type(inner) {
        return ReturnTypeKind::Raw;
    }
    ReturnTypeKind::Json
}

/// Generate the body of one generated trait method.
///
/// Every method compiles its directive into a `const` call template and
/// delegates to the shared invoker, so the generated code stays thin:
///
/// ```ignore
/// const CALL_TEMPLATE: CallTemplate = CallTemplate::new(...);
/// let args = CallArgs::new().value(&id);
/// invoke(&self.inner, &CALL_TEMPLATE, args).await
/// ```
pub fn generate_method_body(
    directive: &Directive,
    body_arg: Option<&Ident>,
    value_args: &[Ident],
    return_kind: ReturnTypeKind,
) -> TokenStream {
    let verb = format_ident!("{}", verb_variant(&directive.verb));
    let path = &directive.path;
    let has_body = directive.has_body;

    let bindings: Vec<_> = directive
        .grouped_bindings()
        .into_iter()
        .map(|binding| {
            let name = &binding.name;
            let ctor = match binding.kind {
                BindingKind::Path => quote! { path },
                BindingKind::Query => quote! { query },
                BindingKind::Header => quote! { header },
            };
            quote! { ::lariat::ParamBinding::#ctor(#name) }
        })
        .collect();

    let mut args_expr = quote! { ::lariat::CallArgs::new() };
    if let Some(body) = body_arg {
        args_expr = quote! { #args_expr.json_body(&#body)? };
    }
    for value in value_args {
        args_expr = quote! { #args_expr.value(&#value) };
    }

    let invoke = match return_kind {
        ReturnTypeKind::Json => quote! { ::lariat::invoke(&self.inner, &CALL_TEMPLATE, args) },
        ReturnTypeKind::Raw => quote! { ::lariat::invoke_raw(&self.inner, &CALL_TEMPLATE, args) },
        ReturnTypeKind::Unit => quote! { ::lariat::invoke_unit(&self.inner, &CALL_TEMPLATE, args) },
    };

    quote! {
        const CALL_TEMPLATE: ::lariat::CallTemplate = ::lariat::CallTemplate::new(
            ::lariat::Method::#verb,
            #path,
            &[#(#bindings),*],
            #has_body,
        );
        let args = #args_expr;
        #invoke.await
    }
}

/// Map an upper-case verb to the `Method` enum variant name.
fn verb_variant(verb: &str) -> String {
    let mut chars = verb.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Check if a type is the unit type `()`.
fn is_unit_type(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// Check if a type is `Bytes`.
fn is_bytes_type(ty: &Type) -> bool {
    matches!(ty, Type::Path(type_path) if type_path.path.segments.last().is_some_and(|seg| seg.ident == "Bytes"))
}

/// Unwrap `Result<T>` to get `T`, returns None if not a Result.
fn unwrap_result_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Result"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_type_json() {
        let output: syn::ReturnType = syn::parse_quote!(-> lariat::Result<User>);
        assert_eq!(analyze_return_type(&output), ReturnTypeKind::Json);
    }

    #[test]
    fn return_type_unit() {
        let output: syn::ReturnType = syn::parse_quote!(-> lariat::Result<()>);
        assert_eq!(analyze_return_type(&output), ReturnTypeKind::Unit);
    }

    #[test]
    fn return_type_raw_bytes() {
        let output: syn::ReturnType = syn::parse_quote!(-> lariat::Result<bytes::Bytes>);
        assert_eq!(analyze_return_type(&output), ReturnTypeKind::Raw);
    }

    #[test]
    fn return_type_without_result_wrapper() {
        let output: syn::ReturnType = syn::parse_quote!(-> ());
        assert_eq!(analyze_return_type(&output), ReturnTypeKind::Unit);
    }

    #[test]
    fn verb_variants() {
        assert_eq!(verb_variant("GET"), "Get");
        assert_eq!(verb_variant("DELETE"), "Delete");
        assert_eq!(verb_variant("OPTIONS"), "Options");
    }
}
