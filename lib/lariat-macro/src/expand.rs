//! Macro expansion logic for the `#[lariat]` attribute.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, Ident, ItemTrait, Pat, TraitItem, TraitItemFn, parse2};

use crate::codegen::{analyze_return_type, generate_client_struct, generate_method_body};
use crate::directive::{BindingKind, Directive, extract_path_placeholders, parse_directive};

/// Arguments for the `#[lariat]` attribute.
#[derive(Default)]
pub struct LariatArgs {
    /// Optional base URL literal.
    pub url: Option<String>,
}

/// Parse the `#[lariat(...)]` attribute arguments.
fn parse_lariat_args(attr: TokenStream) -> syn::Result<LariatArgs> {
    let mut args = LariatArgs::default();

    if attr.is_empty() {
        return Ok(args);
    }

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("url") {
            let value: syn::LitStr = meta.value()?.parse()?;
            args.url = Some(value.value());
            Ok(())
        } else {
            Err(meta.error("unsupported lariat attribute, expected `url`"))
        }
    });

    syn::parse::Parser::parse2(parser, attr)?;
    Ok(args)
}

/// Information about a parsed trait method.
struct TraitMethodInfo {
    /// The method signature.
    sig: syn::Signature,
    /// The parsed endpoint directive.
    directive: Directive,
    /// The body argument, when the directive has `@Body`.
    body_arg: Option<Ident>,
    /// The positional value arguments, in signature order.
    value_args: Vec<Ident>,
    /// Documentation attributes.
    docs: Vec<syn::Attribute>,
}

/// Expand the `#[lariat]` attribute on a trait.
pub fn expand_lariat_trait(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let trait_def: ItemTrait = parse2(item)?;
    let args = parse_lariat_args(attr)?;

    let trait_name = &trait_def.ident;
    let vis = &trait_def.vis;

    let methods = extract_trait_methods(&trait_def)?;
    let clean_trait = generate_clean_trait(vis, trait_name, &methods, &trait_def);

    let client_name = format_ident!("{}Client", trait_name);
    let builder_name = format_ident!("{}ClientBuilder", trait_name);

    let client_and_builder =
        generate_client_struct(vis, &client_name, &builder_name, args.url.as_deref());
    let trait_impl = generate_trait_impl(trait_name, &client_name, &methods);

    Ok(quote! {
        #clean_trait
        #client_and_builder
        #trait_impl
    })
}

/// Extract methods from a trait definition.
///
/// Every method must carry exactly one `#[directive("...")]` attribute, and
/// its argument list must line up with what the directive binds. Both checks
/// fail the build rather than deferring to runtime.
fn extract_trait_methods(trait_def: &ItemTrait) -> syn::Result<Vec<TraitMethodInfo>> {
    let mut methods = Vec::new();

    for item in &trait_def.items {
        if let TraitItem::Fn(method) = item {
            let attr = method
                .attrs
                .iter()
                .find(|a| a.path().is_ident("directive"))
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        &method.sig,
                        format!(
                            "method `{}` is missing a #[directive(\"...\")] attribute",
                            method.sig.ident
                        ),
                    )
                })?;

            let directive_str = parse_attr_string(attr)?;
            let directive = parse_directive(&directive_str)
                .map_err(|msg| syn::Error::new_spanned(attr, msg))?;
            check_path_bindings(attr, &directive)?;

            let (body_arg, value_args) = check_method_args(method, &directive)?;
            let docs = method
                .attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .cloned()
                .collect();

            methods.push(TraitMethodInfo {
                sig: method.sig.clone(),
                directive,
                body_arg,
                value_args,
                docs,
            });
        }
    }

    Ok(methods)
}

/// Parse the string literal out of an attribute like `#[directive("...")]`.
fn parse_attr_string(attr: &syn::Attribute) -> syn::Result<String> {
    match &attr.meta {
        syn::Meta::List(meta_list) => {
            let lit: syn::LitStr = syn::parse2(meta_list.tokens.clone())?;
            Ok(lit.value())
        }
        _ => Err(syn::Error::new_spanned(attr, "expected string argument")),
    }
}

/// Check that every `@Path` binding has a matching `{name}` placeholder.
///
/// A placeholder without a binding is left in the path verbatim at runtime,
/// but a binding without a placeholder can never be substituted, so it fails
/// the build.
fn check_path_bindings(attr: &syn::Attribute, directive: &Directive) -> syn::Result<()> {
    let placeholders = extract_path_placeholders(&directive.path);
    for binding in &directive.bindings {
        if binding.kind == BindingKind::Path && !placeholders.contains(&binding.name) {
            return Err(syn::Error::new_spanned(
                attr,
                format!(
                    "@Path binding `{}` has no `{{{}}}` placeholder in \"{}\"",
                    binding.name, binding.name, directive.path,
                ),
            ));
        }
    }
    Ok(())
}

/// Validate a method signature against its directive and split the arguments.
///
/// Generated methods take their arguments positionally: the body first (when
/// the directive has `@Body`), then one value per binding in path, query,
/// header order.
fn check_method_args(
    method: &TraitItemFn,
    directive: &Directive,
) -> syn::Result<(Option<Ident>, Vec<Ident>)> {
    if method.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            &method.sig,
            format!("method `{}` must be async", method.sig.ident),
        ));
    }

    let has_receiver = method
        .sig
        .inputs
        .first()
        .is_some_and(|arg| matches!(arg, FnArg::Receiver(_)));
    if !has_receiver {
        return Err(syn::Error::new_spanned(
            &method.sig,
            format!("method `{}` must take `&self`", method.sig.ident),
        ));
    }

    let mut idents = Vec::new();
    for input in &method.sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) => idents.push(pat_ident.ident.clone()),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "arguments must be plain identifiers",
                    ));
                }
            }
        }
    }

    let expected = directive.arg_count();
    if idents.len() != expected {
        return Err(syn::Error::new_spanned(
            &method.sig,
            format!(
                "method `{}` takes {} argument(s) but its directive binds {} \
                 (expected order: [body,] path values, query values, header values)",
                method.sig.ident,
                idents.len(),
                expected,
            ),
        ));
    }

    let mut iter = idents.into_iter();
    let body_arg = directive.has_body.then(|| iter.next()).flatten();
    let value_args: Vec<_> = iter.collect();

    Ok((body_arg, value_args))
}

/// Generate a clean trait without the directive attributes.
fn generate_clean_trait(
    vis: &syn::Visibility,
    name: &Ident,
    methods: &[TraitMethodInfo],
    original: &ItemTrait,
) -> TokenStream {
    let trait_attrs: Vec<_> = original
        .attrs
        .iter()
        .filter(|a| {
            let path = a.path();
            path.is_ident("doc") || path.is_ident("allow") || path.is_ident("cfg")
        })
        .collect();

    let method_signatures: Vec<_> = methods
        .iter()
        .map(|m| {
            let docs = &m.docs;
            let sig = &m.sig;
            quote! {
                #(#docs)*
                #sig;
            }
        })
        .collect();

    quote! {
        #(#trait_attrs)*
        #[allow(async_fn_in_trait)]
        #vis trait #name {
            #(#method_signatures)*
        }
    }
}

/// Generate the trait implementation for the client struct.
fn generate_trait_impl(
    trait_name: &Ident,
    client_name: &Ident,
    methods: &[TraitMethodInfo],
) -> TokenStream {
    let method_impls: Vec<_> = methods
        .iter()
        .map(|m| {
            let sig = &m.sig;
            let return_kind = analyze_return_type(&m.sig.output);
            let body = generate_method_body(
                &m.directive,
                m.body_arg.as_ref(),
                &m.value_args,
                return_kind,
            );

            quote! {
                #sig {
                    #body
                }
            }
        })
        .collect();

    quote! {
        impl #trait_name for #client_name {
            #(#method_impls)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn parse_lariat_args_with_url() {
        let attr: TokenStream = quote! { url = "https://api.example.com" };
        let args = parse_lariat_args(attr).expect("parse");
        assert_eq!(args.url, Some("https://api.example.com".to_string()));
    }

    #[test]
    fn parse_lariat_args_empty() {
        let args = parse_lariat_args(TokenStream::new()).expect("parse");
        assert!(args.url.is_none());
    }

    #[test]
    fn parse_lariat_args_unknown_key() {
        let attr: TokenStream = quote! { user_agent = "x" };
        assert!(parse_lariat_args(attr).is_err());
    }

    #[test]
    fn expand_simple_trait() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@GET /users/{id} | @Path id")]
                async fn get_user(&self, id: u64) -> lariat::Result<User>;
            }
        };

        let expanded = expand_lariat_trait(attr, item).expect("expand");
        let text = expanded.to_string();
        assert!(text.contains("UserApiClient"));
        assert!(text.contains("UserApiClientBuilder"));
        assert!(text.contains("CALL_TEMPLATE"));
    }

    #[test]
    fn expand_trait_with_body_and_headers() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@POST /users | @Header Authorization | @Body user")]
                async fn create_user(&self, user: &NewUser, auth: &str) -> lariat::Result<User>;
            }
        };

        let expanded = expand_lariat_trait(attr, item).expect("expand");
        let text = expanded.to_string();
        assert!(text.contains("json_body"));
        assert!(text.contains("Authorization"));
    }

    #[test]
    fn expand_rejects_arity_mismatch() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@GET /users/{id} | @Path id | @Query verbose")]
                async fn get_user(&self, id: u64) -> lariat::Result<User>;
            }
        };

        let err = expand_lariat_trait(attr, item).expect_err("should fail");
        assert!(err.to_string().contains("binds 2"));
    }

    #[test]
    fn expand_rejects_missing_directive() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                async fn get_user(&self, id: u64) -> lariat::Result<User>;
            }
        };

        let err = expand_lariat_trait(attr, item).expect_err("should fail");
        assert!(err.to_string().contains("missing a #[directive"));
    }

    #[test]
    fn expand_rejects_non_async_method() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@GET /users")]
                fn list_users(&self) -> lariat::Result<Vec<User>>;
            }
        };

        let err = expand_lariat_trait(attr, item).expect_err("should fail");
        assert!(err.to_string().contains("must be async"));
    }

    #[test]
    fn expand_rejects_bad_directive() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@TRACE /users")]
                async fn list_users(&self) -> lariat::Result<Vec<User>>;
            }
        };

        let err = expand_lariat_trait(attr, item).expect_err("should fail");
        assert!(err.to_string().contains("unsupported HTTP verb"));
    }

    #[test]
    fn expand_rejects_path_binding_without_placeholder() {
        let attr: TokenStream = quote! { url = "http://localhost:8080" };
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@GET /users | @Path id")]
                async fn get_user(&self, id: u64) -> lariat::Result<User>;
            }
        };

        let err = expand_lariat_trait(attr, item).expect_err("should fail");
        assert!(err.to_string().contains("no `{id}` placeholder"));
    }

    #[test]
    fn expand_without_url_still_succeeds() {
        // The base URL can come from the builder or configuration instead.
        let item: TokenStream = quote! {
            pub trait UserApi {
                #[directive("@DELETE /users/{id} | @Path id")]
                async fn delete_user(&self, id: u64) -> lariat::Result<()>;
            }
        };

        let expanded = expand_lariat_trait(TokenStream::new(), item).expect("expand");
        assert!(expanded.to_string().contains("invoke_unit"));
    }
}
