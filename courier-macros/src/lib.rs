use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

/// Derive macro for implementing the `Request` trait.
///
/// The response type is named with a `#[response(T)]` attribute; without
/// one, the request is void-style and gets `courier::Unit`.
///
/// ```rust,ignore
/// #[derive(Request)]
/// #[response(Pong)]
/// struct Ping;
///
/// #[derive(Request)]
/// struct Notify; // Response = Unit
/// ```
#[proc_macro_derive(Request, attributes(response))]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut response: Option<Type> = None;
    for attr in &input.attrs {
        if attr.path().is_ident("response") {
            match attr.parse_args::<Type>() {
                Ok(ty) => response = Some(ty),
                Err(err) => return err.to_compile_error().into(),
            }
        }
    }

    let response_ty = match response {
        Some(ty) => quote! { #ty },
        None => quote! { ::courier::Unit },
    };

    let expanded = quote! {
        impl #impl_generics ::courier::Request for #name #ty_generics #where_clause {
            type Response = #response_ty;
        }
    };

    TokenStream::from(expanded)
}
