extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Adds `to_string` / `from_string` JSON helpers
/// to a serde type. The deriving crate must depend on `anyhow`, `serde` and `serde_json`.
#[proc_macro_derive(Json)]
pub fn json_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub fn to_string(&self) -> ::anyhow::Result<String>
            where
                Self: ::serde::Serialize,
            {
                ::serde_json::to_string(&self).map_err(::anyhow::Error::msg)
            }

            pub fn from_string<'a>(str: impl Into<&'a str>) -> ::anyhow::Result<Self>
            where
                Self: Sized,
                for<'b> Self: ::serde::Deserialize<'b>,
            {
                ::serde_json::from_str(str.into()).map_err(::anyhow::Error::msg)
            }
        }
    };

    TokenStream::from(expanded)
}
