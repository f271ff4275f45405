//! Procedural macros for `strict_settings`.
//!
//! `#[derive(Validate)]` implements `strict_settings::Validate` for a struct
//! with named fields. The generated `first_unset` visits the fields in
//! declaration order, delegates to each field's own `Validate`
//! implementation, and prefixes the reported path with the field's key.
//!
//! Keys follow serde: `#[serde(rename = "...")]`, `#[serde(rename_all =
//! "...")]` and `#[serde(flatten)]` are honoured so that reported paths match
//! the keys written in the YAML file. The `#[settings(...)]` attribute
//! accepts `skip` (never report the field) and `rename = "..."` (report the
//! field under a different key).

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `strict_settings::Validate`.
#[proc_macro_derive(Validate, attributes(settings))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
