//! Expansion of `#[derive(Validate)]`.

mod generate;
mod parse;
mod serde_attrs;

use proc_macro2::TokenStream as TokenStream2;
use syn::DeriveInput;

pub(crate) use generate::generate_validate_impl;
pub(crate) use parse::{FieldSpec, ValidateInput, parse_input};

/// Parses `input` and renders the `Validate` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let parsed = parse_input(input)?;
    Ok(generate_validate_impl(&parsed))
}
