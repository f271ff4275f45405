//! Parsing of the derive input into the fields the walk visits.

use syn::ext::IdentExt as _;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Generics, Ident, LitStr, Token, parenthesized};

use super::serde_attrs::{SerdeRenameAll, serde_field_rename, serde_flatten, serde_rename_all};

/// Struct accepted by `#[derive(Validate)]`.
pub(crate) struct ValidateInput {
    pub ident: Ident,
    pub generics: Generics,
    /// Fields visited by the walk, in declaration order. Skipped fields are
    /// not present.
    pub fields: Vec<FieldSpec>,
}

/// A single visited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    pub member: Ident,
    /// Key reported for the field when it is unset.
    pub key: String,
    /// `#[serde(flatten)]` fields report their inner path without a prefix.
    pub flatten: bool,
}

/// Field-level `#[settings(...)]` options.
#[derive(Default)]
struct FieldAttrs {
    skip: bool,
    rename: Option<String>,
}

/// Consumes an unrecognised nested attribute so parsing can continue.
///
/// Only the entry's own value is consumed; later entries in the same list
/// are still visited.
pub(super) fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("settings")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("unknown settings attribute; expected `skip` or `rename`"))
            }
        })?;
    }
    Ok(out)
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                data.struct_token,
                "Validate requires named fields",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "Validate can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Validate can only be derived for structs",
        )),
    }
}

fn serde_key(
    ident: &Ident,
    attrs: &[Attribute],
    rename_all: Option<SerdeRenameAll>,
) -> syn::Result<String> {
    if let Some(rename) = serde_field_rename(attrs)? {
        return Ok(rename);
    }
    let field_name = ident.unraw().to_string();
    Ok(rename_all.map_or_else(|| field_name.clone(), |rule| rule.apply(&field_name)))
}

/// Collects the visited fields of `input`.
///
/// # Errors
///
/// Rejects enums, unions and tuple structs, and reports malformed
/// `#[settings]` or `#[serde]` attributes.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ValidateInput> {
    let rename_all = serde_rename_all(&input.attrs)?;
    let mut fields = Vec::new();
    for field in named_fields(input)? {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "unnamed fields are not supported"));
        };
        let key = attrs
            .rename
            .map_or_else(|| serde_key(&ident, &field.attrs, rename_all), Ok)?;
        fields.push(FieldSpec {
            flatten: serde_flatten(&field.attrs)?,
            member: ident,
            key,
        });
    }
    Ok(ValidateInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        fields,
    })
}
