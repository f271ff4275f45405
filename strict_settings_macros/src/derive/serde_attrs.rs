//! Serde attribute parsing helpers.
//!
//! Unset fields are reported by the key serde reads them from, so the
//! derive has to respect `#[serde(rename = "...")]`,
//! `#[serde(rename_all = "...")]` and `#[serde(flatten)]`.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

use super::parse::discard_unknown;

/// Supported `#[serde(rename_all = "...")]` rules for struct fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SerdeRenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl SerdeRenameAll {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported serde rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    pub(crate) fn apply(self, field_name: &str) -> String {
        match self {
            Self::Lower => field_name.to_ascii_lowercase(),
            Self::Upper => field_name.to_ascii_uppercase(),
            Self::Pascal => field_name.to_upper_camel_case(),
            Self::Camel => field_name.to_lower_camel_case(),
            Self::Snake => field_name.to_snake_case(),
            Self::ScreamingSnake => field_name.to_shouty_snake_case(),
            Self::Kebab => field_name.to_kebab_case(),
            Self::ScreamingKebab => field_name.to_shouty_kebab_case(),
        }
    }
}

/// Parse `#[serde(rename_all = "...")]` (or `rename_all(deserialize = "...")`)
/// from struct attributes.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<SerdeRenameAll>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename_all") {
                return discard_unknown(&meta);
            }
            if let Some(value) = deserialize_name(&meta)? {
                out = Some(SerdeRenameAll::parse(&value)?);
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Parse `#[serde(rename = "...")]` (or `rename(deserialize = "...")`) from
/// field attributes.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename") {
                return discard_unknown(&meta);
            }
            if let Some(value) = deserialize_name(&meta)? {
                out = Some(value.value());
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Returns true if the field carries `#[serde(flatten)]`.
pub(crate) fn serde_flatten(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut flatten = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flatten") {
                flatten = true;
                return Ok(());
            }
            discard_unknown(&meta)
        })?;
    }
    Ok(flatten)
}

/// Reads the name applied when deserializing from either `name = "..."` or
/// `name(deserialize = "...")`.
fn deserialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse::<LitStr>()?));
    }
    if !meta.input.peek(syn::token::Paren) {
        return Ok(None);
    }
    let mut out = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("deserialize") {
            out = Some(nested.value()?.parse::<LitStr>()?);
            return Ok(());
        }
        discard_unknown(&nested)
    })?;
    Ok(out)
}
