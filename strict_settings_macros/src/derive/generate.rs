//! Token generation for the `Validate` implementation.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Generics, parse_quote};

use super::{FieldSpec, ValidateInput};

fn field_check(field: &FieldSpec) -> TokenStream2 {
    let member = &field.member;
    let key = &field.key;
    let found = if field.flatten {
        quote! { path }
    } else {
        quote! { path.within(#key) }
    };
    quote! {
        if let ::core::option::Option::Some(path) =
            ::strict_settings::Validate::first_unset(&self.#member)
        {
            return ::core::option::Option::Some(#found);
        }
    }
}

/// Adds a `Validate` bound to every type parameter.
fn bounded_generics(generics: &Generics) -> Generics {
    let mut bounded = generics.clone();
    for param in bounded.type_params_mut() {
        param.bounds.push(parse_quote!(::strict_settings::Validate));
    }
    bounded
}

/// Renders `impl strict_settings::Validate` for the parsed struct.
pub(crate) fn generate_validate_impl(input: &ValidateInput) -> TokenStream2 {
    let ident = &input.ident;
    let generics = bounded_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let checks = input.fields.iter().map(field_check);
    quote! {
        impl #impl_generics ::strict_settings::Validate for #ident #ty_generics #where_clause {
            fn first_unset(&self) -> ::core::option::Option<::strict_settings::FieldPath> {
                #( #checks )*
                ::core::option::Option::None
            }
        }
    }
}
