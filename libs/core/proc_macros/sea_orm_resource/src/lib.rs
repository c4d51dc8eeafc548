//! `SeaOrmResource` derive: REST resource constants for sea-orm entities.
//!
//! The table name is read from `#[sea_orm(table_name = "...")]` and turned into
//! the resource URL (snake_case becomes kebab-case) and an OpenAPI tag.
//!
//! ```ignore
//! use sea_orm::entity::prelude::*;
//! use core_proc_macros::{ApiResource, SeaOrmResource};
//!
//! #[derive(Clone, Debug, DeriveEntityModel, SeaOrmResource)]
//! #[sea_orm(table_name = "item_types")]
//! pub struct Model {
//!     #[sea_orm(primary_key)]
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! assert_eq!(Model::URL, "/item-types");
//! assert_eq!(Model::TAG, "Item Types");
//! ```
//!
//! Both constants can be overridden:
//!
//! ```ignore
//! #[sea_orm_resource(url = "/catalog/types", tag = "Catalog")]
//! ```

extern crate proc_macro;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, Meta, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sea_orm_resource), forward_attrs(sea_orm))]
struct SeaOrmResourceInput {
    ident: syn::Ident,
    attrs: Vec<syn::Attribute>,
    #[darling(default)]
    url: Option<String>,
    #[darling(default)]
    tag: Option<String>,
}

/// Derives `core_proc_macros::ApiResource` for a sea-orm `Model`.
///
/// # Attributes
///
/// - `url`: override the base path (default: `/` + kebab-cased `table_name`)
/// - `tag`: override the OpenAPI tag (default: title-cased `table_name`)
///
/// The struct must carry `#[sea_orm(table_name = "...")]`.
#[proc_macro_derive(SeaOrmResource, attributes(sea_orm_resource))]
pub fn sea_orm_resource_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);
    let receiver = match SeaOrmResourceInput::from_derive_input(&ast) {
        Ok(receiver) => receiver,
        Err(err) => return TokenStream::from(err.write_errors()),
    };

    match impl_sea_orm_resource(receiver) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `item_types` -> `Item Types`
fn title_case(input: &str) -> String {
    input
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize_first_letter)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `item_types` -> `/item-types`
fn resource_path(table_name: &str) -> String {
    format!("/{}", table_name.replace('_', "-"))
}

fn extract_table_name(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("sea_orm") {
            continue;
        }
        if let Meta::List(meta_list) = &attr.meta {
            let mut table_name = None;
            let _ = meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("table_name") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        table_name = Some(lit_str.value());
                    }
                } else if meta.input.peek(syn::Token![=]) {
                    // Skip other `key = value` pairs such as schema_name
                    let value = meta.value()?;
                    let _: Lit = value.parse()?;
                }
                Ok(())
            });
            if table_name.is_some() {
                return table_name;
            }
        }
    }
    None
}

fn impl_sea_orm_resource(receiver: SeaOrmResourceInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &receiver.ident;

    let table_name = extract_table_name(&receiver.attrs).ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "SeaOrmResource requires #[sea_orm(table_name = \"...\")] attribute",
        )
    })?;

    let url = receiver.url.unwrap_or_else(|| resource_path(&table_name));
    let tag = receiver.tag.unwrap_or_else(|| title_case(&table_name));

    Ok(quote! {
        impl core_proc_macros::ApiResource for #ident {
            const URL: &'static str = #url;
            const TAG: &'static str = #tag;
        }
    })
}
