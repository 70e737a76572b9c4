//! Paths into `fw_fields` used by the generated code.
//!
//! Everything is resolved relative to the crate path returned by
//! [`fw_fields`], so a renamed or re-exported runtime keeps working.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `fw_fields` crate.
///
/// 1. For crates that depend on `fw_fields`, `::fw_fields` is returned.
/// 2. For crates that depend on `fieldwise`, `::fieldwise::fields` is returned.
/// 3. Otherwise `::fw_fields` is returned, which may be incorrect.
///
/// This reads the invoking crate's manifest, so call it once per macro
/// invocation and pass the path along.
pub(crate) fn fw_fields() -> syn::Path {
    fw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fw_fields"))
}

// -----------------------------------------------------------------------------
// Modules

mod hooks;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use hooks::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_exports_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn record_info_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::info::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn enum_info_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn variant_info_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::info::VariantInfo
    }
}

#[inline(always)]
pub(crate) fn repr_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::info::Repr
    }
}
