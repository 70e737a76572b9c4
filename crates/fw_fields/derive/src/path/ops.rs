use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn reflect_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn record_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ops::Record
    }
}

#[inline(always)]
pub(crate) fn fields_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ops::Fields
    }
}

#[inline(always)]
pub(crate) fn enumeration_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ops::Enumeration
    }
}

#[inline(always)]
pub(crate) fn map_key_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::ops::MapKey
    }
}

#[inline(always)]
pub(crate) fn compare_eq_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::compare::compare_eq
    }
}

#[inline(always)]
pub(crate) fn compare_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::compare::compare
    }
}
