use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn value_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::tree::Value
    }
}

#[inline(always)]
pub(crate) fn convert_error_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::convert::ConvertError
    }
}

#[inline(always)]
pub(crate) fn describer_(fw_fields_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_fields_path::describe::Describer
    }
}

/// The capability trait named `name` in `fw_fields::hooks`.
#[inline(always)]
pub(crate) fn hook_(fw_fields_path: &syn::Path, name: &str) -> TokenStream {
    let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
    quote! {
        #fw_fields_path::hooks::#ident
    }
}
