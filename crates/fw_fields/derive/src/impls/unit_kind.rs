use quote::quote;

use crate::derive_data::FieldsMeta;

/// Implement reflect for a unit struct, which is a marker.
pub(crate) fn impl_unit(meta: &FieldsMeta) -> proc_macro2::TokenStream {
    let reflect_tokens = super::impl_trait_reflect(meta, "Marker", quote!(Self));
    let operator_tokens = super::impl_operators(meta);

    quote! {
        #reflect_tokens

        #operator_tokens
    }
}
