use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::FieldsMeta;

/// Generate implementation code for `Reflect` trait.
///
/// `kind` is the `ReflectRef`/`ReflectMut` variant, `Record`, `Enum` or
/// `Marker`; markers carry no view of `self`.
pub(crate) fn impl_trait_reflect(
    meta: &FieldsMeta,
    kind: &str,
    default_tokens: TokenStream,
) -> TokenStream {
    let fw_fields_path = meta.fw_fields_path();

    let reflect_ = crate::path::reflect_(fw_fields_path);
    let reflect_ref_ = crate::path::reflect_ref_(fw_fields_path);
    let reflect_mut_ = crate::path::reflect_mut_(fw_fields_path);

    let kind = syn::Ident::new(kind, proc_macro2::Span::call_site());
    let (view_ref, view_mut) = if kind == "Marker" {
        (quote!(#reflect_ref_::Marker), quote!(#reflect_mut_::Marker))
    } else {
        (quote!(#reflect_ref_::#kind(self)), quote!(#reflect_mut_::#kind(self)))
    };

    let type_path = meta.type_path();
    let type_name = meta.type_name_tokens();
    let new_default = meta.default_tokens(default_tokens);
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let precision = match &meta.attrs().precision {
        Some(digits) => quote! {
            #[inline]
            fn precision(&self) -> ::core::option::Option<u32> {
                ::core::option::Option::Some(#digits)
            }
        },
        None => crate::utils::empty(),
    };

    let hooks = super::get_hook_methods(meta);

    quote! {
        impl #impl_generics #reflect_ for #type_path #ty_generics #where_clause {
            #[inline]
            fn type_name(&self) -> &'static str {
                #type_name
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_reflect(&self) -> &dyn #reflect_ {
                self
            }

            #[inline]
            fn as_reflect_mut(&mut self) -> &mut dyn #reflect_ {
                self
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #view_ref
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #view_mut
            }

            #[inline]
            fn new_default() -> Self {
                #new_default
            }

            #[inline]
            fn reset(&mut self) {
                *self = <Self as #reflect_>::new_default();
            }

            #precision

            #hooks
        }
    }
}
