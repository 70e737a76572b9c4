use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::FieldsMeta;

/// `PartialEq` / `PartialOrd` built on the generic comparison, for
/// `#[fields(partial_eq, partial_ord)]`.
///
/// `<=` and `>=` are the negations of `>` and `<`.
pub(crate) fn impl_operators(meta: &FieldsMeta) -> TokenStream {
    let fw_fields_path = meta.fw_fields_path();
    let type_path = meta.type_path();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let mut impls = TokenStream::new();

    if meta.attrs().partial_eq.is_some() {
        let compare_eq_ = crate::path::compare_eq_(fw_fields_path);
        impls.extend(quote! {
            impl #impl_generics ::core::cmp::PartialEq for #type_path #ty_generics #where_clause {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    #compare_eq_(self, other)
                }
            }
        });
    }

    if meta.attrs().partial_ord.is_some() {
        let compare_ = crate::path::compare_(fw_fields_path);
        impls.extend(quote! {
            impl #impl_generics ::core::cmp::PartialOrd for #type_path #ty_generics #where_clause {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    #compare_(self, other)
                }

                #[inline]
                fn le(&self, other: &Self) -> bool {
                    !<Self as ::core::cmp::PartialOrd>::gt(self, other)
                }

                #[inline]
                fn ge(&self, other: &Self) -> bool {
                    !<Self as ::core::cmp::PartialOrd>::lt(self, other)
                }
            }
        });
    }

    impls
}
