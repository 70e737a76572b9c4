use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::FieldsMeta;

/// The `Reflect::*_custom` overrides selected by `custom(...)`, plus
/// `after_structure`.
pub(crate) fn get_hook_methods(meta: &FieldsMeta) -> TokenStream {
    let fw_fields_path = meta.fw_fields_path();
    let custom = &meta.attrs().custom;

    let reflect_ = crate::path::reflect_(fw_fields_path);
    let value_ = crate::path::value_(fw_fields_path);
    let convert_error_ = crate::path::convert_error_(fw_fields_path);

    let mut methods = TokenStream::new();

    if custom.unstructure.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "CustomUnstructure");
        methods.extend(quote! {
            #[inline]
            fn unstructure_custom(&self) -> ::core::option::Option<#value_> {
                ::core::option::Option::Some(<Self as #hook_>::unstructure(self))
            }
        });
    }

    if custom.structure.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "CustomStructure");
        methods.extend(quote! {
            fn structure_custom(
                &mut self,
                tree: &#value_,
            ) -> ::core::option::Option<::core::result::Result<(), #convert_error_>> {
                ::core::option::Option::Some(
                    <Self as #hook_>::structure(tree).map(|value| *self = value),
                )
            }
        });
    }

    if custom.diff.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "CustomDiff");
        methods.extend(quote! {
            fn diff_custom(
                &self,
                other: &dyn #reflect_,
            ) -> ::core::option::Option<::core::option::Option<#value_>> {
                other
                    .downcast_ref::<Self>()
                    .map(|other| <Self as #hook_>::diff(self, other))
            }
        });
    }

    if custom.patch.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "CustomPatch");
        methods.extend(quote! {
            #[inline]
            fn patch_custom(
                &mut self,
                diff: &#value_,
            ) -> ::core::option::Option<::core::result::Result<(), #convert_error_>> {
                ::core::option::Option::Some(<Self as #hook_>::patch(self, diff))
            }
        });
    }

    if custom.describe.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "CustomDescribe");
        let describer_ = crate::path::describer_(fw_fields_path);
        methods.extend(quote! {
            #[inline]
            fn describe_custom(
                &self,
                describer: &mut #describer_<'_>,
            ) -> ::core::option::Option<::core::fmt::Result> {
                ::core::option::Option::Some(<Self as #hook_>::describe(self, describer))
            }
        });
    }

    if custom.compare.is_some() {
        methods.extend(quote! {
            fn eq_custom(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                other
                    .downcast_ref::<Self>()
                    .map(|other| <Self as ::core::cmp::PartialEq>::eq(self, other))
            }

            fn cmp_custom(
                &self,
                other: &dyn #reflect_,
            ) -> ::core::option::Option<::core::option::Option<::core::cmp::Ordering>> {
                other
                    .downcast_ref::<Self>()
                    .map(|other| <Self as ::core::cmp::PartialOrd>::partial_cmp(self, other))
            }
        });
    }

    if meta.attrs().after_structure.is_some() {
        let hook_ = crate::path::hook_(fw_fields_path, "AfterStructure");
        methods.extend(quote! {
            #[inline]
            fn after_structure(&mut self) {
                <Self as #hook_>::after_structure(self);
            }
        });
    }

    methods
}
