use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::FieldsEnum;

/// Implement `Reflect`, `Enumeration` and `MapKey` for a fieldless enum.
pub(crate) fn impl_enum(enumeration: &FieldsEnum) -> TokenStream {
    let meta = &enumeration.meta;
    let fw_fields_path = meta.fw_fields_path();

    let enumeration_ = crate::path::enumeration_(fw_fields_path);
    let map_key_ = crate::path::map_key_(fw_fields_path);
    let enum_info_ = crate::path::enum_info_(fw_fields_path);
    let variant_info_ = crate::path::variant_info_(fw_fields_path);
    let repr_ = crate::path::repr_(fw_fields_path);
    let macro_exports_ = crate::path::macro_exports_(fw_fields_path);

    let type_path = meta.type_path();
    let type_name = meta.type_name_tokens();

    let idents: Vec<_> = enumeration.variants.iter().map(|v| &v.ident).collect();
    let default_variant = idents[enumeration.default_variant];
    let count = idents.len();
    let variant_infos = enumeration
        .variants
        .iter()
        .map(|variant| variant.to_info_tokens(meta));
    let repr = &enumeration.repr;
    let numeric = match meta.attrs().numeric {
        Some(_) => quote!(.numeric()),
        None => crate::utils::empty(),
    };

    let reflect_tokens = super::impl_trait_reflect(meta, "Enum", quote!(Self::#default_variant));
    let operator_tokens = super::impl_operators(meta);

    quote! {
        #reflect_tokens

        impl #enumeration_ for #type_path {
            fn enum_info(&self) -> &'static #enum_info_ {
                static VARIANTS: [#variant_info_; #count] = [#(#variant_infos),*];
                static INFO: #enum_info_ =
                    #enum_info_::new(#type_name, &VARIANTS, #repr_::#repr) #numeric;
                &INFO
            }

            #[inline]
            fn discriminant(&self) -> i64 {
                match self {
                    #(Self::#idents => Self::#idents as i64,)*
                }
            }

            fn set_discriminant(&mut self, discriminant: i64) -> bool {
                #(
                    if discriminant == Self::#idents as i64 {
                        *self = Self::#idents;
                        return true;
                    }
                )*
                false
            }
        }

        impl #map_key_ for #type_path {
            #[inline]
            fn to_key(&self) -> #macro_exports_::String {
                #macro_exports_::enum_to_key(self)
            }

            #[inline]
            fn from_key(key: &str) -> ::core::option::Option<Self> {
                #macro_exports_::enum_from_key(key)
            }

            #[inline]
            fn cmp_key(&self, other: &Self) -> ::core::cmp::Ordering {
                #macro_exports_::enum_cmp_key(self, other)
            }
        }

        #operator_tokens
    }
}
