use std::collections::BTreeMap;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Ident, LitStr};

use super::{FieldAttributes, FieldsMeta};

// -----------------------------------------------------------------------------
// Define

/// A fieldless enum.
pub(crate) struct FieldsEnum {
    pub meta: FieldsMeta,
    pub variants: Vec<EnumVariant>,
    /// The `Repr` variant matching `#[repr(..)]`, e.g. `U8`.
    pub repr: Ident,
    /// The variant marked `#[default]`, else the first one.
    pub default_variant: usize,
}

/// Represents a variant on an enum.
pub(crate) struct EnumVariant {
    pub ident: Ident,
    pub attrs: FieldAttributes,
    /// Carries the `#[default]` attribute of `derive(Default)`.
    pub is_default: bool,
}

// -----------------------------------------------------------------------------
// EnumVariant Implementation

impl EnumVariant {
    /// The canonical name: `rename` or the identifier.
    pub fn name(&self) -> LitStr {
        match &self.attrs.rename {
            Some(rename) => rename.clone(),
            None => LitStr::new(&self.ident.unraw().to_string(), self.ident.span()),
        }
    }

    /// Generates a `VariantInfo` expression.
    ///
    /// Evaluated in a `static` initializer, so `Self` is not available.
    pub fn to_info_tokens(&self, meta: &FieldsMeta) -> TokenStream {
        let variant_info_ = crate::path::variant_info_(meta.fw_fields_path());
        let type_path = meta.type_path();
        let ident = &self.ident;
        let name = self.name();

        let alternate_names = if self.attrs.aliases.is_empty() {
            crate::utils::empty()
        } else {
            let aliases = &self.attrs.aliases;
            quote!(.with_alternate_names(&[#(#aliases),*]))
        };

        quote! {
            #variant_info_::new(#name, #type_path::#ident as i64) #alternate_names
        }
    }
}

// -----------------------------------------------------------------------------
// FieldsEnum Implementation

impl FieldsEnum {
    pub fn new(meta: FieldsMeta, variants: Vec<EnumVariant>, repr: Ident) -> syn::Result<Self> {
        meta.attrs().validity_for_enum()?;

        let mut seen: BTreeMap<String, Span> = BTreeMap::new();
        for variant in &variants {
            variant.attrs.validity_for_variant()?;
            let names = core::iter::once(variant.name()).chain(variant.attrs.aliases.iter().cloned());
            for name in names {
                if let Some(first) = seen.insert(name.value(), name.span()) {
                    let mut err = syn::Error::new(
                        name.span(),
                        format!("the name `{}` is used twice", name.value()),
                    );
                    err.combine(syn::Error::new(first, "first used here"));
                    return Err(err);
                }
            }
        }

        let default_variant = variants.iter().position(|v| v.is_default).unwrap_or(0);

        Ok(Self {
            meta,
            variants,
            repr,
            default_variant,
        })
    }

    /// Read the integer type from `#[repr(..)]`; `i32` without one.
    pub fn repr_from_attrs(attrs: &[Attribute]) -> syn::Result<Ident> {
        const TABLE: [(&str, &str); 10] = [
            ("i8", "I8"),
            ("i16", "I16"),
            ("i32", "I32"),
            ("i64", "I64"),
            ("isize", "Isize"),
            ("u8", "U8"),
            ("u16", "U16"),
            ("u32", "U32"),
            ("u64", "U64"),
            ("usize", "Usize"),
        ];

        let mut repr = Ident::new("I32", Span::call_site());
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            attr.parse_nested_meta(|nested| {
                if let Some(ident) = nested.path.get_ident()
                    && let Some((_, variant)) = TABLE.iter().find(|(ty, _)| ident == ty)
                {
                    repr = Ident::new(variant, ident.span());
                }
                // `C`, `align(..)` and friends carry no width.
                if nested.input.peek(syn::token::Paren) {
                    let content;
                    syn::parenthesized!(content in nested.input);
                    content.parse::<TokenStream>()?;
                }
                Ok(())
            })?;
        }
        Ok(repr)
    }
}
