use std::collections::BTreeMap;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{LitStr, Member, Type};

use super::{FieldAttributes, FieldsMeta};

// -----------------------------------------------------------------------------
// Define

/// A record: a struct with named or positional members.
pub(crate) struct FieldsRecord {
    pub meta: FieldsMeta,
    /// Every declared member, including skipped ones.
    pub members: Vec<RecordMember>,
}

/// One member of a record.
pub(crate) struct RecordMember {
    /// `x` or `0`, used as `self.#member`.
    pub member: Member,
    /// Unknown for members listed through `impl_fields!`.
    pub ty: Option<Type>,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// RecordMember Implementation

impl RecordMember {
    /// The canonical name: `rename`, the identifier, or the decimal index.
    pub fn name(&self) -> LitStr {
        if let Some(rename) = &self.attrs.rename {
            return rename.clone();
        }
        match &self.member {
            Member::Named(ident) => LitStr::new(&ident.unraw().to_string(), ident.span()),
            Member::Unnamed(index) => LitStr::new(&index.index.to_string(), index.span),
        }
    }

    #[inline]
    pub fn is_flattened(&self) -> bool {
        self.attrs.flatten.is_some()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.attrs.skip.is_none()
    }

    /// A statement appending this member's entries to `fields`.
    ///
    /// A flattened member appends the whole layout of its record.
    pub fn to_info_tokens(&self, meta: &FieldsMeta) -> TokenStream {
        let fw_fields_path = meta.fw_fields_path();
        let macro_exports_ = crate::path::macro_exports_(fw_fields_path);
        let member = &self.member;

        if self.is_flattened() {
            return quote! {
                fields.extend_from_slice(
                    #macro_exports_::flattened(|r: &Self| &r.#member).fields()
                );
            };
        }

        let field_info_ = crate::path::field_info_(fw_fields_path);
        let name = self.name();
        let alternate_names = if self.attrs.aliases.is_empty() {
            crate::utils::empty()
        } else {
            let aliases = &self.attrs.aliases;
            quote!(.with_alternate_names(&[#(#aliases),*]))
        };
        let network = if self.attrs.network.is_some() {
            quote!(.with_network(true))
        } else {
            crate::utils::empty()
        };

        quote! {
            fields.push(
                #field_info_::new(#name)
                    #alternate_names
                    .with_data(#macro_exports_::is_data(|r: &Self| &r.#member))
                    #network
            );
        }
    }
}

// -----------------------------------------------------------------------------
// FieldsRecord Implementation

impl FieldsRecord {
    /// Validate the members and collect the generic bounds they need.
    pub fn new(mut meta: FieldsMeta, members: Vec<RecordMember>) -> syn::Result<Self> {
        meta.attrs().validity_for_record()?;

        let mut seen: BTreeMap<String, Span> = BTreeMap::new();
        for member in members.iter().filter(|m| m.is_active()) {
            member.attrs.validity()?;
            if member.is_flattened() {
                continue;
            }
            let names = core::iter::once(member.name()).chain(member.attrs.aliases.iter().cloned());
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

        let fw_fields_path = meta.fw_fields_path().clone();
        let reflect_ = crate::path::reflect_(&fw_fields_path);
        let fields_ = crate::path::fields_(&fw_fields_path);
        let mut bounds = Vec::new();
        for member in members.iter().filter(|m| m.is_active()) {
            let Some(ty) = &member.ty else { continue };
            if !crate::utils::mentions_param(ty, meta.generics().type_params()) {
                continue;
            }
            bounds.push(match member.is_flattened() {
                true => quote!(#ty: #fields_),
                false => quote!(#ty: #reflect_),
            });
        }
        if meta.is_generic() && meta.attrs().default.is_none() {
            bounds.push(quote!(Self: ::core::default::Default));
        }
        for bound in bounds {
            meta.push_bound(bound);
        }

        Ok(Self { meta, members })
    }

    /// Members visible to the reflection API, in declaration order.
    pub fn active_members(&self) -> impl Iterator<Item = &RecordMember> {
        self.members.iter().filter(|member| member.is_active())
    }

    #[inline]
    pub fn has_flattened(&self) -> bool {
        self.active_members().any(RecordMember::is_flattened)
    }
}
