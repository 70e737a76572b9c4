use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Index, Member, Path};

use super::{EnumVariant, FieldAttributes, FieldsEnum, FieldsMeta, FieldsRecord, RecordMember};
use super::TypeAttributes;

/// The parsed input of `derive(Fields)`.
pub(crate) enum FieldsDerive {
    Record(FieldsRecord),
    Enum(FieldsEnum),
    /// A unit struct, reflected as a marker.
    Unit(FieldsMeta),
}

impl FieldsDerive {
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "reflected types must be `'static`; lifetime parameters are not supported",
            ));
        }

        let meta = FieldsMeta::new(attrs, Path::from(input.ident.clone()), input.generics.clone());

        match &input.data {
            Data::Struct(data) => {
                let members = match &data.fields {
                    syn::Fields::Unit => {
                        meta.attrs().validity_for_record()?;
                        return Ok(Self::Unit(meta));
                    }
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(|field| {
                            Ok(RecordMember {
                                member: Member::Named(field.ident.clone().ok_or_else(|| {
                                    syn::Error::new(field.span(), "expected a named field")
                                })?),
                                ty: Some(field.ty.clone()),
                                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                            })
                        })
                        .collect::<syn::Result<Vec<_>>>()?,
                    syn::Fields::Unnamed(fields) => fields
                        .unnamed
                        .iter()
                        .enumerate()
                        .map(|(index, field)| {
                            Ok(RecordMember {
                                member: Member::Unnamed(Index {
                                    index: index as u32,
                                    span: field.span(),
                                }),
                                ty: Some(field.ty.clone()),
                                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                            })
                        })
                        .collect::<syn::Result<Vec<_>>>()?,
                };
                FieldsRecord::new(meta, members).map(Self::Record)
            }
            Data::Enum(data) => {
                if let Some(param) = input.generics.type_params().next() {
                    return Err(syn::Error::new(
                        param.span(),
                        "generic enums are not supported",
                    ));
                }
                if data.variants.is_empty() {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "an enum needs at least one variant to have a default",
                    ));
                }
                let variants = data
                    .variants
                    .iter()
                    .map(|variant| {
                        if !matches!(variant.fields, syn::Fields::Unit) {
                            return Err(syn::Error::new(
                                variant.fields.span(),
                                "only fieldless enums are supported",
                            ));
                        }
                        Ok(EnumVariant {
                            ident: variant.ident.clone(),
                            attrs: FieldAttributes::parse_attrs(&variant.attrs)?,
                            is_default: variant.attrs.iter().any(|a| a.path().is_ident("default")),
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;
                let repr = FieldsEnum::repr_from_attrs(&input.attrs)?;
                FieldsEnum::new(meta, variants, repr).map(Self::Enum)
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "unions cannot be reflected",
            )),
        }
    }
}
