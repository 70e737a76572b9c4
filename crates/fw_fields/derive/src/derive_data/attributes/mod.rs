//! Parsing of `#[fields(...)]` attributes.
//!
//! Type attributes, member attributes and the `custom(...)` hook list each
//! live in their own module; the helpers here are shared by all three.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use flags::CustomHooks;
pub(crate) use type_attributes::TypeAttributes;

use proc_macro2::Span;
use syn::{Attribute, Ident};

/// The `#[fields(...)]` attributes among `attrs`.
fn fields_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(crate::FIELDS_ATTRIBUTE_NAME))
}

/// Store `value` in `slot`, rejecting a second occurrence of `ident`.
fn set_once<T>(slot: &mut Option<T>, value: T, ident: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate `{ident}` attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// Set a bare flag such as `skip`.
#[inline]
fn set_flag(slot: &mut Option<Span>, ident: &Ident) -> syn::Result<()> {
    set_once(slot, ident.span(), ident)
}
