use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitInt, Path, Token, parenthesized};

use super::{CustomHooks, fields_attrs, set_flag, set_once};

/// Attributes placed on the type itself.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `precision = N`: significant digits for floating members.
    pub precision: Option<LitInt>,
    /// `default = path`: a `fn() -> Self` used instead of `Default`.
    pub default: Option<Path>,
    /// `after_structure`
    pub after_structure: Option<Span>,
    /// `custom(...)`
    pub custom: CustomHooks,
    /// `partial_eq`
    pub partial_eq: Option<Span>,
    /// `partial_ord`
    pub partial_ord: Option<Span>,
    /// `numeric`, enums only.
    pub numeric: Option<Span>,
}

impl TypeAttributes {
    /// Parse every `#[fields(...)]` among `attrs`.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in fields_attrs(attrs) {
            attr.parse_args_with(|input: ParseStream| this.parse_stream(input))?;
        }
        Ok(this)
    }

    /// Format: `item (, item)*`
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident = input.call(Ident::parse_any)?;
            match ident.to_string().as_str() {
                "precision" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitInt = input.parse()?;
                    lit.base10_parse::<u32>()?;
                    set_once(&mut self.precision, lit, &ident)?;
                }
                "default" => {
                    input.parse::<Token![=]>()?;
                    set_once(&mut self.default, input.parse()?, &ident)?;
                }
                "custom" => {
                    let content;
                    parenthesized!(content in input);
                    self.custom.parse_stream(&content)?;
                }
                "after_structure" => set_flag(&mut self.after_structure, &ident)?,
                "partial_eq" => set_flag(&mut self.partial_eq, &ident)?,
                "partial_ord" => set_flag(&mut self.partial_ord, &ident)?,
                "numeric" => set_flag(&mut self.numeric, &ident)?,
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown type attribute `{ident}`, expected one of `precision`, \
                             `default`, `after_structure`, `custom`, `partial_eq`, \
                             `partial_ord`, `numeric`"
                        ),
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    /// Reject combinations that cannot be generated.
    pub fn validity(&self) -> syn::Result<()> {
        if let Some(compare) = self.custom.compare {
            if let Some(span) = self.partial_eq.or(self.partial_ord) {
                let mut err = syn::Error::new(
                    span,
                    "`partial_eq`/`partial_ord` derive the operators from the generic \
                     comparison and cannot be combined with `custom(compare)`",
                );
                err.combine(syn::Error::new(compare, "`custom(compare)` declared here"));
                return Err(err);
            }
        }
        Ok(())
    }

    /// Reject attributes that only make sense on enums.
    pub fn validity_for_record(&self) -> syn::Result<()> {
        if let Some(span) = self.numeric {
            return Err(syn::Error::new(span, "`numeric` is only valid on enums"));
        }
        self.validity()
    }

    /// Reject attributes that only make sense on records.
    pub fn validity_for_enum(&self) -> syn::Result<()> {
        if let Some(lit) = &self.precision {
            return Err(syn::Error::new(lit.span(), "`precision` is not valid on enums"));
        }
        if let Some(span) = self.after_structure {
            return Err(syn::Error::new(span, "`after_structure` is not valid on enums"));
        }
        self.validity()
    }
}
