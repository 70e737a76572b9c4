use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Token};

use super::{fields_attrs, set_flag, set_once};

/// Attributes placed on a member or an enum variant.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `rename = "..."`: the canonical name.
    pub rename: Option<LitStr>,
    /// `alias = "..."`, in declaration order.
    pub aliases: Vec<LitStr>,
    /// `skip`
    pub skip: Option<Span>,
    /// `network`
    pub network: Option<Span>,
    /// `flatten`
    pub flatten: Option<Span>,
}

impl FieldAttributes {
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
                "rename" => {
                    input.parse::<Token![=]>()?;
                    set_once(&mut self.rename, input.parse()?, &ident)?;
                }
                "alias" => {
                    input.parse::<Token![=]>()?;
                    self.aliases.push(input.parse()?);
                }
                "skip" => set_flag(&mut self.skip, &ident)?,
                "network" => set_flag(&mut self.network, &ident)?,
                "flatten" => set_flag(&mut self.flatten, &ident)?,
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown member attribute `{ident}`, expected one of `rename`, \
                             `alias`, `skip`, `network`, `flatten`"
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

    /// Reject combinations that cannot be generated on a member.
    pub fn validity(&self) -> syn::Result<()> {
        if let Some(flatten) = self.flatten {
            if self.rename.is_some() || !self.aliases.is_empty() {
                return Err(syn::Error::new(
                    flatten,
                    "a flattened member has no name of its own; remove `rename`/`alias`",
                ));
            }
            if self.network.is_some() {
                return Err(syn::Error::new(
                    flatten,
                    "mark the members of the flattened record with `network` instead",
                ));
            }
            if self.skip.is_some() {
                return Err(syn::Error::new(flatten, "`flatten` conflicts with `skip`"));
            }
        }
        Ok(())
    }

    /// Variants only take names.
    pub fn validity_for_variant(&self) -> syn::Result<()> {
        match self.skip.or(self.network).or(self.flatten) {
            Some(span) => Err(syn::Error::new(
                span,
                "variants only accept `rename` and `alias`",
            )),
            None => Ok(()),
        }
    }
}
