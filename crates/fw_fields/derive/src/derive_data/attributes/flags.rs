use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Ident, Token};

use super::set_flag;

/// The algorithms a type replaces with its own implementation,
/// from `#[fields(custom(...))]`.
#[derive(Default, Debug)]
pub(crate) struct CustomHooks {
    /// `CustomUnstructure`
    pub unstructure: Option<Span>,
    /// `CustomStructure`
    pub structure: Option<Span>,
    /// `CustomDiff`
    pub diff: Option<Span>,
    /// `CustomPatch`
    pub patch: Option<Span>,
    /// `CustomDescribe`
    pub describe: Option<Span>,
    /// The type's own `PartialEq` and `PartialOrd`.
    pub compare: Option<Span>,
}

impl CustomHooks {
    /// Parse the content of `custom(...)`.
    ///
    /// Format: `name (, name)*`
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident = input.call(Ident::parse_any)?;
            let slot = match ident.to_string().as_str() {
                "unstructure" => &mut self.unstructure,
                "structure" => &mut self.structure,
                "diff" => &mut self.diff,
                "patch" => &mut self.patch,
                "describe" => &mut self.describe,
                "compare" => &mut self.compare,
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown hook `{ident}`, expected one of \
                             `unstructure`, `structure`, `diff`, `patch`, `describe`, `compare`"
                        ),
                    ));
                }
            };
            set_flag(slot, &ident)?;

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}
