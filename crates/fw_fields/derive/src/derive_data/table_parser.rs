use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Generics, LitStr, Member, Path, Token, braced};

use super::{FieldAttributes, FieldsMeta, FieldsRecord, RecordMember, TypeAttributes};

/// The input of [`impl_fields`](crate::impl_fields).
pub(crate) struct FieldsTable {
    pub record: FieldsRecord,
}

/// One row of the table: `(#[fields(..)])* member (as "name")? (| "alternate")*`.
struct TableEntry {
    attrs: Vec<Attribute>,
    member: Member,
    rename: Option<LitStr>,
    aliases: Vec<LitStr>,
}

impl Parse for TableEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let member: Member = input.parse()?;

        let rename = if input.peek(Token![as]) {
            input.parse::<Token![as]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        let mut aliases = Vec::new();
        while input.peek(Token![|]) {
            input.parse::<Token![|]>()?;
            aliases.push(input.parse()?);
        }

        Ok(Self {
            attrs,
            member,
            rename,
            aliases,
        })
    }
}

impl FieldsTable {
    /// Format: `(#[fields(..)])* Type { entry (, entry)* }`
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let outer_attrs = input.call(Attribute::parse_outer)?;
        let attrs = TypeAttributes::parse_attrs(&outer_attrs)?;
        let type_path = Path::parse_mod_style(input)?;

        if input.peek(Token![<]) {
            return Err(input.error(
                "`impl_fields!` supports non-generic types only; use `derive(Fields)`",
            ));
        }

        let content;
        braced!(content in input);
        let entries = Punctuated::<TableEntry, Token![,]>::parse_terminated(&content)?;

        let members = entries
            .into_iter()
            .map(|entry| {
                let mut attrs = FieldAttributes::parse_attrs(&entry.attrs)?;
                if let Some(rename) = entry.rename {
                    if attrs.rename.is_some() {
                        return Err(syn::Error::new(
                            rename.span(),
                            "the name is given twice, by `as` and by `rename`",
                        ));
                    }
                    attrs.rename = Some(rename);
                }
                attrs.aliases.extend(entry.aliases);
                Ok(RecordMember {
                    member: entry.member,
                    ty: None,
                    attrs,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let meta = FieldsMeta::new(attrs, type_path, Generics::default());
        Ok(Self {
            record: FieldsRecord::new(meta, members)?,
        })
    }
}
