use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::{FieldsDerive, FieldsTable};

/// Provided for `#[derive(Fields)]`.
pub(crate) fn match_fields_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attribute and member infomation.
    let fields_derive = match FieldsDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let fields_impls: proc_macro2::TokenStream = match fields_derive {
        FieldsDerive::Record(record) => super::impl_record(&record),
        FieldsDerive::Enum(enumeration) => super::impl_enum(&enumeration),
        FieldsDerive::Unit(meta) => super::impl_unit(&meta),
    };

    wrap(fields_impls)
}

/// Provided for `impl_fields!`.
pub(crate) fn match_table_impls(table: FieldsTable) -> TokenStream {
    wrap(super::impl_record(&table.record))
}

fn wrap(impls: proc_macro2::TokenStream) -> TokenStream {
    TokenStream::from(quote! {
        const _: () = {
            #impls
        };
    })
}
