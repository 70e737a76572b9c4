//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod fields_derive;
mod fields_enum;
mod fields_meta;
mod fields_record;
mod table_parser;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use fields_derive::FieldsDerive;
pub(crate) use fields_enum::{EnumVariant, FieldsEnum};
pub(crate) use fields_meta::FieldsMeta;
pub(crate) use fields_record::{FieldsRecord, RecordMember};
pub(crate) use table_parser::FieldsTable;
