//! Static, per-type layout information.
//!
//! - [`FieldInfo`]: one member of a record (name, alternate names, flags).
//! - [`RecordInfo`]: the ordered member table of a record type.
//! - [`EnumInfo`] / [`VariantInfo`]: the name table of an enumeration.
//!
//! Tables are built once per type and live for the rest of the process; see
//! [`InfoCell`] and [`GenericInfoCell`].

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod enum_info;
mod field_info;
mod record_info;
mod type_name;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, InfoCell};
pub use enum_info::{EnumInfo, Repr, VariantInfo};
pub use field_info::FieldInfo;
pub use record_info::RecordInfo;
pub use type_name::short_type_name;
