#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros emit `::fw_fields::...` paths; this alias lets the crate's
// own tests use them.
extern crate self as fw_fields;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod binary;
pub mod compare;
pub mod convert;
pub mod describe;
pub mod diff;
pub mod endian;
pub mod hooks;
pub mod impls;
pub mod info;
pub mod ops;
pub mod traverse;
pub mod tree;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use fw_fields_derive::{Fields, impl_fields};
pub use reflection::{Reflect, ReflectKind, ReflectMut, ReflectRef, Scalar, ScalarMut};

pub use binary::{BinaryError, from_bytes, read, read_in_place, to_bytes, write};
pub use compare::{compare, compare_eq, comparison_tuple, digits_equal};
pub use convert::{
    ConvertError, ConvertErrorKind, assign, structure, structure_from, structure_in_place,
    unstructure, unstructure_into,
};
pub use describe::{Describe, describe, describe_compact};
pub use diff::{diff, patch};
pub use endian::{from_network_bytes, host_to_network, network_to_host, to_network_bytes};
pub use info::{EnumInfo, FieldInfo, RecordInfo, Repr, VariantInfo};
pub use ops::{Array, Enumeration, Fields, List, Map, MapKey, Optional, Record};
pub use traverse::{for_each_member, for_each_member_mut, for_each_zipped, layout};
pub use traverse::{member_count, member_names};
pub use tree::{Number, Object, Value, ValueTree};
