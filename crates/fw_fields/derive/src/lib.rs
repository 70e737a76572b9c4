//! Derive macros for `fw_fields`.
//!
//! See following macros:
//!
//! - [`Fields`]
//! - [`impl_fields`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static FIELDS_ATTRIBUTE_NAME: &str = "fields";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Derive Fields
///
/// Implements `Reflect` for a struct or a fieldless enum, plus the kind
/// specific traits:
///
/// | input | implemented |
/// |-------|-------------|
/// | struct with named fields | `Reflect`, `Record`, `Fields` |
/// | tuple struct | `Reflect`, `Record`, `Fields` (members named `"0"`, `"1"`, ...) |
/// | unit struct | `Reflect` (a marker) |
/// | fieldless enum | `Reflect`, `Enumeration`, `MapKey` |
///
/// Unions and enums whose variants carry data are rejected.
///
/// Records produce their default value through `Default` unless a factory
/// is given; enumerations default to the variant marked `#[default]`, or
/// their first variant.
///
/// ## Type attributes
///
/// ```rust, ignore
/// #[derive(Fields, Default)]
/// #[fields(precision = 6)]            // significant digits for float members
/// #[fields(default = Config::new)]    // default factory, replaces `Default`
/// #[fields(after_structure)]          // call `AfterStructure::after_structure`
/// #[fields(custom(unstructure, structure, diff, patch, describe, compare))]
/// #[fields(partial_eq, partial_ord)]  // `==` and `<` from the generic comparison
/// struct Config { /* ... */ }
/// ```
///
/// Each name inside `custom(...)` routes the matching algorithm to a trait
/// the type implements itself (`CustomUnstructure`, `CustomStructure`,
/// `CustomDiff`, `CustomPatch`, `CustomDescribe`; `compare` uses the type's
/// own `PartialEq`/`PartialOrd`). `custom(compare)` cannot be combined with
/// `partial_eq` or `partial_ord`.
///
/// Enums additionally accept `numeric`, which writes them as their
/// discriminant instead of their name. The binary width is taken from
/// `#[repr(..)]` and is `i32` without one.
///
/// ## Member attributes
///
/// ```rust, ignore
/// #[derive(Fields, Default)]
/// struct Packet {
///     #[fields(rename = "id", alias = "packet_id", alias = "packetId")]
///     identifier: u32,
///     #[fields(network)]  // part of the byte order subset
///     length: u16,
///     #[fields(skip)]     // invisible to every algorithm
///     cache: Vec<u8>,
///     #[fields(flatten)]  // splice the members of a nested record in place
///     header: Header,
/// }
/// ```
///
/// Variants accept `rename` and `alias`.
///
/// ## Generics
///
/// Member types that mention a type parameter are bounded by `Reflect`
/// (`Fields` for flattened members). Lifetime parameters are not supported.
#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_fields_impls(ast)
}

/// Implements `Fields` from an explicit member table.
///
/// Use it for types whose definition you do not want to annotate, or to
/// spell out the table by hand. The type must be a non-generic struct that
/// implements `Default` (or names a factory with `default = path`).
///
/// Syntax: `(#[fields(..)])* Type { ((#[fields(..)])* member (as "name")? (| "alternate")*),* }`.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Default)]
/// struct Vector3 {
///     x: f32,
///     y: f32,
///     z: f32,
/// }
///
/// impl_fields! {
///     #[fields(precision = 4)]
///     Vector3 {
///         x,
///         y as "why" | "y_axis",
///         #[fields(network)]
///         z,
///     }
/// }
/// ```
///
/// Tuple structs list their indices: `Pair { 0, 1 as "second" }`.
#[proc_macro]
pub fn impl_fields(input: TokenStream) -> TokenStream {
    let table = parse_macro_input!(input with derive_data::FieldsTable::parse);

    impls::match_table_impls(table)
}
