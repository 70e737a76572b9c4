//! Conversion between reflected values and the [`Value`](crate::Value) tree.
//!
//! - [`unstructure`]: value to tree. Records become objects keyed by the
//!   canonical member names, zero-size members and absent optionals are left
//!   out.
//! - [`structure`] / [`structure_in_place`]: tree to value. Members are looked
//!   up by canonical name, then by each alternate name in order; members the
//!   tree does not mention keep their default.
//! - [`assign`]: member-wise copy between two record types by position.
//!
//! ```
//! use fw_fields::{Fields, Value, structure, unstructure};
//!
//! #[derive(Fields, Default, Debug, PartialEq)]
//! struct Config {
//!     name: String,
//!     #[fields(alias = "retry")]
//!     retries: u32,
//!     timeout: Option<f64>,
//! }
//!
//! let config = Config { name: "db".into(), retries: 3, timeout: None };
//! let tree = unstructure(&config);
//! assert_eq!(tree.to_string(), r#"{"name":"db","retries":3}"#);
//!
//! let back: Config = structure(&tree).unwrap();
//! assert_eq!(back, config);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod assign;
mod error;
mod structure;
mod unstructure;

// -----------------------------------------------------------------------------
// Exports

pub use assign::assign;
pub use error::{ConvertError, ConvertErrorKind, PathSegment};
pub use structure::{structure, structure_from, structure_in_place};
pub use unstructure::{unstructure, unstructure_into};

pub(crate) use structure::lookup_member;
pub(crate) use unstructure::is_absent;
