//! Per-type overrides of the generic algorithms.
//!
//! A type opts in by implementing a capability trait and naming it in
//! `#[fields(custom(...))]`; the derive then routes the matching
//! [`Reflect`](crate::Reflect) hook to it. The choice is made once per type,
//! at compile time.
//!
//! | flag | trait | replaces |
//! |------|-------|----------|
//! | `unstructure` | [`CustomUnstructure`] | [`unstructure`](crate::unstructure) |
//! | `structure` | [`CustomStructure`] | [`structure`](crate::structure) |
//! | `diff` | [`CustomDiff`] | [`diff`](crate::diff) |
//! | `patch` | [`CustomPatch`] | [`patch`](crate::patch) |
//! | `describe` | [`CustomDescribe`] | [`describe`](crate::describe()) |
//! | `compare` | `PartialEq` + `PartialOrd` | [`compare`](crate::compare()) |
//!
//! `#[fields(after_structure)]` routes to [`AfterStructure`], which runs once
//! a record has every member set by structure, patch or assign.
//!
//! # Example
//!
//! ```
//! use fw_fields::hooks::{CustomStructure, CustomUnstructure};
//! use fw_fields::{ConvertError, Fields, Value, structure, unstructure};
//!
//! #[derive(Fields, Default, Debug, PartialEq)]
//! #[fields(custom(unstructure, structure))]
//! struct Rgb {
//!     r: u8,
//!     g: u8,
//!     b: u8,
//! }
//!
//! impl CustomUnstructure for Rgb {
//!     fn unstructure(&self) -> Value {
//!         format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b).into()
//!     }
//! }
//!
//! impl CustomStructure for Rgb {
//!     fn structure(tree: &Value) -> Result<Self, ConvertError> {
//!         let text = tree.as_str().and_then(|t| t.strip_prefix('#'));
//!         let channel = |i: usize| {
//!             text.and_then(|t| t.get(i..i + 2))
//!                 .and_then(|hex| u8::from_str_radix(hex, 16).ok())
//!                 .ok_or_else(|| ConvertError::custom("expected `#rrggbb`"))
//!         };
//!         Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
//!     }
//! }
//!
//! let color = Rgb { r: 255, g: 128, b: 0 };
//! let tree = unstructure(&color);
//! assert_eq!(tree.as_str(), Some("#ff8000"));
//! assert_eq!(structure::<Rgb>(&tree).unwrap(), color);
//! ```

use core::fmt;

use crate::convert::ConvertError;
use crate::describe::Describer;
use crate::tree::Value;

/// Produce the tree form of `self` directly.
pub trait CustomUnstructure {
    fn unstructure(&self) -> Value;
}

/// Build a value directly from its tree form.
///
/// The post-structure hook is not run for such types.
pub trait CustomStructure: Sized {
    fn structure(tree: &Value) -> Result<Self, ConvertError>;
}

/// Compute the change from `self` to `other`; `None` when there is none.
pub trait CustomDiff {
    fn diff(&self, other: &Self) -> Option<Value>;
}

/// Apply a change produced by [`CustomDiff`].
pub trait CustomPatch {
    fn patch(&mut self, diff: &Value) -> Result<(), ConvertError>;
}

/// Render `self` through a [`Describer`].
pub trait CustomDescribe {
    fn describe(&self, describer: &mut Describer<'_>) -> fmt::Result;
}

/// Post-construction hook.
pub trait AfterStructure {
    fn after_structure(&mut self);
}
