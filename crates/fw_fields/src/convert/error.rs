use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::{error, fmt};

use thiserror::Error;

// -----------------------------------------------------------------------------
// Kind

/// What went wrong while converting between a value and a tree.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertErrorKind {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("`{key}` is not a valid index")]
    InvalidIndex { key: String },

    #[error("`{key}` is not a valid key of `{type_name}`")]
    InvalidKey {
        key: String,
        type_name: &'static str,
    },

    #[error("unknown enumeration value `{value}` for `{type_name}`")]
    UnknownVariant {
        value: String,
        type_name: &'static str,
    },

    #[error("{value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("{0}")]
    Custom(Cow<'static, str>),
}

// -----------------------------------------------------------------------------
// Path

/// One step of the member path recorded in a [`ConvertError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A record member.
    Field(&'static str),
    /// An element of an array or list.
    Index(usize),
    /// An entry of a map.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

// -----------------------------------------------------------------------------
// Error

/// A conversion failure and the member path it happened at.
///
/// ```
/// use fw_fields::{ConvertError, ConvertErrorKind};
///
/// let error = ConvertError::new(ConvertErrorKind::NotAnObject { found: "number" });
/// assert_eq!(error.to_string(), "expected an object, found number");
/// assert!(error.path().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertError {
    kind: ConvertErrorKind,
    path: Vec<PathSegment>,
}

impl ConvertError {
    #[inline]
    pub fn new(kind: ConvertErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// A free-form error, for use by custom structure and patch hooks.
    #[inline]
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ConvertErrorKind::Custom(message.into()))
    }

    #[inline]
    pub fn kind(&self) -> &ConvertErrorKind {
        &self.kind
    }

    /// Path from the outermost value to the failing member.
    #[inline]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    // Errors unwind from the failing leaf, so segments are prepended.
    pub(crate) fn at(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    pub(crate) fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::new(ConvertErrorKind::TypeMismatch { expected, found })
    }
}

impl From<ConvertErrorKind> for ConvertError {
    #[inline]
    fn from(kind: ConvertErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.kind);
        }
        f.write_str("at ")?;
        for (index, segment) in self.path.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        write!(f, ": {}", self.kind)
    }
}

impl error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::{ConvertError, ConvertErrorKind, PathSegment};

    #[test]
    fn path_is_printed_outermost_first() {
        let error = ConvertError::new(ConvertErrorKind::LengthMismatch {
            expected: 3,
            found: 2,
        })
        .at(PathSegment::Index(0))
        .at(PathSegment::Field("inner"))
        .at(PathSegment::Field("outer"));

        assert_eq!(
            error.to_string(),
            "at outer.inner.0: expected 3 elements, found 2"
        );
        assert_eq!(error.path().len(), 3);
    }
}
