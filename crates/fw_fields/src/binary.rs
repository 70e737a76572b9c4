//! Fixed-layout binary encoding.
//!
//! Members are written in layout order with no tags, so reader and writer
//! must agree on the type. Scalars use their natural width in host byte
//! order (apply [`host_to_network`](crate::host_to_network) first for a
//! portable layout).
//!
//! | kind | encoding |
//! |------|----------|
//! | `bool` | one byte, `0` or `1` |
//! | `char` | `u32` code point |
//! | `isize`, `usize` | 64 bits |
//! | `String` | `u64` byte count, UTF-8 bytes |
//! | list | `u64` count, elements (at most [`MAX_EMPTY_ELEMENTS`] when they encode to nothing) |
//! | map | `u64` count, (key text, value) pairs |
//! | optional | presence byte, value |
//! | enumeration | discriminant at its `#[repr]` width |
//! | array, record | elements or members, no prefix |
//! | marker | nothing |
//!
//! ```
//! use fw_fields::{Fields, from_bytes, to_bytes};
//!
//! #[derive(Fields, Default, Debug, PartialEq)]
//! struct Header {
//!     version: u8,
//!     flags: u16,
//!     name: String,
//! }
//!
//! let header = Header { version: 1, flags: 0x0102, name: "ab".into() };
//! let bytes = to_bytes(&header).unwrap();
//! assert_eq!(bytes.len(), 1 + 2 + 8 + 2);
//! assert_eq!(from_bytes::<Header>(&bytes).unwrap(), header);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, Read, Write};

use thiserror::Error;

use crate::info::Repr;
use crate::ops::{Enumeration, List, Map, Optional, Record};
use crate::{Reflect, ReflectMut, ReflectRef, Scalar, ScalarMut};

// -----------------------------------------------------------------------------
// Error

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BinaryError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid bool byte {0}")]
    InvalidBool(u8),

    #[error("invalid char code point {0:#x}")]
    InvalidChar(u32),

    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] alloc::string::FromUtf8Error),

    #[error("no variant of `{type_name}` has discriminant {discriminant}")]
    UnknownDiscriminant {
        type_name: &'static str,
        discriminant: i64,
    },

    #[error("`{key}` is not a valid key of `{type_name}`")]
    InvalidKey {
        key: String,
        type_name: &'static str,
    },

    #[error("length {0} does not fit in memory")]
    LengthOverflow(u64),

    #[error("{0} elements encode to no bytes; at most {max} are accepted", max = MAX_EMPTY_ELEMENTS)]
    TooManyEmptyElements(u64),

    #[error("{0} does not fit in a platform word")]
    WordOverflow(i128),
}

/// The largest count accepted for a list whose elements encode to nothing
/// (`Vec<()>`, lists of marker records).
///
/// Other lists are bounded by the input, since each element consumes bytes.
pub const MAX_EMPTY_ELEMENTS: usize = 1 << 20;

// -----------------------------------------------------------------------------
// Entry points

/// Encode `value` into `out`.
pub fn write(out: &mut impl Write, value: &dyn Reflect) -> Result<(), BinaryError> {
    write_value(out, value)
}

/// Decode a `T` from `input`.
pub fn read<T: Reflect>(input: &mut impl Read) -> Result<T, BinaryError> {
    let mut value = T::new_default();
    read_value(input, &mut value)?;
    Ok(value)
}

/// Decode into an existing value.
pub fn read_in_place(input: &mut impl Read, target: &mut dyn Reflect) -> Result<(), BinaryError> {
    read_value(input, target)
}

pub fn to_bytes(value: &dyn Reflect) -> Result<Vec<u8>, BinaryError> {
    let mut bytes = Vec::new();
    write_value(&mut bytes, value)?;
    Ok(bytes)
}

/// Decode a `T` from the front of `bytes`; trailing bytes are ignored.
pub fn from_bytes<T: Reflect>(mut bytes: &[u8]) -> Result<T, BinaryError> {
    read(&mut bytes)
}

// -----------------------------------------------------------------------------
// Write

fn write_len(out: &mut dyn Write, len: usize) -> Result<(), BinaryError> {
    out.write_all(&(len as u64).to_ne_bytes())?;
    Ok(())
}

fn write_text(out: &mut dyn Write, text: &str) -> Result<(), BinaryError> {
    write_len(out, text.len())?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn write_value(out: &mut dyn Write, value: &dyn Reflect) -> Result<(), BinaryError> {
    match value.reflect_ref() {
        ReflectRef::Record(record) => {
            for (info, member) in record.iter_fields() {
                if info.is_data() {
                    write_value(out, member)?;
                }
            }
        }
        ReflectRef::Array(array) => {
            for element in array.iter() {
                write_value(out, element)?;
            }
        }
        ReflectRef::List(list) => {
            write_len(out, list.len())?;
            for element in list.iter() {
                write_value(out, element)?;
            }
        }
        ReflectRef::Map(map) => {
            write_len(out, map.len())?;
            for (key, entry) in map.entries() {
                write_text(out, &key)?;
                write_value(out, entry)?;
            }
        }
        ReflectRef::Optional(optional) => match optional.get() {
            Some(inner) => {
                out.write_all(&[1])?;
                write_value(out, inner)?;
            }
            None => out.write_all(&[0])?,
        },
        ReflectRef::Enum(enumeration) => write_discriminant(out, enumeration)?,
        ReflectRef::Scalar(scalar) => write_scalar(out, scalar)?,
        ReflectRef::Marker => {}
    }
    Ok(())
}

fn write_discriminant(out: &mut dyn Write, enumeration: &dyn Enumeration) -> Result<(), BinaryError> {
    let d = enumeration.discriminant();
    match enumeration.enum_info().repr() {
        Repr::I8 => out.write_all(&(d as i8).to_ne_bytes())?,
        Repr::I16 => out.write_all(&(d as i16).to_ne_bytes())?,
        Repr::I32 => out.write_all(&(d as i32).to_ne_bytes())?,
        Repr::I64 | Repr::Isize => out.write_all(&d.to_ne_bytes())?,
        Repr::U8 => out.write_all(&(d as u8).to_ne_bytes())?,
        Repr::U16 => out.write_all(&(d as u16).to_ne_bytes())?,
        Repr::U32 => out.write_all(&(d as u32).to_ne_bytes())?,
        Repr::U64 | Repr::Usize => out.write_all(&(d as u64).to_ne_bytes())?,
    }
    Ok(())
}

fn write_scalar(out: &mut dyn Write, scalar: Scalar<'_>) -> Result<(), BinaryError> {
    match scalar {
        Scalar::Bool(v) => out.write_all(&[u8::from(v)])?,
        Scalar::I8(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::I16(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::I32(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::I64(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::Isize(v) => out.write_all(&(v as i64).to_ne_bytes())?,
        Scalar::U8(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::U16(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::U32(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::U64(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::Usize(v) => out.write_all(&(v as u64).to_ne_bytes())?,
        Scalar::F32(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::F64(v) => out.write_all(&v.to_ne_bytes())?,
        Scalar::Char(v) => out.write_all(&u32::from(v).to_ne_bytes())?,
        Scalar::Str(v) => write_text(out, v)?,
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Read

fn take<const N: usize>(input: &mut dyn Read) -> Result<[u8; N], BinaryError> {
    let mut buffer = [0; N];
    input.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Counts the bytes read through it.
struct Counted<'a> {
    inner: &'a mut dyn Read,
    consumed: usize,
}

impl Read for Counted<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.consumed += read;
        Ok(read)
    }
}

fn read_len(input: &mut dyn Read) -> Result<usize, BinaryError> {
    let len = u64::from_ne_bytes(take(input)?);
    usize::try_from(len).map_err(|_| BinaryError::LengthOverflow(len))
}

fn read_text(input: &mut dyn Read) -> Result<String, BinaryError> {
    let len = read_len(input)?;
    let mut bytes = Vec::new();
    // Bounded by the bytes actually present.
    input.take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(String::from_utf8(bytes)?)
}

fn read_value(input: &mut dyn Read, target: &mut dyn Reflect) -> Result<(), BinaryError> {
    match target.reflect_mut() {
        ReflectMut::Record(record) => read_record(input, record),
        ReflectMut::Array(array) => {
            for index in 0..array.len() {
                if let Some(element) = array.get_mut(index) {
                    read_value(input, element)?;
                }
            }
            Ok(())
        }
        ReflectMut::List(list) => read_list(input, list),
        ReflectMut::Map(map) => read_map(input, map),
        ReflectMut::Optional(optional) => read_optional(input, optional),
        ReflectMut::Enum(enumeration) => read_discriminant(input, enumeration),
        ReflectMut::Scalar(scalar) => read_scalar(input, scalar),
        ReflectMut::Marker => Ok(()),
    }
}

fn read_record(input: &mut dyn Read, record: &mut dyn Record) -> Result<(), BinaryError> {
    let info = record.record_info();
    for (index, field) in info.fields().iter().enumerate() {
        if !field.is_data() {
            continue;
        }
        if let Some(member) = record.field_at_mut(index) {
            read_value(input, member)?;
        }
    }
    record.after_structure();
    Ok(())
}

fn read_list(input: &mut dyn Read, list: &mut dyn List) -> Result<(), BinaryError> {
    let len = read_len(input)?;
    list.clear();
    if len == 0 {
        return Ok(());
    }

    // Every element has the same encoding, so the first shows whether the
    // count is backed by input.
    let mut counted = Counted { inner: &mut *input, consumed: 0 };
    read_value(&mut counted, list.push_default())?;
    if counted.consumed == 0 && len > MAX_EMPTY_ELEMENTS {
        list.clear();
        return Err(BinaryError::TooManyEmptyElements(len as u64));
    }

    for _ in 1..len {
        read_value(input, list.push_default())?;
    }
    Ok(())
}

fn read_map(input: &mut dyn Read, map: &mut dyn Map) -> Result<(), BinaryError> {
    let len = read_len(input)?;
    let type_name = map.type_name();
    map.clear();
    for _ in 0..len {
        let key = read_text(input)?;
        let Some(entry) = map.insert_default(&key) else {
            return Err(BinaryError::InvalidKey { key, type_name });
        };
        read_value(input, entry)?;
    }
    Ok(())
}

fn read_optional(input: &mut dyn Read, optional: &mut dyn Optional) -> Result<(), BinaryError> {
    match take::<1>(input)? {
        [0] => {
            optional.set_none();
            Ok(())
        }
        [1] => read_value(input, optional.insert_default()),
        [other] => Err(BinaryError::InvalidBool(other)),
    }
}

fn read_discriminant(
    input: &mut dyn Read,
    enumeration: &mut dyn Enumeration,
) -> Result<(), BinaryError> {
    let info = enumeration.enum_info();
    let discriminant = match info.repr() {
        Repr::I8 => i64::from(i8::from_ne_bytes(take(input)?)),
        Repr::I16 => i64::from(i16::from_ne_bytes(take(input)?)),
        Repr::I32 => i64::from(i32::from_ne_bytes(take(input)?)),
        Repr::I64 | Repr::Isize => i64::from_ne_bytes(take(input)?),
        Repr::U8 => i64::from(u8::from_ne_bytes(take(input)?)),
        Repr::U16 => i64::from(u16::from_ne_bytes(take(input)?)),
        Repr::U32 => i64::from(u32::from_ne_bytes(take(input)?)),
        Repr::U64 | Repr::Usize => u64::from_ne_bytes(take(input)?) as i64,
    };
    if enumeration.set_discriminant(discriminant) {
        Ok(())
    } else {
        Err(BinaryError::UnknownDiscriminant {
            type_name: info.type_name(),
            discriminant,
        })
    }
}

fn read_scalar(input: &mut dyn Read, scalar: ScalarMut<'_>) -> Result<(), BinaryError> {
    match scalar {
        ScalarMut::Bool(v) => {
            *v = match take::<1>(input)? {
                [0] => false,
                [1] => true,
                [other] => return Err(BinaryError::InvalidBool(other)),
            }
        }
        ScalarMut::I8(v) => *v = i8::from_ne_bytes(take(input)?),
        ScalarMut::I16(v) => *v = i16::from_ne_bytes(take(input)?),
        ScalarMut::I32(v) => *v = i32::from_ne_bytes(take(input)?),
        ScalarMut::I64(v) => *v = i64::from_ne_bytes(take(input)?),
        ScalarMut::Isize(v) => {
            let wide = i64::from_ne_bytes(take(input)?);
            *v = isize::try_from(wide).map_err(|_| BinaryError::WordOverflow(i128::from(wide)))?;
        }
        ScalarMut::U8(v) => *v = u8::from_ne_bytes(take(input)?),
        ScalarMut::U16(v) => *v = u16::from_ne_bytes(take(input)?),
        ScalarMut::U32(v) => *v = u32::from_ne_bytes(take(input)?),
        ScalarMut::U64(v) => *v = u64::from_ne_bytes(take(input)?),
        ScalarMut::Usize(v) => {
            let wide = u64::from_ne_bytes(take(input)?);
            *v = usize::try_from(wide).map_err(|_| BinaryError::WordOverflow(i128::from(wide)))?;
        }
        ScalarMut::F32(v) => *v = f32::from_ne_bytes(take(input)?),
        ScalarMut::F64(v) => *v = f64::from_ne_bytes(take(input)?),
        ScalarMut::Char(v) => {
            let code = u32::from_ne_bytes(take(input)?);
            *v = char::from_u32(code).ok_or(BinaryError::InvalidChar(code))?;
        }
        ScalarMut::String(v) => *v = read_text(input)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use std::io;

    use super::{BinaryError, MAX_EMPTY_ELEMENTS, from_bytes, read, to_bytes, write};
    use crate::{Fields, compare_eq};

    #[derive(Fields, Default, Debug, Clone, Copy, PartialEq)]
    #[repr(u8)]
    enum Kind {
        #[default]
        Plain = 1,
        Fancy = 7,
    }

    #[derive(Fields, Default, Debug, Clone, PartialEq)]
    struct Item {
        kind: Kind,
        weight: f32,
        code: char,
        ok: bool,
    }

    #[derive(Fields, Default, Debug, Clone, PartialEq)]
    struct Inventory {
        items: Vec<Item>,
        slots: [Option<u16>; 2],
        index: BTreeMap<i32, String>,
        count: usize,
        tag: PhantomData<Item>,
    }

    #[test]
    fn exact_layout() {
        let item = Item {
            kind: Kind::Fancy,
            weight: 1.5,
            code: 'z',
            ok: true,
        };
        let mut expected = Vec::new();
        expected.push(7_u8);
        expected.extend_from_slice(&1.5_f32.to_ne_bytes());
        expected.extend_from_slice(&u32::from('z').to_ne_bytes());
        expected.push(1);
        assert_eq!(to_bytes(&item).unwrap(), expected);
    }

    #[test]
    fn stream_round_trip() {
        let inventory = Inventory {
            items: vec![Item::default(), Item {
                kind: Kind::Fancy,
                weight: -0.25,
                code: 'é',
                ok: true,
            }],
            slots: [None, Some(9)],
            index: BTreeMap::from([(-3, "minus three".into()), (40, String::new())]),
            count: 12,
            tag: PhantomData,
        };

        let mut stream = Vec::new();
        write(&mut stream, &inventory).unwrap();
        write(&mut stream, &7_u64).unwrap();

        let mut input = stream.as_slice();
        let back: Inventory = read(&mut input).unwrap();
        assert!(compare_eq(&back, &inventory));
        assert_eq!(read::<u64>(&mut input).unwrap(), 7);
        assert!(input.is_empty());
    }

    #[test]
    fn malformed_input() {
        let mut bytes = vec![1_u8];
        bytes.extend_from_slice(&0.0_f32.to_ne_bytes());
        bytes.extend_from_slice(&u32::from('z').to_ne_bytes());
        bytes.push(2);
        let error = from_bytes::<Item>(&bytes).unwrap_err();
        assert!(matches!(error, BinaryError::InvalidBool(2)));

        let error = from_bytes::<Item>(&[3]).unwrap_err();
        assert!(matches!(
            error,
            BinaryError::UnknownDiscriminant { discriminant: 3, .. }
        ));

        let error = from_bytes::<Item>(&[1, 0]).unwrap_err();
        assert!(matches!(&error, BinaryError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));

        let mut bytes = u64::MAX.to_ne_bytes().to_vec();
        bytes.extend_from_slice(b"abc");
        assert!(from_bytes::<String>(&bytes).is_err());
    }

    #[derive(Fields, Default, Debug, PartialEq)]
    struct Flag;

    #[test]
    fn empty_elements_need_a_bounded_count() {
        let bytes = (1_u64 << 34).to_ne_bytes();
        let error = from_bytes::<Vec<()>>(&bytes).unwrap_err();
        assert!(matches!(error, BinaryError::TooManyEmptyElements(n) if n == 1 << 34));
        assert!(from_bytes::<Vec<Flag>>(&bytes).is_err());
        assert!(from_bytes::<Vec<PhantomData<u8>>>(&bytes).is_err());

        let markers = vec![(); 3];
        assert_eq!(from_bytes::<Vec<()>>(&to_bytes(&markers).unwrap()).unwrap(), markers);
        let count = (MAX_EMPTY_ELEMENTS as u64).to_ne_bytes();
        assert_eq!(from_bytes::<Vec<Flag>>(&count).unwrap().len(), MAX_EMPTY_ELEMENTS);

        // Data-carrying elements run out of input instead.
        let error = from_bytes::<Vec<u8>>(&bytes).unwrap_err();
        assert!(matches!(&error, BinaryError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
