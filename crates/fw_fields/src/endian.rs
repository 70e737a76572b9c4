//! In-place byte-order conversion.
//!
//! Every integer and floating member is converted between host order and
//! network (big-endian) order, recursing through records, arrays, lists, map
//! values and optionals. `bool`, `char`, strings, enumerations and map keys
//! are left as they are.
//!
//! A record with members marked `#[fields(network)]` converts only those
//! members; the others keep their host representation.

use alloc::vec::Vec;

use crate::binary::{BinaryError, from_bytes, to_bytes};
use crate::ops::Record;
use crate::{Reflect, ReflectMut, ScalarMut};

#[derive(Clone, Copy)]
enum Direction {
    ToNetwork,
    ToHost,
}

/// Convert every participating member of `value` to network byte order.
///
/// ```
/// use fw_fields::{Fields, host_to_network, network_to_host};
///
/// #[derive(Fields, Default, Clone, Debug, PartialEq)]
/// struct Packet {
///     #[fields(network)]
///     length: u16,
///     local: u16,
/// }
///
/// let original = Packet { length: 0x0102, local: 0x0304 };
/// let mut packet = original.clone();
/// host_to_network(&mut packet);
/// assert_eq!(packet.length, 0x0102_u16.to_be());
/// assert_eq!(packet.local, 0x0304);
///
/// network_to_host(&mut packet);
/// assert_eq!(packet, original);
/// ```
#[inline]
pub fn host_to_network(value: &mut dyn Reflect) {
    convert(value, Direction::ToNetwork);
}

/// Convert every participating member of `value` back to host byte order.
#[inline]
pub fn network_to_host(value: &mut dyn Reflect) {
    convert(value, Direction::ToHost);
}

/// Encode a network-order copy of `value` with the [binary](crate::binary)
/// codec.
///
/// Length prefixes, presence bytes and enumeration discriminants keep host
/// order.
pub fn to_network_bytes<T: Reflect + Clone>(value: &T) -> Result<Vec<u8>, BinaryError> {
    let mut copy = value.clone();
    host_to_network(&mut copy);
    to_bytes(&copy)
}

/// Decode bytes produced by [`to_network_bytes`].
pub fn from_network_bytes<T: Reflect>(bytes: &[u8]) -> Result<T, BinaryError> {
    let mut value = from_bytes::<T>(bytes)?;
    network_to_host(&mut value);
    Ok(value)
}

fn convert(value: &mut dyn Reflect, direction: Direction) {
    match value.reflect_mut() {
        ReflectMut::Record(record) => convert_record(record, direction),
        ReflectMut::Array(array) => {
            for index in 0..array.len() {
                if let Some(element) = array.get_mut(index) {
                    convert(element, direction);
                }
            }
        }
        ReflectMut::List(list) => {
            for index in 0..list.len() {
                if let Some(element) = list.get_mut(index) {
                    convert(element, direction);
                }
            }
        }
        ReflectMut::Map(map) => {
            for entry in map.values_mut() {
                convert(entry, direction);
            }
        }
        ReflectMut::Optional(optional) => {
            if let Some(inner) = optional.get_mut() {
                convert(inner, direction);
            }
        }
        ReflectMut::Scalar(scalar) => convert_scalar(scalar, direction),
        ReflectMut::Enum(_) | ReflectMut::Marker => {}
    }
}

fn convert_record(record: &mut dyn Record, direction: Direction) {
    let info = record.record_info();
    for index in 0..info.len() {
        if !info.is_network(index) {
            continue;
        }
        if let Some(member) = record.field_at_mut(index) {
            convert(member, direction);
        }
    }
}

macro_rules! swap_ints {
    ($scalar:expr, $direction:expr; $($variant:ident => $ty:ty),* $(,)?) => {
        match $scalar {
            $(ScalarMut::$variant(v) => {
                *v = match $direction {
                    Direction::ToNetwork => v.to_be(),
                    Direction::ToHost => <$ty>::from_be(*v),
                };
            })*
            ScalarMut::F32(v) => {
                let bits = match $direction {
                    Direction::ToNetwork => v.to_bits().to_be(),
                    Direction::ToHost => u32::from_be(v.to_bits()),
                };
                *v = f32::from_bits(bits);
            }
            ScalarMut::F64(v) => {
                let bits = match $direction {
                    Direction::ToNetwork => v.to_bits().to_be(),
                    Direction::ToHost => u64::from_be(v.to_bits()),
                };
                *v = f64::from_bits(bits);
            }
            ScalarMut::Bool(_) | ScalarMut::Char(_) | ScalarMut::String(_) => {}
        }
    };
}

fn convert_scalar(scalar: ScalarMut<'_>, direction: Direction) {
    swap_ints!(scalar, direction;
        I8 => i8,
        I16 => i16,
        I32 => i32,
        I64 => i64,
        Isize => isize,
        U8 => u8,
        U16 => u16,
        U32 => u32,
        U64 => u64,
        Usize => usize,
    );
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;

    use super::{from_network_bytes, host_to_network, network_to_host, to_network_bytes};
    use crate::Fields;

    #[derive(Fields, Default, Clone, Debug, PartialEq)]
    struct Sample {
        ratio: f64,
        counts: Vec<u32>,
        by_id: BTreeMap<u16, i64>,
        maybe: Option<i16>,
        flag: bool,
    }

    #[test]
    fn every_number_is_converted() {
        let original = Sample {
            ratio: 0.75,
            counts: vec![1, 0x0a0b_0c0d],
            by_id: BTreeMap::from([(0x0102, -2)]),
            maybe: Some(0x0506),
            flag: true,
        };
        let mut sample = original.clone();
        host_to_network(&mut sample);

        assert_eq!(sample.ratio.to_bits(), 0.75_f64.to_bits().to_be());
        assert_eq!(sample.counts[1], 0x0a0b_0c0d_u32.to_be());
        assert_eq!(sample.by_id.get(&0x0102), Some(&(-2_i64).to_be()));
        assert_eq!(sample.maybe, Some(0x0506_i16.to_be()));
        assert!(sample.flag);

        network_to_host(&mut sample);
        assert_eq!(sample, original);
    }

    #[test]
    fn network_bytes_are_big_endian() {
        let bytes = to_network_bytes(&0x0102_0304_u32).unwrap();
        assert_eq!(bytes, [1, 2, 3, 4]);
        assert_eq!(from_network_bytes::<u32>(&bytes).unwrap(), 0x0102_0304);
    }
}
