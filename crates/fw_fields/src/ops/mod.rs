//! Kind specific interfaces.
//!
//! Each is a sub-trait of [`Reflect`](crate::Reflect) reached through
//! [`ReflectRef`](crate::ReflectRef) / [`ReflectMut`](crate::ReflectMut).
//!
//! - [`Record`]: a fixed set of named members (`struct A { .. }`).
//! - [`Array`]: a fixed-size sequence (`[T; N]`).
//! - [`List`]: a growable sequence (`Vec<T>`, `VecDeque<T>`).
//! - [`Map`]: a keyed container whose keys have a text form (`BTreeMap<K, V>`).
//! - [`Optional`]: a value that may be absent (`Option<T>`).
//! - [`Enumeration`]: a fieldless enum.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod enumeration;
mod list;
mod map;
mod optional;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use array::{Array, ArrayIter};
pub use enumeration::Enumeration;
pub use list::List;
pub use map::{Map, MapKey, cmp_key_texts};
pub use optional::Optional;
pub use record::{FieldIter, Fields, Record};
