use crate::Reflect;
use crate::ops::Array;

/// A growable sequence, e.g. `Vec<T>`.
///
/// Element access comes from [`Array`].
pub trait List: Array {
    fn clear(&mut self);

    /// Append a default element and return it for filling in.
    fn push_default(&mut self) -> &mut dyn Reflect;
}
