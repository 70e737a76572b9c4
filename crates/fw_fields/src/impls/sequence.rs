use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::info::short_type_name;
use crate::ops::{Array, List};
use crate::{Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    #[inline]
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    any_methods!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Array(self)
    }

    fn new_default() -> Self {
        core::array::from_fn(|_| T::new_default())
    }

    fn reset(&mut self) {
        self.iter_mut().for_each(T::reset);
    }
}

impl<T: Reflect, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn as_array(&self) -> &dyn Array {
        self
    }
}

// -----------------------------------------------------------------------------
// Growable sequences

macro_rules! impl_list {
    ($ty:ident, $push:ident) => {
        impl<T: Reflect> Reflect for $ty<T> {
            #[inline]
            fn type_name(&self) -> &'static str {
                short_type_name::<Self>()
            }

            any_methods!();

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::List(self)
            }

            #[inline]
            fn new_default() -> Self {
                $ty::new()
            }

            #[inline]
            fn reset(&mut self) {
                $ty::clear(self);
            }
        }

        impl<T: Reflect> Array for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                (index < $ty::len(self)).then(|| &self[index] as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                if index < $ty::len(self) {
                    Some(&mut self[index] as &mut dyn Reflect)
                } else {
                    None
                }
            }

            #[inline]
            fn as_array(&self) -> &dyn Array {
                self
            }
        }

        impl<T: Reflect> List for $ty<T> {
            #[inline]
            fn clear(&mut self) {
                $ty::clear(self);
            }

            fn push_default(&mut self) -> &mut dyn Reflect {
                self.$push(T::new_default());
                let last = $ty::len(self) - 1;
                &mut self[last]
            }
        }
    };
}

impl_list!(Vec, push);
impl_list!(VecDeque, push_back);

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::ops::{Array, List};
    use crate::{Reflect, ReflectRef, Scalar};

    #[test]
    fn array_access() {
        let mut values = [1_u8, 2, 3];
        assert_eq!(Array::len(&values), 3);
        assert!(matches!(
            Array::get(&values, 1).map(Reflect::reflect_ref),
            Some(ReflectRef::Scalar(Scalar::U8(2)))
        ));
        assert!(Array::get(&values, 3).is_none());

        values.reset();
        assert_eq!(values, [0, 0, 0]);
    }

    #[test]
    fn list_push_default() {
        let mut values: Vec<i64> = vec![5];
        List::push_default(&mut values);
        assert_eq!(values, [5, 0]);
        assert_eq!(values.type_name(), "Vec<i64>");
    }
}
