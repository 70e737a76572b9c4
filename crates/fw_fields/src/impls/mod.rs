//! [`Reflect`](crate::Reflect) implementations for standard types.
//!
//! | kind | types |
//! |------|-------|
//! | scalar | `bool`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`, `char`, `String` |
//! | array | `[T; N]` |
//! | list | `Vec<T>`, `VecDeque<T>` |
//! | map | `BTreeMap<K, V>`, `HashMap<K, V, S>` with `K: MapKey` |
//! | optional | `Option<T>` |
//! | marker | `()`, `PhantomData<T>` |
//!
//! `Box<T>` is transparent: it reflects as its pointee.

/// The `Any` / `Reflect` upcasts shared by every implementation.
macro_rules! any_methods {
    () => {
        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        #[inline]
        fn as_reflect(&self) -> &dyn $crate::Reflect {
            self
        }

        #[inline]
        fn as_reflect_mut(&mut self) -> &mut dyn $crate::Reflect {
            self
        }
    };
}

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod map;
mod marker;
mod option;
mod scalar;
mod sequence;
