use alloc::string::String;

use crate::{Reflect, ReflectMut, ReflectRef, Scalar, ScalarMut};

macro_rules! impl_scalar {
    ($($ty:ident => $variant:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            any_methods!();

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(Scalar::$variant(*self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(ScalarMut::$variant(self))
            }

            #[inline]
            fn new_default() -> Self {
                <$ty as Default>::default()
            }

            #[inline]
            fn reset(&mut self) {
                *self = <$ty as Default>::default();
            }
        }
    )*};
}

impl_scalar!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
);

impl Reflect for String {
    #[inline]
    fn type_name(&self) -> &'static str {
        "String"
    }

    any_methods!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Str(self.as_str()))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(ScalarMut::String(self))
    }

    #[inline]
    fn new_default() -> Self {
        String::new()
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}
