use core::marker::PhantomData;

use crate::info::short_type_name;
use crate::{Reflect, ReflectMut, ReflectRef};

impl Reflect for () {
    #[inline]
    fn type_name(&self) -> &'static str {
        "()"
    }

    any_methods!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Marker
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Marker
    }

    #[inline]
    fn new_default() -> Self {}

    #[inline]
    fn reset(&mut self) {}
}

impl<T: ?Sized + 'static> Reflect for PhantomData<T> {
    #[inline]
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    any_methods!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Marker
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Marker
    }

    #[inline]
    fn new_default() -> Self {
        PhantomData
    }

    #[inline]
    fn reset(&mut self) {}
}
