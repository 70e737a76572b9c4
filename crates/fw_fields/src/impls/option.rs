use crate::info::short_type_name;
use crate::ops::Optional;
use crate::{Reflect, ReflectMut, ReflectRef};

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    any_methods!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Optional(self)
    }

    #[inline]
    fn new_default() -> Self {
        None
    }

    #[inline]
    fn reset(&mut self) {
        *self = None;
    }
}

impl<T: Reflect> Optional for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn set_none(&mut self) {
        *self = None;
    }

    #[inline]
    fn insert_default(&mut self) -> &mut dyn Reflect {
        self.insert(T::new_default())
    }
}
