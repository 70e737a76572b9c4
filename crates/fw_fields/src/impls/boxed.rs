use alloc::boxed::Box;
use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::convert::ConvertError;
use crate::describe::Describer;
use crate::tree::Value;
use crate::{Reflect, ReflectMut, ReflectRef};

// A box reflects as its pointee, including the upcasts, so downcasting a
// boxed member yields the inner value.
impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        (**self).as_any_mut()
    }

    #[inline]
    fn as_reflect(&self) -> &dyn Reflect {
        (**self).as_reflect()
    }

    #[inline]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        (**self).as_reflect_mut()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn new_default() -> Self {
        Box::new(T::new_default())
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }

    #[inline]
    fn precision(&self) -> Option<u32> {
        (**self).precision()
    }

    #[inline]
    fn unstructure_custom(&self) -> Option<Value> {
        (**self).unstructure_custom()
    }

    #[inline]
    fn structure_custom(&mut self, tree: &Value) -> Option<Result<(), ConvertError>> {
        (**self).structure_custom(tree)
    }

    #[inline]
    fn diff_custom(&self, other: &dyn Reflect) -> Option<Option<Value>> {
        (**self).diff_custom(other)
    }

    #[inline]
    fn patch_custom(&mut self, diff: &Value) -> Option<Result<(), ConvertError>> {
        (**self).patch_custom(diff)
    }

    #[inline]
    fn describe_custom(&self, describer: &mut Describer<'_>) -> Option<fmt::Result> {
        (**self).describe_custom(describer)
    }

    #[inline]
    fn eq_custom(&self, other: &dyn Reflect) -> Option<bool> {
        (**self).eq_custom(other)
    }

    #[inline]
    fn cmp_custom(&self, other: &dyn Reflect) -> Option<Option<Ordering>> {
        (**self).cmp_custom(other)
    }

    #[inline]
    fn after_structure(&mut self) {
        (**self).after_structure();
    }
}
