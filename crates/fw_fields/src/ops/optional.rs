use crate::Reflect;

/// A value that may be absent, e.g. `Option<T>`.
pub trait Optional: Reflect {
    fn get(&self) -> Option<&dyn Reflect>;

    fn get_mut(&mut self) -> Option<&mut dyn Reflect>;

    fn set_none(&mut self);

    /// Replace the content with a default value and return it.
    fn insert_default(&mut self) -> &mut dyn Reflect;

    #[inline]
    fn is_some(&self) -> bool {
        self.get().is_some()
    }
}
