use crate::Reflect;

/// A fixed-size sequence, e.g. `[T; N]`.
pub trait Array: Reflect {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn iter(&self) -> ArrayIter<'_> {
        ArrayIter::new(self.as_array())
    }

    fn as_array(&self) -> &dyn Array;
}

/// An iterator over the elements of an [`Array`] or [`List`](crate::List).
pub struct ArrayIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> ArrayIter<'a> {
    #[inline]
    pub fn new(array: &'a dyn Array) -> Self {
        Self { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArrayIter<'_> {}
