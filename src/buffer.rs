//! Contains the declaration of [`BufferBuilder`], the growable buffer
//! backing the encoder.

use arrow_buffer::{ArrowNativeType, ScalarBuffer};

/// Slot count of a freshly created builder.
const INITIAL_CAPACITY: usize = 8;

/// A wrapper type of [`Vec<T>`] representing a growable flat buffer of one
/// numeric element type.
///
/// The allocation doubles whenever a push would fill the last free slot, so
/// appends are amortized O(1) and transient overallocation is bounded at 2x.
/// [`finish`](Self::finish) trims the allocation to exactly the number of
/// elements written and freezes it into an immutable [`ScalarBuffer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BufferBuilder<T: ArrowNativeType>(Vec<T>);

impl<T: ArrowNativeType> Default for BufferBuilder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrowNativeType> BufferBuilder<T> {
    /// Returns an empty [`BufferBuilder`] with the initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::with_capacity(INITIAL_CAPACITY))
    }

    /// Returns the number of elements written so far.
    ///
    /// This is also the logical index the next [`push`](Self::push) will
    /// write to, which is how the encoder tracks its cursors.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the current slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Appends one element at the current logical index, doubling the
    /// allocation first if no free slot remains.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.0.len() == self.0.capacity() {
            self.0.reserve_exact(self.0.capacity().max(INITIAL_CAPACITY));
        }
        self.0.push(value);
    }

    /// Returns the elements written so far.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Trims the allocation to the exact written length and freezes it.
    ///
    /// No capacity slack survives into the frozen buffer.
    pub fn finish(mut self) -> ScalarBuffer<T> {
        self.0.shrink_to_fit();
        ScalarBuffer::from(self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn growth_is_invisible() {
        let mut builder = BufferBuilder::<u32>::new();
        for value in 0..100 {
            builder.push(value);
        }
        assert_eq!(builder.len(), 100);
        assert!(builder.capacity() >= 100);

        let frozen = builder.finish();
        assert_eq!(frozen.len(), 100);
        for (index, value) in frozen.iter().enumerate() {
            assert_eq!(*value, index as u32);
        }
    }

    #[test]
    fn doubles_before_overflow() {
        let mut builder = BufferBuilder::<f64>::new();
        for _ in 0..=INITIAL_CAPACITY {
            builder.push(1.0);
        }
        // The 9th push lands after the doubling, never past the end.
        assert!(builder.capacity() >= INITIAL_CAPACITY * 2);
        assert_eq!(builder.len(), INITIAL_CAPACITY + 1);
    }

    #[test]
    fn finish_trims_slack() {
        let mut builder = BufferBuilder::<f64>::new();
        builder.push(3.5);
        let frozen = builder.finish();
        assert_eq!(frozen.as_ref(), &[3.5]);
    }
}
