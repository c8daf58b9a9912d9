use std::{iter::FusedIterator, mem::MaybeUninit};

use crate::pos::Pos;

/// Forward iterator over the elements of a [`RingQueue`](crate::RingQueue),
/// from the oldest element to the newest.
///
/// Holds its own copy of the queue's index state and consumes it from the
/// front; the borrow of the storage keeps the queue immutable for the
/// iterator's lifetime.
pub struct Iter<'q, T: Copy, const N: usize> {
    buf: &'q [MaybeUninit<T>; N],
    pos: Pos<N>,
}

impl<'q, T: Copy, const N: usize> Iter<'q, T, N> {
    pub(crate) fn new(buf: &'q [MaybeUninit<T>; N], pos: Pos<N>) -> Self {
        Self { buf, pos }
    }
}

impl<T: Copy, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            pos: self.pos,
        }
    }
}

impl<'q, T: Copy, const N: usize> Iterator for Iter<'q, T, N> {
    type Item = &'q T;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.pos.len().checked_sub(1)?;
        let index = self.pos.physical_index(0);
        // SAFETY: `self.pos.len() > 0`, so the slot at the head is initialized
        let item = unsafe { self.buf[index].assume_init_ref() };
        self.pos.advance(1);
        // SAFETY: `remaining` < the previous length, which was <= `N`
        unsafe { self.pos.set_len(remaining) };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pos.len(), Some(self.pos.len()))
    }

    fn count(self) -> usize {
        self.pos.len()
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    fn len(&self) -> usize {
        self.pos.len()
    }
}

impl<T: Copy, const N: usize> FusedIterator for Iter<'_, T, N> {}
