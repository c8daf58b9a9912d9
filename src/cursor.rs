use std::{fmt, ptr};

use crate::RingQueue;

/// A forward cursor over a [`RingQueue`], positioned by logical offset from
/// the front of the queue.
///
/// Offsets range over `[0, N]`. The value `N` is reserved as the end sentinel
/// of a full queue: a full queue's first element and one-past-its-last element
/// live in the same physical slot, so offset alone (not slot index) is what
/// keeps [`begin`](RingQueue::begin) and [`end`](RingQueue::end) distinct.
///
/// The cursor borrows its queue, so it cannot outlive it, and the queue
/// cannot be mutated while any cursor is alive.
///
/// # Examples
/// ```
/// # use ring_queue::RingQueue;
/// let queue: RingQueue<_, 3> = [10, 20, 30].into_iter().collect();
/// let mut cursor = queue.begin();
/// assert_ne!(cursor, queue.end());
/// assert_eq!(cursor.get(), Some(&10));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.get(), Some(&30));
/// cursor.advance();
/// assert_eq!(cursor, queue.end());
/// assert_eq!(cursor.get(), None);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'q, T: Copy, const N: usize> {
    queue: &'q RingQueue<T, N>,
    // Invariant: `offset` <= `N`
    offset: usize,
}

impl<'q, T: Copy, const N: usize> Cursor<'q, T, N> {
    pub(crate) fn new(queue: &'q RingQueue<T, N>, offset: usize) -> Self {
        debug_assert!(offset <= N);
        Self { queue, offset }
    }

    /// Returns the logical offset of this cursor from the front of the queue.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a reference to the element the cursor points at, or `None` if
    /// the cursor is at or past the end of the queue.
    pub fn get(&self) -> Option<&'q T> {
        self.queue.get(self.offset)
    }

    /// Moves the cursor one element forward.
    ///
    /// The offset never wraps around the capacity: advancing at or past the
    /// end pins the cursor at the end sentinel, where [`get`](Self::get)
    /// returns `None`, rather than wrapping back to a valid-looking element.
    pub fn advance(&mut self) {
        self.offset = usize::min(self.offset + 1, N);
    }
}

/// Cursors are equal iff they are bound to the same queue instance and sit at
/// the same logical offset.
impl<T: Copy, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.queue, other.queue) && self.offset == other.offset
    }
}

impl<T: Copy, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("item", &self.get())
            .finish()
    }
}
