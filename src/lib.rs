//! Fixed-capacity circular queue.
//!
//! [`RingQueue`] holds up to `N` elements of a `Copy` type in an inline
//! array. Pushing to a full queue evicts the oldest element instead of
//! failing; popping or peeking an empty queue reports an [`UnderflowError`].
//! Traversal follows logical order (oldest to newest), either through the
//! standard [`Iterator`] surface ([`iter`](RingQueue::iter)) or through the
//! explicit [`begin`](RingQueue::begin)/[`end`](RingQueue::end) cursor pair.

pub mod cursor;
pub mod error;
pub mod iter;
pub mod norm_vec;
mod pos;

use std::{
    fmt::{Debug, Formatter},
    mem::{self, MaybeUninit},
};

pub use self::{cursor::Cursor, error::UnderflowError, iter::Iter, norm_vec::NormVec};

use self::pos::Pos;

/// Circular queue with a fixed capacity of `N` elements.
///
/// The queue tracks the physical slot of its logical first element plus an
/// element count; the slot one past the last element is always derived from
/// those two. A full queue and an empty queue both have that derived slot
/// equal to the head slot, which is why no end index is ever stored.
#[derive(Clone, Copy)]
pub struct RingQueue<T: Copy, const N: usize> {
    // Invariant: the `pos.len()` slots starting at `pos.head()` and wrapping
    // around the end of `buf` are initialized
    buf: [MaybeUninit<T>; N],
    pos: Pos<N>,
}

impl<T: Copy, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    // Evaluated when the type is instantiated; a zero-capacity ring has no
    // valid head slot.
    const CAPACITY_OK: () = assert!(N > 0, "ring queue capacity must be at least 1");

    /// Creates a new empty ring queue.
    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            pos: Pos::zero(),
        }
    }

    /// Returns the number of elements currently in the queue, not the
    /// capacity.
    pub const fn len(&self) -> usize {
        self.pos.len()
    }

    /// Returns the fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the queue holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Returns `true` if the queue holds `N` elements, so the next push will
    /// evict the oldest one.
    pub const fn is_full(&self) -> bool {
        self.pos.is_full()
    }

    /// Returns a reference to the element at the given logical index, or
    /// `None` if the index is out of bounds.
    ///
    /// Logical index 0 is the oldest element, whatever physical slot it
    /// occupies.
    ///
    /// # Examples
    /// ```
    /// # use ring_queue::RingQueue;
    /// let queue: RingQueue<_, 3> = [10, 20].into_iter().collect();
    /// assert_eq!(queue.get(0), Some(&10));
    /// assert_eq!(queue.get(1), Some(&20));
    /// assert_eq!(queue.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            None
        } else {
            let slot = self.pos.physical_index(index);
            // SAFETY: `index < self.len()`, so the slot is initialized
            Some(unsafe { self.buf[slot].assume_init_ref() })
        }
    }

    /// Returns a reference to the oldest element.
    ///
    /// # Errors
    /// Returns [`UnderflowError`] if the queue is empty; the queue is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ring_queue::RingQueue;
    /// let mut queue = RingQueue::<_, 3>::new();
    /// assert!(queue.front().is_err());
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, UnderflowError> {
        self.get(0).ok_or(UnderflowError::new())
    }

    /// Returns a reference to the newest element, the one at logical index
    /// `len - 1`.
    ///
    /// The physical slot just past it may hold a stale value from an earlier
    /// eviction; that slot is never what `back` reads.
    ///
    /// # Errors
    /// Returns [`UnderflowError`] if the queue is empty; the queue is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ring_queue::RingQueue;
    /// let mut queue = RingQueue::<_, 3>::new();
    /// assert!(queue.back().is_err());
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T, UnderflowError> {
        self.get(self.len().wrapping_sub(1))
            .ok_or(UnderflowError::new())
    }

    /// Adds an element to the back of the queue. Never fails: if the queue is
    /// full, the oldest element is evicted and returned, otherwise `None`.
    ///
    /// # Examples
    /// ```
    /// # use ring_queue::RingQueue;
    /// let mut queue = RingQueue::<_, 3>::new();
    /// assert_eq!(queue.push_back(0), None);
    /// assert_eq!(queue.push_back(1), None);
    /// assert_eq!(queue.push_back(2), None);
    /// assert_eq!(queue, [0, 1, 2]);
    /// assert_eq!(queue.push_back(3), Some(0));
    /// assert_eq!(queue, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            let evicted = mem::replace(&mut self.buf[self.pos.head()], MaybeUninit::new(item));
            self.pos.advance(1);
            // SAFETY: the queue was full, so the head slot was initialized
            Some(unsafe { evicted.assume_init() })
        } else {
            let slot = self.pos.physical_index(self.len());
            self.buf[slot].write(item);
            // SAFETY: `self.len() < N`, so `self.len() + 1` is in bounds
            unsafe { self.pos.set_len(self.len() + 1) };
            None
        }
    }

    /// Removes the oldest element from the queue and returns it.
    ///
    /// # Errors
    /// Returns [`UnderflowError`] if the queue is empty; the queue is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ring_queue::RingQueue;
    /// let mut queue: RingQueue<_, 3> = [0, 1].into_iter().collect();
    /// assert_eq!(queue.pop_front(), Ok(0));
    /// assert_eq!(queue.pop_front(), Ok(1));
    /// assert!(queue.pop_front().is_err());
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, UnderflowError> {
        if self.is_empty() {
            return Err(UnderflowError::new());
        }

        let item = mem::replace(&mut self.buf[self.pos.head()], MaybeUninit::uninit());
        self.pos.advance(1);
        // SAFETY: `0 < self.len() <= N`, so `self.len() - 1` does not underflow
        unsafe { self.pos.set_len(self.len() - 1) };
        // SAFETY: the queue was non-empty, so the head slot was initialized
        Ok(unsafe { item.assume_init() })
    }

    /// Removes all elements from the queue.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns a cursor positioned at the oldest element (logical offset 0).
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor positioned one past the newest element.
    ///
    /// Its offset is `len`, which for a full queue is the sentinel value `N`:
    /// the slot one past the last element of a full queue is physically the
    /// head slot again, and only the offset keeps `end` distinct from
    /// [`begin`](Self::begin).
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len())
    }

    /// Returns an iterator over the elements, oldest first.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(&self.buf, self.pos)
    }
}

/// Pushes every element of the iterator onto the back of the queue, evicting
/// from the front when full.
///
/// # Examples
/// ```
/// # use ring_queue::RingQueue;
/// let mut queue = RingQueue::<_, 3>::new();
/// queue.extend([0, 1]);
/// assert_eq!(queue, [0, 1]);
/// queue.extend([2, 3]);
/// assert_eq!(queue, [1, 2, 3]);
/// ```
impl<T: Copy, const N: usize> Extend<T> for RingQueue<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

/// Collects an iterator into a new queue with the usual eviction policy: the
/// queue ends up holding the last `N` elements yielded.
///
/// # Examples
/// ```
/// # use ring_queue::RingQueue;
/// let queue: RingQueue<_, 3> = [0, 1, 2, 3].into_iter().collect();
/// assert_eq!(queue, [1, 2, 3]);
/// ```
impl<T: Copy, const N: usize> FromIterator<T> for RingQueue<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for RingQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Copy + Eq, const N: usize> Eq for RingQueue<T, N> {}

impl<T: Copy + PartialEq, B: AsRef<[T]> + ?Sized, const N: usize> PartialEq<B>
    for RingQueue<T, N>
{
    fn eq(&self, other: &B) -> bool {
        self.iter().eq(other.as_ref())
    }
}

impl<T: Copy + Debug, const N: usize> Debug for RingQueue<T, N> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'q, T: Copy, const N: usize> IntoIterator for &'q RingQueue<T, N> {
    type Item = &'q T;
    type IntoIter = Iter<'q, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
