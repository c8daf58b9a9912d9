/// Index state of a ring queue: the physical slot of the logical first
/// element plus the logical element count.
///
/// Storing a count instead of an end index is what keeps "empty" and "full"
/// distinguishable; the end slot is always derived, never stored.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pos<const N: usize> {
    // Invariant: `head` < `N`
    head: usize,
    // Invariant: `len` <= `N`
    len: usize,
}

impl<const N: usize> Pos<N> {
    pub const fn zero() -> Self {
        Self { head: 0, len: 0 }
    }

    #[inline(always)]
    pub const fn head(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// # Safety
    /// The following invariant must be held:
    /// - `len` <= `N`
    #[inline(always)]
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N);
        self.len = len;
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maps a logical offset from the head to a physical slot index.
    /// The returned index is in bounds (< `N`), but the slot it names is only
    /// initialized for offsets below `self.len()`.
    ///
    /// # Panics
    /// Panics if `N == 0`.
    #[inline(always)]
    #[track_caller]
    pub const fn physical_index(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }

    /// Moves the head forward by `n` slots, wrapping around the storage.
    pub fn advance(&mut self, n: usize) {
        self.head = self.physical_index(n);
    }
}
