//! Growable numeric vector with arithmetic operators.
//!
//! Ordering between vectors compares their Euclidean norms, not their
//! elements lexicographically: `a < b` means the norm of `a` is smaller than
//! the norm of `b`.

use std::{
    cmp::Ordering,
    iter::Sum,
    ops::{Add, Index, IndexMut, Mul},
};

/// Growable vector of numeric elements.
///
/// Supports elementwise [`Add`], scalar [`Mul`], dot-product [`Mul`] between
/// two vectors, and norm-based ordering.
///
/// # Examples
/// ```
/// # use ring_queue::NormVec;
/// let a = NormVec::from(vec![1, 2, 3]);
/// let b = NormVec::from(vec![4, 5, 6]);
/// assert_eq!(&a + &b, NormVec::from(vec![5, 7, 9]));
/// assert_eq!(&a * 2, NormVec::from(vec![2, 4, 6]));
/// assert_eq!(&a * &b, 32);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormVec<T>(Vec<T>);

impl<T> NormVec<T> {
    /// Creates a new empty vector.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends an element.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Copy + Mul<Output = T> + Sum> NormVec<T> {
    /// Returns the squared Euclidean norm, the sum of the squares of the
    /// elements.
    ///
    /// Comparisons use the squared norm directly; squaring is monotonic over
    /// the non-negative norms, so the ordering is the same and no square root
    /// is needed.
    pub fn norm_squared(&self) -> T {
        self.0.iter().map(|&x| x * x).sum()
    }
}

impl<T> From<Vec<T>> for NormVec<T> {
    fn from(elements: Vec<T>) -> Self {
        Self(elements)
    }
}

impl<T> FromIterator<T> for NormVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for NormVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for NormVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Elementwise addition.
///
/// # Panics
/// Panics if the vectors have different lengths.
impl<T: Copy + Add<Output = T>> Add for &NormVec<T> {
    type Output = NormVec<T>;

    fn add(self, rhs: Self) -> NormVec<T> {
        assert_eq!(self.len(), rhs.len(), "vector lengths differ");
        NormVec(
            self.0
                .iter()
                .zip(&rhs.0)
                .map(|(&a, &b)| a + b)
                .collect(),
        )
    }
}

/// Scalar multiplication.
impl<T: Copy + Mul<Output = T>> Mul<T> for &NormVec<T> {
    type Output = NormVec<T>;

    fn mul(self, scalar: T) -> NormVec<T> {
        NormVec(self.0.iter().map(|&a| a * scalar).collect())
    }
}

/// Dot product.
///
/// # Panics
/// Panics if the vectors have different lengths.
impl<T: Copy + Mul<Output = T> + Sum> Mul for &NormVec<T> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector lengths differ");
        self.0.iter().zip(&rhs.0).map(|(&a, &b)| a * b).sum()
    }
}

/// Ordering by Euclidean norm, not lexicographic element order.
///
/// Distinct vectors with equal norms are unordered: `partial_cmp` returns
/// `None` for them, keeping the ordering consistent with the elementwise
/// [`PartialEq`].
///
/// # Examples
/// ```
/// # use ring_queue::NormVec;
/// let small = NormVec::from(vec![2, 2]);
/// let large = NormVec::from(vec![1, 9]);
/// // Lexicographically [1, 9] would come first; by norm it is the larger.
/// assert!(small < large);
/// ```
impl<T: Copy + Mul<Output = T> + Sum + PartialOrd> PartialOrd for NormVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.norm_squared().partial_cmp(&other.norm_squared()) {
            Some(Ordering::Equal) if self != other => None,
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NormVec;

    #[test]
    fn push_and_index() {
        let mut v = NormVec::new();
        assert!(v.is_empty());
        v.push(1);
        v.push(2);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], 1);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), None);

        v[1] = 5;
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn copy_assign_is_independent() {
        let a = NormVec::from(vec![1, 2, 3]);
        let mut b = a.clone();
        b[0] = 9;
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[9, 2, 3]);
    }

    #[test]
    fn elementwise_add() {
        let a = NormVec::from(vec![1, 2, 3]);
        let b = NormVec::from(vec![10, 20, 30]);
        assert_eq!(&a + &b, NormVec::from(vec![11, 22, 33]));
    }

    #[test]
    #[should_panic = "vector lengths differ"]
    fn add_rejects_length_mismatch() {
        let _ = &NormVec::from(vec![1]) + &NormVec::from(vec![1, 2]);
    }

    #[test]
    fn scalar_and_dot_product() {
        let a = NormVec::from(vec![1.0, 2.0]);
        let b = NormVec::from(vec![3.0, 4.0]);
        assert_eq!(&a * 2.0, NormVec::from(vec![2.0, 4.0]));
        assert_eq!(&a * &b, 11.0);
    }

    #[test]
    fn ordering_is_by_norm_not_lexicographic() {
        let a = NormVec::from(vec![2, 2]); // norm² = 8
        let b = NormVec::from(vec![1, 9]); // norm² = 82
        assert!(a < b);
        assert!(b > a);

        // Equal norms, different elements: unordered but unequal.
        let c = NormVec::from(vec![3, 4]); // norm² = 25
        let d = NormVec::from(vec![5, 0]); // norm² = 25
        assert_ne!(c, d);
        assert_eq!(c.partial_cmp(&d), None);

        // Equal vectors compare equal.
        assert_eq!(
            c.partial_cmp(&c.clone()),
            Some(std::cmp::Ordering::Equal)
        );
    }
}
