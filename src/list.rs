//! In-place helpers for lists.
//!
//! [`ListExt`] is implemented for slices, and therefore for `Vec<T>`, arrays
//! and anything else that dereferences to `[T]`:
//!
//! - [`swap_at`](ListExt::swap_at): bounds-checked swap of two positions
//! - [`shuffle`](ListExt::shuffle) / [`shuffle_with`](ListExt::shuffle_with):
//!   in-place Fisher–Yates shuffle (feature `rand`)
//! - [`read_only`](ListExt::read_only): a view without any mutation surface
//!
//! ```
//! use ironseq::ListExt;
//!
//! # fn main() -> ironseq::Result<()> {
//! let mut letters = vec!['a', 'b', 'c'];
//! letters.swap_at(0, 2)?;
//! assert_eq!(letters, vec!['c', 'b', 'a']);
//!
//! let view = letters.read_only();
//! assert_eq!(view.len(), 3);
//! assert_eq!(view[1], 'b');
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::validation::ensure_index;
use std::fmt;
use std::ops;
use std::slice;

/// In-place operations on a list.
pub trait ListExt<T> {
    /// Swap the elements at `i` and `j`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) naming `i` or `j` when
    /// that index is past the end. The list is left untouched.
    fn swap_at(&mut self, i: usize, j: usize) -> Result<()>;

    /// Shuffle the list in place with the thread-local generator.
    #[cfg(feature = "rand")]
    fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle the list in place with `rng`.
    ///
    /// Every permutation is equally likely given a uniform `rng`, and a
    /// seeded `rng` always produces the same permutation.
    #[cfg(feature = "rand")]
    fn shuffle_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R);

    /// A read-only view of the list.
    fn read_only(&self) -> ReadOnlyList<'_, T>;
}

impl<T> ListExt<T> for [T] {
    fn swap_at(&mut self, i: usize, j: usize) -> Result<()> {
        let i = ensure_index("i", i, self.len())?;
        let j = ensure_index("j", j, self.len())?;
        self.swap(i, j);
        Ok(())
    }

    #[cfg(feature = "rand")]
    fn shuffle_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.swap(i, j);
        }
        tracing::trace!(len = self.len(), "list shuffled");
    }

    fn read_only(&self) -> ReadOnlyList<'_, T> {
        ReadOnlyList { items: self }
    }
}

/// Borrowed, read-only view of a list.
pub struct ReadOnlyList<'a, T> {
    items: &'a [T],
}

impl<T> Clone for ReadOnlyList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyList<'_, T> {}

impl<'a, T> ReadOnlyList<'a, T> {
    /// Number of viewed elements.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view has no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// The first element, or `None` if empty.
    pub const fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// The last element, or `None` if empty.
    pub const fn last(&self) -> Option<&'a T> {
        self.items.last()
    }

    /// Iterate over the viewed elements.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    /// Clone the viewed elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> ops::Index<usize> for ReadOnlyList<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for ReadOnlyList<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &ReadOnlyList<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ReadOnlyList<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}
