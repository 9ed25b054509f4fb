//! Key-based ordering and equality comparers.
//!
//! Operators that order or match elements accept a comparer value. The
//! default variant of each operator uses [`Natural`] (for ordering) or
//! [`DefaultEquality`] (for matching); the `_with` variant takes any value
//! implementing [`Comparer`] or [`EqualityComparer`].
//!
//! Ordering comparers compose:
//!
//! ```
//! use ironseq::comparer::{Comparer, KeyComparer};
//!
//! // by length descending, then alphabetically
//! let cmp = KeyComparer::new(|s: &&str| s.len())
//!     .reversed()
//!     .then(KeyComparer::new(|s: &&str| s.to_string()));
//!
//! let mut words = vec!["pear", "fig", "apple", "kiwi"];
//! words.sort_by(|a, b| cmp.compare(a, b));
//! assert_eq!(words, vec!["apple", "kiwi", "pear", "fig"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

/// A total ordering over `T`.
pub trait Comparer<T: ?Sized> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// An equality relation over `T`, with a hash consistent with it.
///
/// Implementations must guarantee that `equals(a, b)` implies
/// `hash_of(a) == hash_of(b)`.
pub trait EqualityComparer<T: ?Sized> {
    /// Whether `a` and `b` are considered equal.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Hash of `value`.
    fn hash_of(&self, value: &T) -> u64;
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &E {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        (**self).hash_of(value)
    }
}

/// Adds `reversed()` and `then()` to a comparer type.
macro_rules! impl_combinators {
    ($name:ident < $($p:ident),* >) => {
        impl<$($p),*> $name<$($p),*> {
            /// Invert this ordering.
            #[must_use]
            pub const fn reversed(self) -> Reversed<Self> {
                Reversed(self)
            }

            /// Break ties of this ordering with `next`.
            #[must_use]
            pub const fn then<N>(self, next: N) -> ThenBy<Self, N> {
                ThenBy { first: self, next }
            }
        }
    };
}

/// The natural (`Ord`) ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl Natural {
    /// Invert the natural ordering.
    #[must_use]
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Break ties of the natural ordering with `next`.
    #[must_use]
    pub const fn then<N>(self, next: N) -> ThenBy<Self, N> {
        ThenBy { first: self, next }
    }
}

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by a key, using `C` to order the keys.
#[derive(Clone, Copy, Debug)]
pub struct KeyComparer<F, C = Natural> {
    key: F,
    inner: C,
}

impl<F> KeyComparer<F, Natural> {
    /// Compare by `key` using the key type's natural ordering.
    pub const fn new(key: F) -> Self {
        Self {
            key,
            inner: Natural,
        }
    }
}

impl<F, C> KeyComparer<F, C> {
    /// Compare by `key` using `inner` to order the keys.
    pub const fn with(key: F, inner: C) -> Self {
        Self { key, inner }
    }
}

impl_combinators!(KeyComparer<F, C>);

impl<T, K, F, C> Comparer<T> for KeyComparer<F, C>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(&(self.key)(a), &(self.key)(b))
    }
}

/// Shortcut for [`KeyComparer::new`].
pub const fn compare_by_key<F>(key: F) -> KeyComparer<F> {
    KeyComparer::new(key)
}

/// Wraps a raw comparison function.
#[derive(Clone, Copy, Debug)]
pub struct FnComparer<F>(F);

impl<F> FnComparer<F> {
    /// Use `f` as the ordering.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl_combinators!(FnComparer<F>);

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for FnComparer<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// The inverse of the wrapped ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Invert `inner`.
    pub const fn new(inner: C) -> Self {
        Self(inner)
    }

    /// Undo the inversion.
    pub fn into_inner(self) -> C {
        self.0
    }

    /// Break ties of this ordering with `next`.
    #[must_use]
    pub const fn then<N>(self, next: N) -> ThenBy<Self, N> {
        ThenBy { first: self, next }
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Lexicographic composition: `first`, and `next` on ties.
#[derive(Clone, Copy, Debug)]
pub struct ThenBy<A, B> {
    first: A,
    next: B,
}

impl_combinators!(ThenBy<A, B>);

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for ThenBy<A, B> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

/// Equality through `Eq` and `Hash`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash_of(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Matches elements by a key, using `E` to match the keys.
#[derive(Clone, Copy, Debug)]
pub struct KeyEqualityComparer<F, E = DefaultEquality> {
    key: F,
    inner: E,
}

impl<F> KeyEqualityComparer<F, DefaultEquality> {
    /// Match by `key` using the key type's `Eq` and `Hash`.
    pub const fn new(key: F) -> Self {
        Self {
            key,
            inner: DefaultEquality,
        }
    }
}

impl<F, E> KeyEqualityComparer<F, E> {
    /// Match by `key` using `inner` to match the keys.
    pub const fn with(key: F, inner: E) -> Self {
        Self { key, inner }
    }
}

impl<T, K, F, E> EqualityComparer<T> for KeyEqualityComparer<F, E>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    E: EqualityComparer<K>,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self.inner.equals(&(self.key)(a), &(self.key)(b))
    }

    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        self.inner.hash_of(&(self.key)(value))
    }
}

/// Shortcut for [`KeyEqualityComparer::new`].
pub const fn equate_by_key<F>(key: F) -> KeyEqualityComparer<F> {
    KeyEqualityComparer::new(key)
}

/// Wraps a raw equality function and a matching hash function.
#[derive(Clone, Copy, Debug)]
pub struct FnEqualityComparer<E, H> {
    eq: E,
    hash: H,
}

impl<E, H> FnEqualityComparer<E, H> {
    /// Use `eq` for equality and `hash` for hashing.
    pub const fn new(eq: E, hash: H) -> Self {
        Self { eq, hash }
    }
}

impl<T, E, H> EqualityComparer<T> for FnEqualityComparer<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// A set of values under a caller-supplied equality.
///
/// Buckets values by [`EqualityComparer::hash_of`] and resolves collisions
/// with [`EqualityComparer::equals`].
#[derive(Debug, Clone)]
pub(crate) struct ComparerSet<K, E> {
    buckets: HashMap<u64, Vec<K>>,
    eq: E,
}

impl<K, E: EqualityComparer<K>> ComparerSet<K, E> {
    pub(crate) fn new(eq: E) -> Self {
        Self {
            buckets: HashMap::new(),
            eq,
        }
    }

    /// Insert `value`; returns `false` if an equal value was already present.
    pub(crate) fn insert(&mut self, value: K) -> bool {
        let bucket = self.buckets.entry(self.eq.hash_of(&value)).or_default();
        if bucket.iter().any(|k| self.eq.equals(k, &value)) {
            return false;
        }
        bucket.push(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reversed() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.reversed().compare(&1, &2), Ordering::Greater);
        assert_eq!(Reversed::new(Natural).into_inner(), Natural);
    }

    #[test]
    fn then_breaks_ties_only() {
        let cmp = compare_by_key(|p: &(u8, u8)| p.0).then(compare_by_key(|p: &(u8, u8)| p.1));
        assert_eq!(cmp.compare(&(1, 9), &(2, 0)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 9), &(1, 0)), Ordering::Greater);
        assert_eq!(cmp.compare(&(1, 1), &(1, 1)), Ordering::Equal);
    }

    #[test]
    fn set_dedupes_through_comparer() {
        let eq = equate_by_key(|s: &String| s.to_lowercase());
        let mut set = ComparerSet::new(eq);
        assert!(set.insert("Apple".to_string()));
        assert!(!set.insert("APPLE".to_string()));
        assert!(set.insert("pear".to_string()));
    }

    #[test]
    fn colliding_hashes_fall_back_to_equals() {
        let eq = FnEqualityComparer::new(|a: &i32, b: &i32| a == b, |_: &i32| 0u64);
        let mut set = ComparerSet::new(eq);
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(1));
    }
}
