//! Instrumented input sequences.
//!
//! - [`TestingSequence`] records how it is enumerated and panics when it is
//!   enumerated a second time.
//! - [`BreakingSequence`] panics as soon as anything is pulled from it.

use std::cell::Cell;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ProbeState {
    enumerations: Cell<usize>,
    pulls: Cell<usize>,
    finished: Cell<bool>,
}

/// Read-only handle on the counters of a [`TestingSequence`].
///
/// The probe stays valid after the sequence itself has been moved into an
/// operator.
#[derive(Clone, Debug)]
pub struct SequenceProbe {
    state: Rc<ProbeState>,
}

impl SequenceProbe {
    /// How many times the sequence was turned into an iterator.
    pub fn enumerations(&self) -> usize {
        self.state.enumerations.get()
    }

    /// How many elements were handed out.
    pub fn pulls(&self) -> usize {
        self.state.pulls.get()
    }

    /// Whether an iterator over the sequence ran to its end.
    pub fn finished(&self) -> bool {
        self.state.finished.get()
    }
}

/// A sequence that may be enumerated once.
///
/// Turning it into an iterator a second time, through a shared reference,
/// panics.
///
/// # Example
/// ```
/// use ironseq::SequenceExt;
/// use ironseq::testing::TestingSequence;
///
/// let source = TestingSequence::new(vec![1, 2, 3, 4]);
/// let probe = source.probe();
///
/// let firsts: Vec<_> = source.into_iter().take_every(2).unwrap().collect();
/// assert_eq!(firsts, vec![1, 3]);
/// assert_eq!(probe.enumerations(), 1);
/// assert!(probe.finished());
/// ```
pub struct TestingSequence<T> {
    items: Rc<[T]>,
    state: Rc<ProbeState>,
}

impl<T> TestingSequence<T> {
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        let items: Vec<T> = items.into();
        Self {
            items: items.into(),
            state: Rc::default(),
        }
    }

    /// A handle to observe how this sequence is consumed.
    pub fn probe(&self) -> SequenceProbe {
        SequenceProbe {
            state: Rc::clone(&self.state),
        }
    }

    fn start(&self) -> TestingIter<T> {
        let seen = self.state.enumerations.get();
        assert!(seen == 0, "sequence was enumerated more than once");
        self.state.enumerations.set(seen + 1);
        TestingIter {
            items: Rc::clone(&self.items),
            position: 0,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone> IntoIterator for TestingSequence<T> {
    type Item = T;
    type IntoIter = TestingIter<T>;

    fn into_iter(self) -> TestingIter<T> {
        self.start()
    }
}

impl<T: Clone> IntoIterator for &TestingSequence<T> {
    type Item = T;
    type IntoIter = TestingIter<T>;

    fn into_iter(self) -> TestingIter<T> {
        self.start()
    }
}

impl<T: fmt::Debug> fmt::Debug for TestingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestingSequence")
            .field("items", &self.items)
            .field("enumerations", &self.state.enumerations.get())
            .finish()
    }
}

/// Iterator over a [`TestingSequence`].
pub struct TestingIter<T> {
    items: Rc<[T]>,
    position: usize,
    state: Rc<ProbeState>,
}

impl<T: Clone> Iterator for TestingIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Some(item) = self.items.get(self.position) else {
            self.state.finished.set(true);
            return None;
        };
        self.position += 1;
        self.state.pulls.set(self.state.pulls.get() + 1);
        Some(item.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.position;
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for TestingIter<T> {}

impl<T: Clone> FusedIterator for TestingIter<T> {}

impl<T> fmt::Debug for TestingIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestingIter")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .finish()
    }
}

/// A sequence that panics when pulled.
///
/// Building a lazy operator over it must not panic.
pub struct BreakingSequence<T>(PhantomData<fn() -> T>);

impl<T> BreakingSequence<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for BreakingSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for BreakingSequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        panic!("a lazy operator pulled from its source before being pulled itself");
    }
}

impl<T> fmt::Debug for BreakingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BreakingSequence")
    }
}

/// Run `build` over a [`BreakingSequence`] and drop whatever it returns.
///
/// # Panics
/// If `build` pulls from the sequence it was given.
pub fn assert_deferred<T, R>(build: impl FnOnce(BreakingSequence<T>) -> R) {
    drop(build(BreakingSequence::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_counts_pulls() {
        let seq = TestingSequence::new([1, 2, 3]);
        let probe = seq.probe();
        let mut it = (&seq).into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(probe.pulls(), 1);
        assert!(!probe.finished());
        assert_eq!(it.by_ref().count(), 2);
        assert!(probe.finished());
    }

    #[test]
    #[should_panic(expected = "enumerated more than once")]
    fn second_enumeration_panics() {
        let seq = TestingSequence::new(vec!['a']);
        let _first = (&seq).into_iter();
        let _second = (&seq).into_iter();
    }

    #[test]
    #[should_panic(expected = "pulled from its source")]
    fn breaking_sequence_panics_on_pull() {
        let mut seq = BreakingSequence::<u8>::new();
        let _ = seq.next();
    }
}
