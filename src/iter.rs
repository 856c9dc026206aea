//! Iterator adapter for sequences.
//!
//! [`SeqIter`] drives any [`Sequence`] through the standard [`Iterator`]
//! interface while keeping the completion value around, so callers can use
//! `for` loops and iterator adapters and still inspect how the sequence ended.
//!
//! # Examples
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let mut iter = from_iter([1, 2, 3]).limit(2).into_seq_iter();
//! let values: Vec<_> = iter.by_ref().collect();
//! assert_eq!(values, vec![1, 2]);
//! // The limit cut the sequence short.
//! assert_eq!(iter.into_return(), Some(None));
//! ```

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::{Sequence, Step};

/// Iterator adapter for [`Sequence<O>`].
///
/// Pulls the wrapped sequence on every `next()` until it completes, then
/// stores the completion value and keeps returning `None`.
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so iterating by
/// reference leaves the completion value reachable afterwards.
pub struct SeqIter<O, S>
where
    S: Sequence<O>,
{
    state: SeqIterState<S, S::Return>,
    _phantom: PhantomData<fn() -> O>,
}

enum SeqIterState<S, R> {
    Active(S),
    Complete(R),
    Invalid,
}

impl<S, R> SeqIterState<S, R> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, SeqIterState::Invalid)
    }
}

impl<O, S> SeqIter<O, S>
where
    S: Sequence<O>,
{
    /// Create a new iterator from a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
            _phantom: PhantomData,
        }
    }

    /// Check if the wrapped sequence has completed.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SeqIterState::Complete(_))
    }

    /// Consume the iterator and return the completion value.
    ///
    /// Returns `None` if the sequence hasn't completed yet.
    pub fn into_return(self) -> Option<S::Return> {
        match self.state {
            SeqIterState::Complete(ret) => Some(ret),
            _ => None,
        }
    }

    /// Get a reference to the completion value if complete.
    pub fn return_value(&self) -> Option<&S::Return> {
        match &self.state {
            SeqIterState::Complete(ret) => Some(ret),
            _ => None,
        }
    }
}

impl<O, S> Iterator for SeqIter<O, S>
where
    S: Sequence<O>,
{
    type Item = O;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            SeqIterState::Active(mut seq) => match seq.pull() {
                Step::Yielded(output) => {
                    self.state = SeqIterState::Active(seq);
                    Some(output)
                }
                Step::Complete(ret) => {
                    self.state = SeqIterState::Complete(ret);
                    None
                }
            },
            SeqIterState::Complete(ret) => {
                self.state = SeqIterState::Complete(ret);
                None
            }
            // only reachable if `pull` panicked during a previous call
            SeqIterState::Invalid => None,
        }
    }
}

impl<O, S> FusedIterator for SeqIter<O, S> where S: Sequence<O> {}
