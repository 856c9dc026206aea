//! Sequences generated from a seed and a step function.
//!
//! [`recurrence`] yields `seed`, `step(&seed)`, `step(&step(&seed))`, and so on
//! until the step function returns `None`. [`try_recurrence`] does the same
//! with a fallible step function and hands the first error to the consumer.
//!
//! Both are explicit state machines: nothing is computed at construction, and
//! the step function runs only when the element it produces is pulled.
//!
//! # Examples
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let up_to_five: Vec<_> = recurrence(1, |x: &i32| if *x < 5 { Some(x + 1) } else { None }).collect();
//! assert_eq!(up_to_five, vec![1, 2, 3, 4, 5]);
//!
//! // Powers of two are unbounded; the consumer decides when to stop.
//! let powers: Vec<_> = recurrence(1_u64, |x: &u64| x.checked_mul(2)).take(4).collect();
//! assert_eq!(powers, vec![1, 2, 4, 8]);
//! ```

use std::convert::Infallible;
use std::iter::FusedIterator;

use crate::{Sequence, Step};

enum State<T> {
    /// The seed, not yet handed out.
    Seed(T),
    /// The last element handed out; the step has not been applied to it yet.
    Current(T),
    Exhausted,
    /// A step call failed. Pulling again is a caller error.
    Failed,
}

impl<T: Clone> State<T> {
    fn new(seed: Option<T>) -> Self {
        match seed {
            Some(seed) => State::Seed(seed),
            None => State::Exhausted,
        }
    }

    fn advance<E, F>(&mut self, step: F) -> Step<T, Result<(), E>>
    where
        F: FnOnce(&T) -> Result<Option<T>, E>,
    {
        match std::mem::replace(self, State::Exhausted) {
            State::Seed(seed) => {
                *self = State::Current(seed.clone());
                Step::Yielded(seed)
            }
            State::Current(prev) => match step(&prev) {
                Ok(Some(next)) => {
                    *self = State::Current(next.clone());
                    Step::Yielded(next)
                }
                Ok(None) => {
                    tracing::trace!("recurrence exhausted");
                    Step::Complete(Ok(()))
                }
                Err(e) => {
                    *self = State::Failed;
                    Step::Complete(Err(e))
                }
            },
            State::Exhausted => Step::Complete(Ok(())),
            State::Failed => {
                tracing::warn!("recurrence pulled again after its step function failed");
                *self = State::Failed;
                Step::Complete(Ok(()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            State::Seed(_) => (1, None),
            State::Current(_) => (0, None),
            State::Exhausted | State::Failed => (0, Some(0)),
        }
    }
}

/// A sequence produced by repeatedly applying a step function to a seed.
///
/// Created via [`recurrence`]. Elements are handed out by clone because the
/// sequence keeps the last element to feed the next step.
pub struct Recurrence<T, F> {
    state: State<T>,
    step: F,
}

/// Build the sequence `seed, step(&seed), step(&step(&seed)), ...`.
///
/// The sequence ends right before the first `None` returned by `step`; the
/// `None` itself is never yielded. A `None` seed gives an empty sequence.
///
/// `step` runs lazily: applying it for the k-th time happens when element
/// `k + 1` is pulled. If `step` never returns `None` the sequence is infinite
/// and must be bounded by the consumer, for example with
/// [`Iterator::take`] or [`Sequence::limit`].
///
/// ```rust
/// use accrue::prelude::*;
///
/// let nothing: Vec<i32> = recurrence(None, |x: &i32| Some(x + 1)).collect();
/// assert!(nothing.is_empty());
/// ```
pub fn recurrence<T, F>(seed: impl Into<Option<T>>, step: F) -> Recurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    Recurrence {
        state: State::new(seed.into()),
        step,
    }
}

impl<T, F> Sequence<T> for Recurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Return = ();

    fn pull(&mut self) -> Step<T, Self::Return> {
        let step = &mut self.step;
        self.state
            .advance(|prev| Ok::<_, Infallible>(step(prev)))
            .map_complete(|done| match done {
                Ok(()) => (),
                Err(never) => match never {},
            })
    }
}

impl<T, F> Iterator for Recurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull().yielded_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.state.size_hint()
    }
}

impl<T, F> FusedIterator for Recurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
}

/// A recurrence whose step function can fail.
///
/// Created via [`try_recurrence`].
pub struct TryRecurrence<T, F> {
    state: State<T>,
    step: F,
}

/// Build a recurrence from a fallible step function.
///
/// The first error is delivered at the pull that triggered it: as
/// `Some(Err(e))` when iterating, or as `Step::Complete(Err(e))` when pulling.
/// Errors are never swallowed. Pulling again after an error is a caller error;
/// such pulls report the end of the sequence.
///
/// ```rust
/// use accrue::prelude::*;
///
/// let halves: Vec<_> = try_recurrence(12_u32, |x: &u32| match x {
///     1 => Ok(None),
///     x if x % 2 == 0 => Ok(Some(x / 2)),
///     x => Err(format!("{x} is odd")),
/// })
/// .collect();
///
/// assert_eq!(halves, vec![Ok(12), Ok(6), Ok(3), Err("3 is odd".to_string())]);
/// ```
pub fn try_recurrence<T, E, F>(seed: impl Into<Option<T>>, step: F) -> TryRecurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<T>, E>,
{
    TryRecurrence {
        state: State::new(seed.into()),
        step,
    }
}

impl<T, E, F> Sequence<T> for TryRecurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<T>, E>,
{
    type Return = Result<(), E>;

    fn pull(&mut self) -> Step<T, Self::Return> {
        self.state.advance(&mut self.step)
    }
}

impl<T, E, F> Iterator for TryRecurrence<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<T>, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose_item()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.state.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn up_to_five(x: &i32) -> Option<i32> {
        if *x < 5 { Some(x + 1) } else { None }
    }

    #[test]
    fn test_recurrence_stops_before_none() {
        let values: Vec<_> = recurrence(1, up_to_five).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_none_seed_is_empty() {
        let mut seq = recurrence(None, up_to_five);
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_seed_only_when_step_ends_immediately() {
        let values: Vec<_> = recurrence("only".to_string(), |_: &String| None).collect();
        assert_eq!(values, vec!["only".to_string()]);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let calls = Cell::new(0);
        let mut seq = recurrence(1, |x: &i32| {
            calls.set(calls.get() + 1);
            up_to_five(x)
        });
        assert_eq!(seq.by_ref().count(), 5);
        assert_eq!(seq.pull(), Step::Complete(()));
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_step_runs_only_when_pulled() {
        let calls = Cell::new(0);
        let mut seq = recurrence(0_u64, |x: &u64| {
            calls.set(calls.get() + 1);
            Some(x + 1)
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(seq.next(), Some(0));
        assert_eq!(calls.get(), 0);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(calls.get(), 1);

        let _: Vec<_> = seq.by_ref().take(3).collect();
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_constructing_twice_gives_independent_sequences() {
        let mut a = recurrence(1, up_to_five);
        let b = recurrence(1, up_to_five);

        assert_eq!(a.next(), Some(1));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(a.collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_try_recurrence_surfaces_error_at_failing_pull() {
        let mut seq = try_recurrence(1, |x: &i32| if *x < 3 { Ok(Some(x + 1)) } else { Err("overflow") });

        assert_eq!(seq.pull(), Step::Yielded(1));
        assert_eq!(seq.pull(), Step::Yielded(2));
        assert_eq!(seq.pull(), Step::Yielded(3));
        assert_eq!(seq.pull(), Step::Complete(Err("overflow")));
    }

    #[test]
    fn test_try_recurrence_pull_after_error_ends() {
        let calls = Cell::new(0);
        let mut seq = try_recurrence(1, |_: &i32| {
            calls.set(calls.get() + 1);
            Err::<Option<i32>, _>("broken")
        });

        assert_eq!(seq.next(), Some(Ok(1)));
        assert_eq!(seq.next(), Some(Err("broken")));
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_try_recurrence_clean_end() {
        let values: Result<Vec<_>, &str> =
            try_recurrence(3, |x: &i32| Ok(if *x > 0 { Some(x - 1) } else { None })).collect();
        assert_eq!(values, Ok(vec![3, 2, 1, 0]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prefix_matches_iterated_step(seed in -1000_i64..1000, k in 0_usize..50, delta in -7_i64..7) {
                let step = |x: &i64| Some(x + delta);
                let taken: Vec<_> = recurrence(seed, step).take(k).collect();

                let mut expected = Vec::with_capacity(k);
                let mut cur = seed;
                for _ in 0..k {
                    expected.push(cur);
                    cur += delta;
                }
                prop_assert_eq!(taken, expected);
            }

            #[test]
            fn terminates_right_after_first_none(seed in 0_u32..100, bound in 0_u32..200) {
                let values: Vec<_> = recurrence(seed, |x: &u32| (*x < bound).then(|| x + 1)).collect();
                let expected: Vec<_> = (seed..=seed.max(bound)).collect();
                prop_assert_eq!(values, expected);
            }
        }
    }
}
