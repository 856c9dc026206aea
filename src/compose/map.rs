//! Transforming sequence elements and completion values.
//!
//! This module provides [`MapYield`] and [`MapReturn`] for adapting a sequence
//! to different types. Both are lazy: the mapping function runs only when the
//! wrapped sequence produces something.

use std::marker::PhantomData;

use crate::{Sequence, step::Step};

/// Transforms elements produced by the wrapped sequence.
pub struct MapYield<S, F, O1> {
    f: F,
    seq: S,
    _phantom: PhantomData<O1>,
}

/// Create a sequence that transforms every element of `seq`.
///
/// # Examples
///
/// ```
/// use accrue::prelude::*;
///
/// let mut labels = map_yield(|n: u32| format!("#{n}"), recurrence(1, |n: &u32| Some(n + 1)));
/// assert_eq!(labels.pull().unwrap_yielded(), "#1");
/// assert_eq!(labels.pull().unwrap_yielded(), "#2");
/// ```
pub fn map_yield<O1, O2, S, F>(f: F, seq: S) -> MapYield<S, F, O1>
where
    S: Sequence<O1>,
    F: FnMut(O1) -> O2,
{
    MapYield {
        f,
        seq,
        _phantom: PhantomData,
    }
}

impl<O1, O2, S, F> Sequence<O2> for MapYield<S, F, O1>
where
    S: Sequence<O1>,
    F: FnMut(O1) -> O2,
{
    type Return = S::Return;

    fn pull(&mut self) -> Step<O2, Self::Return> {
        match self.seq.pull() {
            Step::Yielded(o1) => Step::Yielded((self.f)(o1)),
            Step::Complete(r) => Step::Complete(r),
        }
    }
}

/// Transforms the completion value of the wrapped sequence.
///
/// Applied only when the sequence completes, never to elements.
pub struct MapReturn<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that transforms the completion value of `seq`.
///
/// ```
/// use accrue::prelude::*;
///
/// let mut seq = map_return(|()| "exhausted", from_iter([1]));
/// assert_eq!(seq.pull().unwrap_yielded(), 1);
/// assert_eq!(seq.pull().unwrap_complete(), "exhausted");
/// ```
pub fn map_return<S, F>(f: F, seq: S) -> MapReturn<S, F> {
    MapReturn { f, seq }
}

impl<O, D1, D2, S, F> Sequence<O> for MapReturn<S, F>
where
    S: Sequence<O, Return = D1>,
    F: FnMut(D1) -> D2,
{
    type Return = D2;

    fn pull(&mut self) -> Step<O, Self::Return> {
        match self.seq.pull() {
            Step::Yielded(o) => Step::Yielded(o),
            Step::Complete(r1) => Step::Complete((self.f)(r1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{recurrence::try_recurrence, sequence::from_iter};

    #[test]
    fn test_map_yield_preserves_return() {
        let mut mapped = map_yield(|y: i32| y as f64, from_iter([5]).map_return(|()| 7));

        assert_eq!(mapped.pull().unwrap_yielded(), 5.0);
        assert_eq!(mapped.pull().unwrap_complete(), 7);
    }

    #[test]
    fn test_map_yield_runs_once_per_pulled_element() {
        let mut calls = 0;
        let mut mapped = from_iter(1..).map_yield(|x: i32| {
            calls += 1;
            x * 10
        });

        assert_eq!(mapped.pull().unwrap_yielded(), 10);
        assert_eq!(mapped.pull().unwrap_yielded(), 20);
        drop(mapped);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_map_return_sees_step_error() {
        let seq = try_recurrence(1, |x: &i32| if *x < 2 { Ok(Some(x + 1)) } else { Err("too big") });
        let mut mapped = map_return(
            |r: Result<(), &str>| r.map_err(|e| format!("recurrence failed: {e}")),
            seq,
        );

        assert_eq!(mapped.pull().unwrap_yielded(), 1);
        assert_eq!(mapped.pull().unwrap_yielded(), 2);
        assert_eq!(
            mapped.pull().unwrap_complete(),
            Err("recurrence failed: too big".to_string())
        );
    }

    #[test]
    fn test_yield_and_return_maps_combined() {
        let mut mapped = map_return(
            |()| "done",
            map_yield(|y: &str| y.len(), from_iter(["a", "bcd"])),
        );

        assert_eq!(mapped.pull().unwrap_yielded(), 1);
        assert_eq!(mapped.pull().unwrap_yielded(), 3);
        assert_eq!(mapped.pull().unwrap_complete(), "done");
    }
}
