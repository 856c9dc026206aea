use crate::{Sequence, step::Step};

/// Bounds a possibly infinite sequence to a fixed number of elements.
///
/// Created via [`limit`] or [`Sequence::limit`]. Once `max` elements are out the
/// wrapped sequence is never pulled again.
pub struct Limit<S> {
    remaining: usize,
    seq: S,
}

/// Create a sequence that yields at most `max` elements of `seq`.
///
/// Completes with `Some(ret)` when `seq` finished within `max` elements, and with
/// `None` when the limit was reached first.
///
/// ```
/// use accrue::prelude::*;
///
/// let mut bounded = limit(2, recurrence(0, |x: &u64| Some(x + 1)));
/// assert_eq!(bounded.pull().unwrap_yielded(), 0);
/// assert_eq!(bounded.pull().unwrap_yielded(), 1);
/// assert_eq!(bounded.pull().unwrap_complete(), None);
/// ```
pub fn limit<S>(max: usize, seq: S) -> Limit<S> {
    Limit {
        remaining: max,
        seq,
    }
}

impl<S> Limit<S> {
    /// Number of elements that may still be pulled.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Unwrap the bounded sequence, which resumes where the limit stopped it.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<O, S> Sequence<O> for Limit<S>
where
    S: Sequence<O>,
{
    type Return = Option<S::Return>;

    fn pull(&mut self) -> Step<O, Self::Return> {
        if self.remaining == 0 {
            return Step::Complete(None);
        }
        match self.seq.pull() {
            Step::Yielded(o) => {
                self.remaining -= 1;
                Step::Yielded(o)
            }
            Step::Complete(r) => Step::Complete(Some(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{recurrence::recurrence, sequence::from_iter};

    #[test]
    fn test_limit_stops_pulling_inner_sequence() {
        let mut steps = 0;
        let naturals = recurrence(1_u32, |x: &u32| {
            steps += 1;
            Some(x + 1)
        });
        let values: Vec<_> = naturals.limit(4).into_seq_iter().collect();

        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_limit_reports_inner_completion() {
        let mut seq = limit(5, from_iter([1, 2]));
        assert_eq!(seq.pull(), Step::Yielded(1));
        assert_eq!(seq.pull(), Step::Yielded(2));
        assert_eq!(seq.pull(), Step::Complete(Some(())));
        assert_eq!(seq.remaining(), 3);
    }

    #[test]
    fn test_limit_of_zero_never_pulls() {
        let mut pulled = false;
        let inner = crate::sequence::from_fn(|| {
            pulled = true;
            Step::<i32, ()>::Yielded(1)
        });
        let mut seq = limit(0, inner);
        assert_eq!(seq.pull(), Step::Complete(None));
        drop(seq);
        assert!(!pulled);
    }

    #[test]
    fn test_limit_into_inner_resumes_where_it_stopped() {
        let mut seq = limit(2, from_iter(1..));
        seq.pull();
        seq.pull();
        assert!(seq.pull().is_complete());

        let mut rest = seq.into_inner();
        assert_eq!(rest.pull().unwrap_yielded(), 3);
    }
}
