//! Lazy windows over finite, indexable sources.
//!
//! A [`SliceView`] walks a contiguous range of an [`Indexed`] source without
//! copying it: element `lo + k` is read only when the `k + 1`-th element is
//! pulled. Bounds are clamped to the source, so every range is valid.
//!
//! # Reading a source that changes
//!
//! A view borrows its source and never mutates it. When the source has
//! interior mutability (`&RefCell<Vec<T>>`) the view reads whatever is stored
//! at the moment of each pull; there is no snapshot. If the source shrinks
//! below the next index the view ends early and stays ended. Such views only
//! give an upper bound in `size_hint` and are not `ExactSizeIterator`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::{Sequence, Step};

/// A finite source with random access by position.
pub trait Indexed {
    type Item;

    /// `false` when the length can change while a view is reading the source.
    const STABLE_LEN: bool = true;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Indexed for &'a [T] {
    type Item = &'a T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        let items: &'a [T] = *self;
        items.get(index)
    }
}

impl<'a, T, const N: usize> Indexed for &'a [T; N] {
    type Item = &'a T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        let items: &'a [T; N] = *self;
        items.as_slice().get(index)
    }
}

impl<'a, T> Indexed for &'a Vec<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        let items: &'a Vec<T> = *self;
        items.as_slice().get(index)
    }
}

impl<'a, T> Indexed for &'a VecDeque<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        let items: &'a VecDeque<T> = *self;
        items.get(index)
    }
}

/// Reads whatever the cell holds at each call; elements are cloned out.
impl<T: Clone> Indexed for &RefCell<Vec<T>> {
    type Item = T;

    const STABLE_LEN: bool = false;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.borrow().get(index).cloned()
    }
}

/// A source whose length cannot change while it is borrowed.
pub trait StableIndexed: Indexed {}

impl<T> StableIndexed for &[T] {}

impl<T, const N: usize> StableIndexed for &[T; N] {}

impl<T> StableIndexed for &Vec<T> {}

impl<T> StableIndexed for &VecDeque<T> {}

/// A lazy, forward-only view of `source[lo..hi]`.
///
/// Created via [`slice_view`] or [`lazy_slice`].
#[derive(Debug, Clone)]
pub struct SliceView<S> {
    source: S,
    next: usize,
    end: usize,
}

impl<S: Indexed> SliceView<S> {
    /// `lo` and `hi` must already be clamped to the source.
    fn clamped(source: S, lo: usize, hi: usize) -> Self {
        Self {
            source,
            next: lo,
            end: hi,
        }
    }

    /// Number of elements the view has yet to produce, unless the source
    /// shrinks first.
    pub fn remaining(&self) -> usize {
        self.end - self.next
    }
}

/// Create a lazy view of `source[lo..hi]`.
///
/// `lo` is clamped to `[0, len]` and `hi` to `[lo, len]`; out-of-range bounds
/// never fail, they just shrink the view, possibly to nothing.
///
/// ```rust
/// use accrue::prelude::*;
///
/// let digits = [1, 2, 3, 4, 5, 6, 7, 8];
/// assert_eq!(slice_view(&digits, 2, 5).copied().collect::<Vec<_>>(), vec![3, 4, 5]);
/// assert_eq!(slice_view(&digits, -3, 2).copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(slice_view(&digits, 10, 20).count(), 0);
/// ```
pub fn slice_view<S: Indexed>(source: S, lo: isize, hi: isize) -> SliceView<S> {
    let len = source.len();
    let clamp = |index: isize, floor: usize| match usize::try_from(index) {
        Ok(index) => index.clamp(floor, len),
        Err(_) => floor,
    };
    let start = clamp(lo, 0);
    let end = clamp(hi, start);
    if usize::try_from(lo) != Ok(start) || usize::try_from(hi) != Ok(end) {
        tracing::debug!(lo, hi, len, start, end, "clamped slice bounds");
    }
    SliceView::clamped(source, start, end)
}

/// Create a lazy view of `source` over a Rust range.
///
/// Inclusive, exclusive, and open-ended ranges are accepted and clamped the
/// same way as [`slice_view`].
///
/// ```rust
/// use accrue::prelude::*;
///
/// let items = vec![1, 2, 3, 4, 5];
/// assert_eq!(lazy_slice(&items, 1..=3).copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(lazy_slice(&items, 3..).copied().collect::<Vec<_>>(), vec![4, 5]);
/// ```
pub fn lazy_slice<S, R>(source: S, range: R) -> SliceView<S>
where
    S: Indexed,
    R: RangeBounds<usize>,
{
    let len = source.len();
    let lo = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let hi = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    let start = lo.min(len);
    let end = hi.clamp(start, len);
    if start != lo || end != hi {
        tracing::debug!(lo, hi, len, start, end, "clamped slice bounds");
    }
    SliceView::clamped(source, start, end)
}

impl<S: Indexed> Sequence<S::Item> for SliceView<S> {
    type Return = ();

    fn pull(&mut self) -> Step<S::Item, Self::Return> {
        if self.next >= self.end {
            return Step::Complete(());
        }
        match self.source.get(self.next) {
            Some(item) => {
                self.next += 1;
                if self.next == self.end {
                    tracing::trace!("slice view exhausted");
                }
                Step::Yielded(item)
            }
            None => {
                tracing::debug!(
                    index = self.next,
                    end = self.end,
                    "slice source shrank below the view, ending early"
                );
                self.next = self.end;
                Step::Complete(())
            }
        }
    }
}

impl<S: Indexed> Iterator for SliceView<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.pull().yielded_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        if S::STABLE_LEN {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

impl<S: StableIndexed> ExactSizeIterator for SliceView<S> {}

impl<S: Indexed> FusedIterator for SliceView<S> {}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn test_half_open_range() {
        let items: Vec<_> = slice_view(&FIVE, 1, 3).copied().collect();
        assert_eq!(items, vec![2, 3]);
    }

    #[test]
    fn test_inclusive_range() {
        let items: Vec<_> = lazy_slice(&FIVE, 1..=3).copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_start_past_end_is_empty() {
        let source = vec![0; 8];
        let mut view = slice_view(&source, 10, 12);
        assert_eq!(view.len(), 0);
        assert_eq!(view.next(), None);
    }

    #[test]
    fn test_reversed_bounds_are_empty() {
        assert_eq!(slice_view(&FIVE, 4, 1).count(), 0);
        assert_eq!(lazy_slice(&FIVE, 4..1).count(), 0);
    }

    #[test]
    fn test_view_reports_exact_length() {
        let mut view = slice_view(&FIVE[..], 0, 100);
        assert_eq!(view.len(), 5);
        view.next();
        assert_eq!(view.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_elements_are_read_on_pull() {
        let source = RefCell::new(vec![1, 2, 3, 4]);
        let mut view = slice_view(&source, 1, 4);

        assert_eq!(view.next(), Some(2));
        source.borrow_mut()[2] = 30;
        assert_eq!(view.next(), Some(30));
    }

    #[test]
    fn test_shrinking_source_ends_view_early() {
        let source = RefCell::new(vec!['a', 'b', 'c', 'd']);
        let mut view = lazy_slice(&source, ..);

        assert_eq!(view.next(), Some('a'));
        source.borrow_mut().truncate(2);
        assert_eq!(view.next(), Some('b'));
        assert_eq!(view.next(), None);

        source.borrow_mut().extend(['x', 'y']);
        assert_eq!(view.next(), None);
    }

    #[test]
    fn test_size_hint_of_shrinkable_source_has_no_lower_bound() {
        let source = RefCell::new(vec![1, 2, 3, 4]);
        let mut view = slice_view(&source, 0, 4);

        assert_eq!(view.next(), Some(1));
        assert_eq!(view.size_hint(), (0, Some(3)));

        source.borrow_mut().truncate(2);
        let (lower, upper) = view.size_hint();
        let rest: Vec<_> = view.collect();
        assert_eq!(rest, vec![2]);
        assert!(lower <= rest.len());
        assert!(upper.is_some_and(|upper| upper >= rest.len()));
    }

    #[test]
    fn test_vec_deque_source() {
        let source: VecDeque<_> = (1..=6).collect();
        let view: Vec<_> = lazy_slice(&source, 2..4).collect();
        assert_eq!(view, vec![&3, &4]);
    }

    #[test]
    fn test_views_are_independent() {
        let mut a = slice_view(&FIVE, 0, 3);
        let b = slice_view(&FIVE, 0, 3);
        a.next();
        assert_eq!(b.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(a.copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_pull_after_exhaustion_stays_complete() {
        let mut view = slice_view(&FIVE, 4, 5);
        assert_eq!(view.pull(), Step::Yielded(&5));
        assert_eq!(view.pull(), Step::Complete(()));
        assert_eq!(view.pull(), Step::Complete(()));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn view_matches_clamped_subslice(
                source in proptest::collection::vec(any::<u8>(), 0..40),
                lo in -20_isize..60,
                hi in -20_isize..60,
            ) {
                let n = source.len() as isize;
                let start = lo.clamp(0, n) as usize;
                let end = hi.clamp(start as isize, n) as usize;

                let view: Vec<u8> = slice_view(&source, lo, hi).copied().collect();
                prop_assert_eq!(view.as_slice(), &source[start..end]);
            }
        }
    }
}
