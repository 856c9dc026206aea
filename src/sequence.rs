//! Core trait for lazy, pull-based sequences.
//!
//! A [`Sequence<O>`] is a suspended producer: every call to
//! [`pull`](Sequence::pull) does exactly the work needed for one element and
//! then suspends again, or reports that the sequence is complete.
//!
//! # Examples
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let mut counter = recurrence(1, |x: &u32| Some(x + 1));
//! assert_eq!(counter.pull().unwrap_yielded(), 1);
//! assert_eq!(counter.pull().unwrap_yielded(), 2);
//!
//! // Infinite sequences are bounded by the consumer.
//! let firsts: Vec<_> = counter.limit(3).into_seq_iter().collect();
//! assert_eq!(firsts, vec![3, 4, 5]);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{Limit, MapReturn, MapYield, limit, map_return, map_yield},
    iter::SeqIter,
    step::Step,
};

/// A lazy, forward-only producer of values of type `O`.
///
/// Each call to `pull()` either yields the next element or completes with a
/// final value. Once a sequence has completed, every further pull completes
/// again; a sequence never resumes after completion.
pub trait Sequence<O> {
    /// Type of the value the sequence completes with
    type Return;

    /// Produce the next element, or complete.
    fn pull(&mut self) -> Step<O, Self::Return>;

    /// Transform every element before it reaches the consumer.
    fn map_yield<O2, F>(self, f: F) -> MapYield<Self, F, O>
    where
        Self: Sized,
        F: FnMut(O) -> O2,
    {
        map_yield(f, self)
    }

    /// Transform the completion value.
    fn map_return<D2, F>(self, f: F) -> MapReturn<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Return) -> D2,
    {
        map_return(f, self)
    }

    /// Bound the sequence to at most `max` elements.
    ///
    /// Completes with `Some(ret)` if the inner sequence finished on its own and
    /// with `None` if the limit cut it short.
    fn limit(self, max: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        limit(max, self)
    }

    /// Erase the concrete type behind a `Box<dyn Sequence>`.
    fn boxed(self) -> Box<dyn Sequence<O, Return = Self::Return>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Drive the sequence as an [`Iterator`], keeping the completion value
    /// reachable through [`SeqIter::into_return`].
    fn into_seq_iter(self) -> SeqIter<O, Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

/// A sequence backed by a closure.
pub struct FromFn<F>(F);

/// Create a sequence from a closure that is called once per pull.
///
/// The closure is responsible for staying complete once it has returned
/// [`Step::Complete`].
///
/// ```rust
/// use accrue::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move || {
///     n += 1;
///     if n <= 2 { Step::Yielded(n) } else { Step::Complete("liftoff") }
/// });
/// assert_eq!(countdown.pull().unwrap_yielded(), 1);
/// assert_eq!(countdown.pull().unwrap_yielded(), 2);
/// assert_eq!(countdown.pull().unwrap_complete(), "liftoff");
/// ```
pub fn from_fn<O, D, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<O, D>,
{
    FromFn(f)
}

impl<O, D, F> Sequence<O> for FromFn<F>
where
    F: FnMut() -> Step<O, D>,
{
    type Return = D;

    fn pull(&mut self) -> Step<O, Self::Return> {
        (self.0)()
    }
}

/// A sequence that pulls from an [`Iterator`].
///
/// The iterator is fused, so the completion is sticky even for iterators that
/// would resume after returning `None`.
pub struct FromIter<I>(std::iter::Fuse<I>);

/// Lift any iterable into a [`Sequence`] completing with `()`.
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iter.into_iter().fuse())
}

impl<I> Sequence<I::Item> for FromIter<I>
where
    I: Iterator,
{
    type Return = ();

    fn pull(&mut self) -> Step<I::Item, Self::Return> {
        self.0.next().into()
    }
}

impl<O, S> Sequence<O> for Rc<RefCell<S>>
where
    S: Sequence<O>,
{
    type Return = S::Return;

    fn pull(&mut self) -> Step<O, Self::Return> {
        self.as_ref().borrow_mut().pull()
    }
}

impl<O, S> Sequence<O> for Option<S>
where
    S: Sequence<O>,
{
    type Return = Option<S::Return>;

    fn pull(&mut self) -> Step<O, Self::Return> {
        match self {
            Some(s) => s.pull().map_complete(Some),
            None => Step::Complete(None),
        }
    }
}

impl<O, L, R> Sequence<O> for either::Either<L, R>
where
    L: Sequence<O>,
    R: Sequence<O, Return = L::Return>,
{
    type Return = L::Return;

    fn pull(&mut self) -> Step<O, Self::Return> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }
}

impl<O, S> Sequence<O> for Box<S>
where
    S: Sequence<O> + ?Sized,
{
    type Return = S::Return;

    fn pull(&mut self) -> Step<O, Self::Return> {
        (**self).pull()
    }
}

impl<O, S> Sequence<O> for &'_ mut S
where
    S: Sequence<O> + ?Sized,
{
    type Return = S::Return;

    fn pull(&mut self) -> Step<O, Self::Return> {
        (**self).pull()
    }
}
