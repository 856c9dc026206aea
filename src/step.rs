/// Outcome of pulling a [`Sequence`](crate::Sequence) once: either the next
/// element, or the value the sequence completed with.
///
/// A sequence that has returned `Complete` keeps returning `Complete` on every
/// further pull.
///
/// # Examples
///
/// ```rust
/// use accrue::Step;
///
/// let pulled: Step<i32, ()> = Step::Yielded(42);
/// let finished: Step<i32, ()> = Step::Complete(());
///
/// assert_eq!(pulled.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// The sequence produced an element and is suspended until the next pull.
    Yielded(Y),
    /// The sequence is exhausted and carries its completion value.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding the completion value.
    ///
    /// ```rust
    /// use accrue::Step;
    ///
    /// assert_eq!(Step::<i32, &str>::Yielded(1).yielded_value(), Some(1));
    /// assert_eq!(Step::<i32, &str>::Complete("done").yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts from `Step<Y, D>` to `Option<D>`, discarding the element.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the completion value, leaving an element untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Maps the element, leaving a completion value untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Borrows the contents of the step.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the element, panicking with `msg` if the step is `Complete`.
    #[inline]
    #[track_caller]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the completion value, panicking with `msg` if the step is `Yielded`.
    #[inline]
    #[track_caller]
    pub fn expect_complete(self, msg: &str) -> D {
        match self {
            Step::Yielded(_) => panic!("{}", msg),
            Step::Complete(d) => d,
        }
    }

    /// Returns the element.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        self.expect_yielded("called `Step::unwrap_yielded()` on a `Complete` value")
    }

    /// Returns the completion value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> D {
        self.expect_complete("called `Step::unwrap_complete()` on a `Yielded` value")
    }
}

impl<Y, E> Step<Y, Result<(), E>> {
    /// Folds a fallible completion into an iterator item.
    ///
    /// `Yielded(y)` becomes `Some(Ok(y))`, `Complete(Err(e))` becomes
    /// `Some(Err(e))` and a clean completion becomes `None`.
    #[inline]
    pub fn transpose_item(self) -> Option<Result<Y, E>> {
        match self {
            Step::Yielded(y) => Some(Ok(y)),
            Step::Complete(Err(e)) => Some(Err(e)),
            Step::Complete(Ok(())) => None,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y, ()> {
    /// `None` is read as exhaustion.
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
