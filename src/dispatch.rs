//! Conditional application: apply a function only when there is something to
//! apply it to, or only when a named operation exists.

use std::collections::HashMap;
use std::fmt;

/// Apply `f` to a present value; absence stays absent.
///
/// ```rust
/// use accrue::maybe;
///
/// assert_eq!(maybe(Some(2), |x| x * 10), Some(20));
/// assert_eq!(maybe(None::<i32>, |x| x * 10), None);
/// ```
pub fn maybe<T, U, F>(value: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    value.map(f)
}

type Responder<T, R> = Box<dyn Fn(&T) -> R>;

/// A table of named operations over values of type `T`.
///
/// Stands in for "does this value respond to that method": register the
/// operations by name, then [`send`](Responders::send) by name.
///
/// ```rust
/// use accrue::{Responders, send_if_responds};
///
/// let table = Responders::<str, i64>::new()
///     .with("to_i", |s: &str| s.trim().parse().unwrap_or(0))
///     .with("len", |s: &str| s.chars().count() as i64);
///
/// assert_eq!(send_if_responds("123", &table, "to_i"), Some(123));
/// assert_eq!(send_if_responds("123", &table, "foo"), None);
/// ```
pub struct Responders<T: ?Sized, R> {
    table: HashMap<String, Responder<T, R>>,
}

impl<T: ?Sized, R> Responders<T, R> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register `f` under `name`, replacing any earlier registration.
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> R + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Register `f` under `name` in place, replacing any earlier registration.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&T) -> R + 'static,
    {
        self.table.insert(name.into(), Box::new(f));
    }

    /// Whether an operation is registered under `name`.
    pub fn responds_to(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Call the operation registered under `name`, if any.
    pub fn send(&self, value: &T, name: &str) -> Option<R> {
        match self.table.get(name) {
            Some(responder) => Some(responder(value)),
            None => {
                tracing::trace!(name, "no responder registered");
                None
            }
        }
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl<T: ?Sized, R> Default for Responders<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, R> fmt::Debug for Responders<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Responders").field("names", &names).finish()
    }
}

/// Invoke `name` on `value` if `table` has it, `None` otherwise.
pub fn send_if_responds<T: ?Sized, R>(value: &T, table: &Responders<T, R>, name: &str) -> Option<R> {
    table.send(value, name)
}
