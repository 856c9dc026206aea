//! Membership filters over a list of candidates.
//!
//! Containment is `==` against each element seen through [`Borrow`], so any
//! `IntoIterator` works: arrays, `Vec`s, sets, and borrowed forms of them.
//!
//! ```rust
//! use accrue::{MembershipExt, whitelist};
//!
//! assert_eq!(whitelist(1, [1, 2, 3]), Some(1));
//! assert_eq!(whitelist(1, [2, 3]), None);
//! assert!("b".is_in(["a", "b"]));
//! ```

use std::borrow::Borrow;

/// Whether `list` contains `value`.
pub fn is_in<T, I>(value: &T, list: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    list.into_iter().any(|candidate| Borrow::<T>::borrow(&candidate) == value)
}

/// Whether `list` does not contain `value`.
pub fn is_not_in<T, I>(value: &T, list: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    !is_in(value, list)
}

/// `Some(value)` if `allowed` contains it.
pub fn whitelist<T, I>(value: T, allowed: I) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    is_in(&value, allowed).then_some(value)
}

/// `Some(value)` unless `denied` contains it.
pub fn blacklist<T, I>(value: T, denied: I) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    is_not_in(&value, denied).then_some(value)
}

/// Method forms of the membership filters, available on every sized value.
pub trait MembershipExt: PartialEq + Sized {
    /// Method form of [`is_in`](crate::is_in).
    fn is_in<I>(&self, list: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        is_in(self, list)
    }

    /// Method form of [`is_not_in`](crate::is_not_in).
    fn is_not_in<I>(&self, list: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        is_not_in(self, list)
    }

    /// Method form of [`whitelist`](crate::whitelist).
    fn whitelist<I>(self, allowed: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        whitelist(self, allowed)
    }

    /// Method form of [`blacklist`](crate::blacklist).
    fn blacklist<I>(self, denied: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        blacklist(self, denied)
    }
}

impl<T: PartialEq> MembershipExt for T {}
