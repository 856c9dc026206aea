//! Presence and truthiness of everyday values.
//!
//! [`Presence`] separates "semantically empty" from "has content": `None`,
//! `false`, whitespace-only strings and empty collections are blank.
//! [`Truthy`] is narrower: only absence (`None`, JSON `null`) and `false` are
//! falsy, so an empty string is blank but still truthy.
//!
//! ```rust
//! use accrue::{Presence, Truthy};
//!
//! assert!("  \t \n".is_blank());
//! assert_eq!("a".presence(), Some("a"));
//! assert!(Vec::<i32>::new().is_blank());
//! assert!(String::new().to_bool());
//! assert!(!None::<i32>.to_bool());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::record::{Record, Value};

/// Blank versus present, for values with a notion of emptiness.
pub trait Presence {
    /// Whether the value is semantically empty.
    fn is_blank(&self) -> bool;

    /// The negation of [`is_blank`](Presence::is_blank).
    fn is_present(&self) -> bool {
        !self.is_blank()
    }

    /// `Some(self)` if present, `None` if blank.
    fn presence(&self) -> Option<&Self> {
        if self.is_present() { Some(self) } else { None }
    }

    /// Owned form of [`presence`](Presence::presence).
    fn into_presence(self) -> Option<Self>
    where
        Self: Sized,
    {
        if self.is_present() { Some(self) } else { None }
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Presence::is_blank)
    }
}

impl Presence for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Presence for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl Presence for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

macro_rules! blank_when_empty {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Presence for $ty {
                fn is_blank(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

blank_when_empty! {
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
    IndexMap<K, V, S> => [K, V, S],
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

always_present!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

/// A record is present even without fields.
impl Presence for Record {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Presence for Json {
    fn is_blank(&self) -> bool {
        match self {
            Json::Null => true,
            Json::Bool(b) => b.is_blank(),
            Json::Number(_) => false,
            Json::String(s) => s.is_blank(),
            Json::Array(items) => items.is_empty(),
            Json::Object(map) => map.is_empty(),
        }
    }
}

impl Presence for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Scalar(json) => json.is_blank(),
            Value::Record(record) => record.is_blank(),
        }
    }
}

/// Truthiness: everything except absence and `false` is true.
pub trait Truthy {
    /// `false` only for absence and `false`.
    fn to_bool(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn to_bool(&self) -> bool {
        (**self).to_bool()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn to_bool(&self) -> bool {
        self.as_ref().is_some_and(Truthy::to_bool)
    }
}

impl Truthy for bool {
    fn to_bool(&self) -> bool {
        *self
    }
}

impl Truthy for Json {
    fn to_bool(&self) -> bool {
        !matches!(self, Json::Null | Json::Bool(false))
    }
}

impl Truthy for Value {
    fn to_bool(&self) -> bool {
        match self {
            Value::Scalar(json) => json.to_bool(),
            Value::Record(_) => true,
        }
    }
}

macro_rules! always_truthy {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Truthy for $ty {
                fn to_bool(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_truthy! {
    str => [],
    String => [],
    Record => [],
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
    IndexMap<K, V, S> => [K, V, S],
    i8 => [], i16 => [], i32 => [], i64 => [], i128 => [], isize => [],
    u8 => [], u16 => [], u32 => [], u64 => [], u128 => [], usize => [],
    f32 => [], f64 => [], char => [],
}
