//! # Accrue: lazy sequences and fused collection combinators
//!
//! Build lazy, forward-only sequences from a seed and a step function or from
//! a window over an indexable source, and consume any iterable with
//! single-pass map/filter/find combinators.
//!
//! ## Core Traits
//!
//! - **[`Sequence<O>`]**: a suspended producer pulled one element at a time,
//!   completing with a typed [`Sequence::Return`] value
//! - **[`FusedExt`]**: `map_select`, `map_detect` and `mash` as iterator methods
//!
//! ## Example
//!
//! ```
//! use accrue::prelude::*;
//!
//! // 1, 2, 3, ... up to 5; the step runs only when an element is pulled.
//! let numbers = recurrence(1, |x: &i32| if *x < 5 { Some(x + 1) } else { None });
//! let evens_doubled: Vec<_> = numbers.map_select(|x| (x % 2 == 0).then(|| 2 * x)).collect();
//! assert_eq!(evens_doubled, vec![4, 8]);
//!
//! let letters = ['a', 'b', 'c', 'd', 'e'];
//! let middle: String = lazy_slice(&letters, 1..=3).collect();
//! assert_eq!(middle, "bcd");
//! ```
//!
//! ## Common Functions
//!
//! **Producing sequences:**
//! - [`recurrence(seed, step)`] - `seed`, `step(seed)`, ... until `step` returns `None`
//! - [`try_recurrence(seed, step)`] - same, with a fallible step
//! - [`slice_view(source, lo, hi)`] / [`lazy_slice(source, range)`] - clamped lazy windows
//! - [`from_fn(f)`] / [`from_iter(iter)`] - sequences from closures and iterators
//!
//! **Consuming iterables:**
//! - [`mash(pairs)`] - collect pairs into an ordered [`Mapping`], skipping absent entries
//! - [`map_select(items, f)`] - transform and keep present results
//! - [`map_detect(items, f)`] - transform until the first present result
//!
//! **Helpers:** [`Presence`], [`Truthy`], [`whitelist`], [`blacklist`],
//! [`maybe`], [`send_if_responds`], [`split_at`], [`Record`],
//! [`extract_options`] and the [`fs`] module.
//!
//! [`recurrence(seed, step)`]: recurrence()
//! [`try_recurrence(seed, step)`]: try_recurrence()
//! [`slice_view(source, lo, hi)`]: slice_view()
//! [`lazy_slice(source, range)`]: lazy_slice()
//! [`from_fn(f)`]: from_fn()
//! [`from_iter(iter)`]: from_iter()
//! [`mash(pairs)`]: mash()
//! [`map_select(items, f)`]: map_select()
//! [`map_detect(items, f)`]: map_detect()
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (sequence exhaustion, slice clamping,
//! file access) and never installs a subscriber.

mod compose;
mod dispatch;
mod error;
pub mod fs;
mod fused;
mod iter;
mod membership;
mod options;
pub mod prelude;
mod presence;
mod record;
mod recurrence;
mod sequence;
mod slice;
mod step;
mod text;

pub use compose::*;
pub use dispatch::*;
pub use error::*;
pub use fused::*;
pub use iter::*;
pub use membership::*;
pub use options::*;
pub use presence::*;
pub use record::*;
pub use recurrence::*;
pub use sequence::*;
pub use slice::*;
pub use step::*;
pub use text::*;
