//! Adapting sequences
//!
//! This module provides combinators that transform or bound an existing
//! [`Sequence`](crate::Sequence) without pulling from it eagerly.

mod limit;
mod map;

pub use limit::{Limit, limit};
pub use map::{MapReturn, MapYield, map_return, map_yield};
