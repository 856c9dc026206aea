//! Commonly used imports
//!
//! Use `use accrue::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Sequence, Step};

// Producers
pub use crate::recurrence::{recurrence, try_recurrence};
pub use crate::sequence::{from_fn, from_iter};
pub use crate::slice::{Indexed, lazy_slice, slice_view};

// Transformations
pub use crate::compose::{limit, map_return, map_yield};

// Fused combinators
pub use crate::fused::{
    FusedExt, Mapping, map_detect, map_select, mash, mash_with, try_map_detect, try_map_select,
    try_mash,
};

// Helper traits
pub use crate::membership::MembershipExt;
pub use crate::presence::{Presence, Truthy};
