//! Style records and cascade merging.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleRecord`]: A flat record of optional style fields
//! - [`merge_styles`]: Ordered list-merge with later-wins-per-field semantics
//! - [`FontWeight`] / [`TextDecorationLine`]: The enumerated field values
//!
//! Resolution everywhere in this crate is a cascade: an ordered list of
//! records merged into one, where an absent (`None`) field contributes
//! nothing and a later present field overrides an earlier one.

mod record;

pub use record::{merge_styles, FontWeight, StyleRecord, TextDecorationLine};
