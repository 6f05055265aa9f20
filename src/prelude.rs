//! Prelude module for shorthand_dates crate.
//!
//! Re-exports the derive_more macros used across the crate.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, IntoIterator};
