//! Utility functions for rule implementations.

pub mod naming;

#[doc(inline)]
pub use naming::{has_case_insensitive_prefix, is_all_caps_underscore_digits};
