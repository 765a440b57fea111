//! Core types for the back-office.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::{ZERO_AMOUNT, normalize_amount, parse_amount};
pub use status::*;
