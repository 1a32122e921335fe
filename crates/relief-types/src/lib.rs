//! # relief-types
//!
//! Shared error type and generation defaults for the Relief terrain
//! generator.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Relief crates share.

pub mod constants;
pub mod error;

pub use error::{ReliefError, ReliefResult};
