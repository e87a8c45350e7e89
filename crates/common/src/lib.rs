//! Shared value types for the fee status service.

pub mod types;

pub use types::{Money, StudentId};
