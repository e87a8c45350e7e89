//! Domain layer for the fee status service.
//!
//! This crate provides:
//! - `FeeStatus` classification of a student's payment state
//! - `FeeStatusResult`, the payload returned to callers
//! - `FeeStatusService`, which looks up a record and classifies it

pub mod error;
pub mod service;
pub mod status;

pub use error::DomainError;
pub use service::FeeStatusService;
pub use status::{FeeStatus, FeeStatusResult};
