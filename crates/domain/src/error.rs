//! Domain error types.

use common::StudentId;
use fee_store::FeeStoreError;
use thiserror::Error;

/// Errors that can occur while determining a fee status.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No fee record exists for the student.
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    /// The fee store could not be reached or queried.
    #[error("Fee store error: {0}")]
    Store(#[from] FeeStoreError),
}
