use thiserror::Error;

/// Errors that can occur when reading student fee records.
#[derive(Debug, Error)]
pub enum FeeStoreError {
    /// A connection to the database could not be opened.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The lookup statement failed or its row could not be decoded.
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),
}

impl FeeStoreError {
    /// Returns true if the failure happened while opening the connection.
    pub fn is_connection(&self) -> bool {
        matches!(self, FeeStoreError::Connection(_))
    }
}

/// Result type for fee store operations.
pub type Result<T> = std::result::Result<T, FeeStoreError>;
