use async_trait::async_trait;

use crate::{Result, StudentFeeRecord, StudentId};

/// Read access to student fee records.
///
/// Implementations must be thread-safe (Send + Sync); the HTTP layer shares a
/// single repository across concurrent requests.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Looks up the fee record for a student.
    ///
    /// Returns `Ok(None)` when no record matches `student_id`.
    async fn find_fee_record(&self, student_id: &StudentId) -> Result<Option<StudentFeeRecord>>;
}

#[async_trait]
impl<T: StudentRepository + ?Sized> StudentRepository for std::sync::Arc<T> {
    async fn find_fee_record(&self, student_id: &StudentId) -> Result<Option<StudentFeeRecord>> {
        (**self).find_fee_record(student_id).await
    }
}
