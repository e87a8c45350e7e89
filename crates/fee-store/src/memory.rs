use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{FeeStoreError, Result, StudentFeeRecord, StudentId, store::StudentRepository};

/// In-memory student repository for testing.
///
/// Can be switched into an unavailable mode in which every lookup fails the
/// same way an unreachable database would.
#[derive(Clone, Default)]
pub struct InMemoryStudentRepository {
    records: Arc<RwLock<HashMap<StudentId, StudentFeeRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStudentRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for its student.
    pub async fn insert(&self, record: StudentFeeRecord) {
        self.records
            .write()
            .await
            .insert(record.student_id.clone(), record);
    }

    /// Removes a student's record, returning it if present.
    pub async fn remove(&self, student_id: &StudentId) -> Option<StudentFeeRecord> {
        self.records.write().await.remove(student_id)
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Makes subsequent lookups fail with a connection error (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_fee_record(&self, student_id: &StudentId) -> Result<Option<StudentFeeRecord>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(FeeStoreError::Connection(sqlx::Error::Io(
                std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "in-memory repository is unavailable",
                ),
            )));
        }

        Ok(self.records.read().await.get(student_id).cloned())
    }
}
