//! Fee status lookup service.

use std::time::Instant;

use common::StudentId;
use fee_store::StudentRepository;

use crate::error::DomainError;
use crate::status::{FeeStatus, FeeStatusResult};

/// Looks up student fee records and classifies them.
///
/// Each call performs exactly one read against the repository; nothing is
/// cached or retried.
pub struct FeeStatusService<R: StudentRepository> {
    repository: R,
}

impl<R: StudentRepository> FeeStatusService<R> {
    /// Creates a new service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Determines the fee status of a student.
    #[tracing::instrument(skip(self))]
    pub async fn get_fee_status(
        &self,
        student_id: &StudentId,
    ) -> Result<FeeStatusResult, DomainError> {
        let start = Instant::now();
        let result = self.lookup(student_id).await;
        metrics::histogram!("fee_status_lookup_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        let outcome = match &result {
            Ok(found) => found.status.metric_label(),
            Err(DomainError::StudentNotFound(_)) => "not_found",
            Err(DomainError::Store(_)) => "error",
        };
        metrics::counter!("fee_status_lookups_total", "outcome" => outcome).increment(1);

        result
    }

    async fn lookup(&self, student_id: &StudentId) -> Result<FeeStatusResult, DomainError> {
        let record = self
            .repository
            .find_fee_record(student_id)
            .await?
            .ok_or_else(|| DomainError::StudentNotFound(student_id.clone()))?;

        let status = FeeStatus::classify(record.total_fee, record.paid_amount);
        tracing::debug!(
            %student_id,
            total_fee = %record.total_fee,
            paid_amount = %record.paid_amount,
            %status,
            "classified fee record"
        );

        Ok(FeeStatusResult {
            student_id: student_id.clone(),
            status,
        })
    }
}
