use async_trait::async_trait;
use sqlx::{Connection, PgConnection, Row, postgres::PgRow};

use crate::{
    FeeStoreError, Money, Result, StudentFeeRecord, StudentId, store::StudentRepository,
};

// Amounts are NUMERIC(12,2); converting to whole cents keeps the comparison
// in classification exact.
const FIND_FEE_RECORD: &str = r#"
    SELECT CAST(ROUND("TotalFee" * 100) AS BIGINT) AS total_fee_cents,
           CAST(ROUND("PaidAmount" * 100) AS BIGINT) AS paid_amount_cents
    FROM "Students"
    WHERE "StudentID" = $1
"#;

/// PostgreSQL-backed student repository.
///
/// Every lookup opens its own connection and closes it before returning;
/// no connection outlives a single call.
#[derive(Clone)]
pub struct PostgresStudentRepository {
    connection_string: String,
}

impl PostgresStudentRepository {
    /// Creates a repository that connects using the given connection string.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect(&self.connection_string)
            .await
            .map_err(FeeStoreError::Connection)
    }

    async fn fetch_record(
        conn: &mut PgConnection,
        student_id: &StudentId,
    ) -> Result<Option<StudentFeeRecord>> {
        let row = sqlx::query(FIND_FEE_RECORD)
            .bind(student_id.as_str())
            .fetch_optional(&mut *conn)
            .await
            .map_err(FeeStoreError::Query)?;

        row.map(|row| Self::row_to_record(student_id, row))
            .transpose()
    }

    fn row_to_record(student_id: &StudentId, row: PgRow) -> Result<StudentFeeRecord> {
        let total_fee: i64 = row
            .try_get("total_fee_cents")
            .map_err(FeeStoreError::Query)?;
        let paid_amount: i64 = row
            .try_get("paid_amount_cents")
            .map_err(FeeStoreError::Query)?;

        Ok(StudentFeeRecord::new(
            student_id.clone(),
            Money::from_cents(total_fee),
            Money::from_cents(paid_amount),
        ))
    }
}

impl std::fmt::Debug for PostgresStudentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The connection string carries credentials.
        f.debug_struct("PostgresStudentRepository")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    #[tracing::instrument(skip(self))]
    async fn find_fee_record(&self, student_id: &StudentId) -> Result<Option<StudentFeeRecord>> {
        let mut conn = self.connect().await?;

        let result = Self::fetch_record(&mut conn, student_id).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }

        result
    }
}
