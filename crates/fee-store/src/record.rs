use common::{Money, StudentId};

/// Fee amounts stored for a single student.
///
/// Owned by the `Students` table; this service only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFeeRecord {
    pub student_id: StudentId,
    pub total_fee: Money,
    pub paid_amount: Money,
}

impl StudentFeeRecord {
    pub fn new(student_id: StudentId, total_fee: Money, paid_amount: Money) -> Self {
        Self {
            student_id,
            total_fee,
            paid_amount,
        }
    }
}
