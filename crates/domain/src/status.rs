//! Fee status classification.

use common::{Money, StudentId};
use serde::Serialize;

/// Payment state of a student's fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeeStatus {
    /// Paid amount equals the total fee.
    Paid,

    /// Something has been paid, but the amount differs from the total fee.
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,

    /// Nothing has been paid.
    Overdue,
}

impl FeeStatus {
    /// Classifies a record's amounts.
    ///
    /// Equality is checked first, so a zero fee with nothing paid is `Paid`.
    /// A paid amount above the total fee is `PartiallyPaid`.
    pub fn classify(total_fee: Money, paid_amount: Money) -> Self {
        if paid_amount == total_fee {
            FeeStatus::Paid
        } else if paid_amount.is_positive() {
            FeeStatus::PartiallyPaid
        } else {
            FeeStatus::Overdue
        }
    }

    /// Returns the status label as shown to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "Paid",
            FeeStatus::PartiallyPaid => "Partially Paid",
            FeeStatus::Overdue => "Overdue",
        }
    }

    /// Returns the label used for this status in metrics.
    pub fn metric_label(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "paid",
            FeeStatus::PartiallyPaid => "partially_paid",
            FeeStatus::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fee status reported for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeStatusResult {
    #[serde(rename = "StudentID")]
    pub student_id: StudentId,
    #[serde(rename = "Status")]
    pub status: FeeStatus,
}
