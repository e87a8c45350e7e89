//! Integration tests for the fee status service.
//!
//! These tests run the service against the in-memory repository, covering
//! each classification outcome and every failure path.

use common::{Money, StudentId};
use domain::{DomainError, FeeStatus, FeeStatusService};
use fee_store::{InMemoryStudentRepository, StudentFeeRecord};

fn id(raw: &str) -> StudentId {
    StudentId::parse(raw).unwrap()
}

/// Helper to create a service seeded with the standard scenario records
async fn create_service() -> FeeStatusService<InMemoryStudentRepository> {
    let repo = InMemoryStudentRepository::new();
    for (student, total, paid) in [
        ("S1", 1000, 1000),
        ("S2", 1000, 400),
        ("S3", 1000, 0),
        ("S5", 0, 0),
    ] {
        repo.insert(StudentFeeRecord::new(
            id(student),
            Money::from_cents(total * 100),
            Money::from_cents(paid * 100),
        ))
        .await;
    }
    FeeStatusService::new(repo)
}

mod classification {
    use super::*;

    #[tokio::test]
    async fn fully_paid_student() {
        let service = create_service().await;

        let result = service.get_fee_status(&id("S1")).await.unwrap();
        assert_eq!(result.student_id, id("S1"));
        assert_eq!(result.status, FeeStatus::Paid);
    }

    #[tokio::test]
    async fn partially_paid_student() {
        let service = create_service().await;

        let result = service.get_fee_status(&id("S2")).await.unwrap();
        assert_eq!(result.student_id, id("S2"));
        assert_eq!(result.status, FeeStatus::PartiallyPaid);
    }

    #[tokio::test]
    async fn overdue_student() {
        let service = create_service().await;

        let result = service.get_fee_status(&id("S3")).await.unwrap();
        assert_eq!(result.student_id, id("S3"));
        assert_eq!(result.status, FeeStatus::Overdue);
    }

    #[tokio::test]
    async fn zero_fee_student_is_paid() {
        let service = create_service().await;

        let result = service.get_fee_status(&id("S5")).await.unwrap();
        assert_eq!(result.status, FeeStatus::Paid);
    }

    #[tokio::test]
    async fn result_serializes_to_wire_shape() {
        let service = create_service().await;

        let result = service.get_fee_status(&id("S2")).await.unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"StudentID": "S2", "Status": "Partially Paid"})
        );
    }

    #[tokio::test]
    async fn reflects_latest_record() {
        let service = create_service().await;

        service
            .repository()
            .insert(StudentFeeRecord::new(
                id("S3"),
                Money::from_cents(100_000),
                Money::from_cents(100_000),
            ))
            .await;

        let result = service.get_fee_status(&id("S3")).await.unwrap();
        assert_eq!(result.status, FeeStatus::Paid);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let service = create_service().await;

        let err = service.get_fee_status(&id("S4")).await.unwrap_err();
        match err {
            DomainError::StudentNotFound(student_id) => assert_eq!(student_id, id("S4")),
            other => panic!("expected StudentNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unavailable_store_is_a_store_error() {
        let service = create_service().await;
        service.repository().set_unavailable(true);

        let err = service.get_fee_status(&id("S1")).await.unwrap_err();
        match err {
            DomainError::Store(store_err) => assert!(store_err.is_connection()),
            other => panic!("expected Store error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_failure_does_not_poison_later_lookups() {
        let service = create_service().await;

        service.repository().set_unavailable(true);
        assert!(service.get_fee_status(&id("S1")).await.is_err());

        service.repository().set_unavailable(false);
        let result = service.get_fee_status(&id("S1")).await.unwrap();
        assert_eq!(result.status, FeeStatus::Paid);
    }
}
