use common::{Money, StudentId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{FeeStatus, FeeStatusService};
use fee_store::{InMemoryStudentRepository, StudentFeeRecord};

fn bench_classify(c: &mut Criterion) {
    let cases = [
        (Money::from_cents(100_000), Money::from_cents(100_000)),
        (Money::from_cents(100_000), Money::from_cents(40_000)),
        (Money::from_cents(100_000), Money::zero()),
    ];

    c.bench_function("domain/classify", |b| {
        b.iter(|| {
            for (total, paid) in cases {
                std::hint::black_box(FeeStatus::classify(total, paid));
            }
        });
    });
}

fn bench_get_fee_status(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryStudentRepository::new();

    rt.block_on(async {
        for n in 0..1_000 {
            let student_id = StudentId::parse(format!("S{n:04}")).unwrap();
            repo.insert(StudentFeeRecord::new(
                student_id,
                Money::from_cents(100_000),
                Money::from_cents(n * 100),
            ))
            .await;
        }
    });

    let service = FeeStatusService::new(repo);
    let student_id = StudentId::parse("S0500").unwrap();

    c.bench_function("domain/get_fee_status", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.get_fee_status(&student_id).await.unwrap();
            });
        });
    });
}

fn bench_get_fee_status_not_found(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = FeeStatusService::new(InMemoryStudentRepository::new());
    let student_id = StudentId::parse("missing").unwrap();

    c.bench_function("domain/get_fee_status_not_found", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.get_fee_status(&student_id).await.unwrap_err();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_get_fee_status,
    bench_get_fee_status_not_found,
);
criterion_main!(benches);
