pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::{Money, StudentId};
pub use error::{FeeStoreError, Result};
pub use memory::InMemoryStudentRepository;
pub use postgres::PostgresStudentRepository;
pub use record::StudentFeeRecord;
pub use store::StudentRepository;
