pub mod fee_status;
pub mod system;
