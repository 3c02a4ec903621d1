//! Types module
//!
//! Contains the domain types used throughout the crate, organized into
//! logical submodules:
//! - `payment_log`: payment log record, validation, and partial updates
//! - `failure_log`: append-only failure records
//! - `error`: error types for the store boundary

pub mod error;
pub mod failure_log;
pub mod payment_log;

pub use error::LogError;
pub use failure_log::{sort_failure_logs, FailureLog};
pub use payment_log::{
    sort_logs_by_created, PaymentLog, PaymentLogChange, CURRENCY_USD, SOURCE_BALANCED,
    STATUS_PENDING,
};
