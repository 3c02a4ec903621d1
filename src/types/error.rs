//! Error types for the payment log store
//!
//! This module defines all error values that can cross the store boundary.
//!
//! # Error Categories
//!
//! - **Validation Errors**: one variant per required `PaymentLog` field,
//!   raised by [`PaymentLog::validate`](crate::types::PaymentLog::validate)
//!   and never by the store itself.
//! - **Conflict**: `AlreadyExists`, raised when storing a payment or failure
//!   log under an ID that is already taken.
//! - **Not Found**: `LogNotFound`, raised by get/update/delete on an absent ID.

use thiserror::Error;

/// Main error type for the payment log store
///
/// Every error is returned synchronously to the immediate caller. The store
/// never logs, retries, or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// Payment log ID is empty
    #[error("missing payment log ID")]
    MissingId,

    /// Payment log amount is zero
    #[error("missing payment log amount")]
    MissingAmount,

    /// Payment log source is empty
    #[error("missing payment log source")]
    MissingSource,

    /// Payment log source ID is empty
    #[error("missing payment log source ID")]
    MissingSourceId,

    /// Payment log created timestamp is unset
    #[error("missing payment log created timestamp")]
    MissingCreated,

    /// Payment log status is empty
    #[error("missing payment log status")]
    MissingStatus,

    /// Payment log currency is empty
    #[error("missing payment log currency")]
    MissingCurrency,

    /// Payment log project ID is empty
    #[error("missing payment log project ID")]
    MissingProjectId,

    /// Payment log user ID is empty
    #[error("missing payment log user ID")]
    MissingUserId,

    /// Payment log account type is empty
    #[error("missing payment log account type")]
    MissingAccountType,

    /// Payment log account ID is empty
    #[error("missing payment log account ID")]
    MissingAccountId,

    /// A log with this ID is already stored
    ///
    /// Raised by both `store_payment_log` and `store_failure_log`. There is
    /// no overwrite-on-conflict behavior; callers needing upsert semantics
    /// must delete first or use `update_payment_log`.
    #[error("log {id} already exists")]
    AlreadyExists {
        /// The ID that was already taken
        id: String,
    },

    /// No log with this ID is stored
    ///
    /// Raised by `get_payment_log`, `update_payment_log`, and
    /// `delete_payment_log`.
    #[error("log {id} not found")]
    LogNotFound {
        /// The ID that was not found
        id: String,
    },
}

// Helper functions for creating errors that carry context

impl LogError {
    /// Create an AlreadyExists error
    pub fn already_exists(id: &str) -> Self {
        LogError::AlreadyExists { id: id.to_string() }
    }

    /// Create a LogNotFound error
    pub fn not_found(id: &str) -> Self {
        LogError::LogNotFound { id: id.to_string() }
    }
}
