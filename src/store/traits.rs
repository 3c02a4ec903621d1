//! The storage contract all log store backends satisfy
//!
//! This module defines the trait abstraction that allows the in-memory
//! implementation and any future persistent backend to be used
//! interchangeably. A backend is interchangeable only if it honors the same
//! error semantics: `AlreadyExists` on ID conflicts, `LogNotFound` on absent
//! IDs.

use chrono::{DateTime, Utc};

use crate::types::{FailureLog, LogError, PaymentLog, PaymentLogChange};

/// Storage contract for payment and failure logs
///
/// Implementations take `&self` and are expected to be internally
/// synchronized, so one store instance can be shared across threads (for
/// example behind an `Arc`).
///
/// # Ordering
///
/// Every list operation returns its results sorted most-recent-first:
/// payment logs by `created`, failure logs by `timestamp`.
///
/// # Pagination
///
/// The `num` and `offset` parameters exist for forward compatibility with
/// paginated backends. Backends are permitted to ignore them and return the
/// full filtered set; the in-memory implementation does exactly that.
///
/// # Validation
///
/// No operation validates its input. Callers are expected to run
/// [`PaymentLog::validate`] before storing.
pub trait LogStore: Send + Sync {
    /// Store a new payment log
    ///
    /// # Errors
    ///
    /// Returns [`LogError::AlreadyExists`] if a payment log with the same ID
    /// is already stored; the existing record is left unchanged.
    fn store_payment_log(&self, log: PaymentLog) -> Result<(), LogError>;

    /// Apply a partial update to a stored payment log
    ///
    /// Only the fields set in `change` are overwritten; everything else is
    /// left untouched. No validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogNotFound`] if no payment log has this ID.
    fn update_payment_log(&self, id: &str, change: PaymentLogChange) -> Result<(), LogError>;

    /// Remove a stored payment log
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogNotFound`] if no payment log has this ID.
    fn delete_payment_log(&self, id: &str) -> Result<(), LogError>;

    /// Fetch a copy of a stored payment log
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogNotFound`] if no payment log has this ID.
    fn get_payment_log(&self, id: &str) -> Result<PaymentLog, LogError>;

    /// List payment logs belonging to a project, most recent first
    fn list_payment_logs_by_project(
        &self,
        project_id: &str,
        num: usize,
        offset: usize,
    ) -> Result<Vec<PaymentLog>, LogError>;

    /// List payment logs made by a user, most recent first
    fn list_payment_logs_by_user(
        &self,
        user_id: &str,
        num: usize,
        offset: usize,
    ) -> Result<Vec<PaymentLog>, LogError>;

    /// List all payment logs, most recent first
    fn list_payment_logs(&self, num: usize, offset: usize) -> Result<Vec<PaymentLog>, LogError>;

    /// Store a new failure log
    ///
    /// Failure logs are append-only; there is no update or delete.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::AlreadyExists`] if a failure log with the same ID
    /// is already stored; the existing record is left unchanged.
    fn store_failure_log(&self, failure: FailureLog) -> Result<(), LogError>;

    /// List all failure logs, most recent first
    fn list_failure_logs(&self, num: usize, offset: usize) -> Result<Vec<FailureLog>, LogError>;

    /// List failure logs recorded strictly after `timestamp`, most recent
    /// first
    ///
    /// A failure log whose timestamp equals `timestamp` is excluded.
    fn list_failure_logs_since(
        &self,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<FailureLog>, LogError>;
}
