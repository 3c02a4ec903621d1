//! Failure log types
//!
//! A [`FailureLog`] records why a payment attempt failed. Failure logs are
//! append-only: once stored they are never updated or deleted, so the store
//! exposes no mutation operations for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record describing why a payment attempt failed
///
/// The `payment_log_id` references the failed attempt but the store does not
/// enforce that such a payment log exists; failures can outlive (or precede)
/// the record they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureLog {
    /// Unique identifier for this failure record
    pub id: String,

    /// The payment attempt this failure belongs to
    pub payment_log_id: String,

    /// Human-readable reason reported by the payment provider
    pub failure_reason: String,

    /// Machine-readable reason code reported by the payment provider
    pub failure_reason_code: String,

    /// When the failure occurred
    pub timestamp: DateTime<Utc>,
}

/// Sort failure logs by timestamp, most recent first
///
/// Same policy as [`sort_logs_by_created`](super::sort_logs_by_created),
/// applied to `timestamp`. The sort is stable.
pub fn sort_failure_logs(mut logs: Vec<FailureLog>) -> Vec<FailureLog> {
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    logs
}
