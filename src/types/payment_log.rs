//! Payment log types
//!
//! This module defines the [`PaymentLog`] record, its field-presence
//! validation, the [`PaymentLogChange`] partial-update descriptor, and the
//! canonical sort order for payment log listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::LogError;

/// Payment source for the Balanced payments provider
pub const SOURCE_BALANCED: &str = "balanced";

/// Initial status of a payment attempt
pub const STATUS_PENDING: &str = "pending";

/// ISO currency code for US dollars
pub const CURRENCY_USD: &str = "usd";

/// A record of one payment attempt and its current status
///
/// Constructed by the upstream payment workflow and handed to a
/// [`LogStore`](crate::store::LogStore). The ID is immutable once stored;
/// every other field except the owner and user/account identity can be
/// overwritten through a [`PaymentLogChange`].
///
/// A default-constructed log is empty and fails [`validate`](Self::validate)
/// on the first check; a `created` timestamp equal to the Unix epoch is
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLog {
    /// Unique identifier for this payment attempt
    pub id: String,

    /// Payment amount in the smallest currency unit
    ///
    /// Must be non-zero to pass validation.
    pub amount: u64,

    /// Optional free-form description
    pub description: Option<String>,

    /// Originating payment provider, e.g. [`SOURCE_BALANCED`]
    pub source: String,

    /// Provider-side identifier for this payment
    pub source_id: String,

    /// When the payment attempt was created
    pub created: DateTime<Utc>,

    /// When the payment attempt was last updated, if ever
    pub updated: Option<DateTime<Utc>>,

    /// Current status of the payment attempt, e.g. [`STATUS_PENDING`]
    pub status: String,

    /// Currency of the payment, e.g. [`CURRENCY_USD`]
    pub currency: String,

    /// The project this payment belongs to
    pub project_id: String,

    /// The user who made the payment attempt
    pub user_id: String,

    /// Account identifier on the provider side
    pub account_id: String,

    /// Kind of account the payment was made from
    pub account_type: String,
}

impl PaymentLog {
    /// Check that every required field is present
    ///
    /// Fields are checked in a fixed priority order and the first missing
    /// field wins, so error messages are deterministic: id, amount, source,
    /// source ID, created, status, currency, project ID, user ID, account
    /// type, account ID. `description` and `updated` are optional and never
    /// checked.
    ///
    /// The store performs no validation of its own; this is strictly a
    /// caller-side pre-write check.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If all required fields are present
    /// * `Err(LogError)` - The `Missing*` variant for the first absent field
    pub fn validate(&self) -> Result<(), LogError> {
        if self.id.is_empty() {
            return Err(LogError::MissingId);
        }
        if self.amount == 0 {
            return Err(LogError::MissingAmount);
        }
        if self.source.is_empty() {
            return Err(LogError::MissingSource);
        }
        if self.source_id.is_empty() {
            return Err(LogError::MissingSourceId);
        }
        if self.created == DateTime::UNIX_EPOCH {
            return Err(LogError::MissingCreated);
        }
        if self.status.is_empty() {
            return Err(LogError::MissingStatus);
        }
        if self.currency.is_empty() {
            return Err(LogError::MissingCurrency);
        }
        if self.project_id.is_empty() {
            return Err(LogError::MissingProjectId);
        }
        if self.user_id.is_empty() {
            return Err(LogError::MissingUserId);
        }
        if self.account_type.is_empty() {
            return Err(LogError::MissingAccountType);
        }
        if self.account_id.is_empty() {
            return Err(LogError::MissingAccountId);
        }
        Ok(())
    }
}

/// Partial-update descriptor for a stored [`PaymentLog`]
///
/// Every field is optional: `None` means "leave unchanged", `Some` means
/// "overwrite". This is the only mutation vehicle for a payment log. The ID,
/// owner reference, and user/account identity have no counterpart here and
/// are immutable after creation.
///
/// ```
/// use payment_log_store::PaymentLogChange;
///
/// let change = PaymentLogChange {
///     amount: Some(250),
///     status: Some("succeeded".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLogChange {
    /// New payment amount
    pub amount: Option<u64>,

    /// New description
    pub description: Option<String>,

    /// New payment source
    pub source: Option<String>,

    /// New provider-side identifier
    pub source_id: Option<String>,

    /// New created timestamp
    pub created: Option<DateTime<Utc>>,

    /// New updated timestamp
    pub updated: Option<DateTime<Utc>>,

    /// New status
    pub status: Option<String>,

    /// New currency
    pub currency: Option<String>,
}

impl PaymentLogChange {
    /// Apply every set field of this change to `log`, leaving unset fields
    /// untouched
    ///
    /// No validation is performed; raw field overwrites only.
    pub fn apply(&self, log: &mut PaymentLog) {
        if let Some(amount) = self.amount {
            log.amount = amount;
        }
        if let Some(ref description) = self.description {
            log.description = Some(description.clone());
        }
        if let Some(ref source) = self.source {
            log.source = source.clone();
        }
        if let Some(ref source_id) = self.source_id {
            log.source_id = source_id.clone();
        }
        if let Some(created) = self.created {
            log.created = created;
        }
        if let Some(updated) = self.updated {
            log.updated = Some(updated);
        }
        if let Some(ref status) = self.status {
            log.status = status.clone();
        }
        if let Some(ref currency) = self.currency {
            log.currency = currency.clone();
        }
    }
}

/// Sort payment logs by creation time, most recent first
///
/// The sort is stable: logs with equal `created` timestamps keep their
/// relative order.
pub fn sort_logs_by_created(mut logs: Vec<PaymentLog>) -> Vec<PaymentLog> {
    logs.sort_by(|a, b| b.created.cmp(&a.created));
    logs
}
