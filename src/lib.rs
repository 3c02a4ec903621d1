//! Payment Log Store
//!
//! # Overview
//!
//! This library is a record-keeping layer for payment transaction logs and
//! their associated failure events, exposed through a uniform storage trait
//! with one in-memory implementation.
//!
//! An upstream payment workflow constructs a [`PaymentLog`] (one payment
//! attempt: amount, source, status, currency, owning project, user, account)
//! or a [`FailureLog`] (why an attempt failed), optionally validates it, and
//! records it through a [`LogStore`]. Records can then be queried by
//! identity, owner, user, or time window.
//!
//! # Architecture
//!
//! - [`types`] - domain types:
//!   - [`types::payment_log`] - payment log record, field-presence
//!     validation, partial-update descriptor, sort order
//!   - [`types::failure_log`] - append-only failure records and their sort
//!     order
//!   - [`types::error`] - the [`LogError`] enum
//! - [`store`] - storage:
//!   - [`store::traits`] - the [`LogStore`] contract
//!   - [`store::memory`] - [`MemoryStore`], a single-mutex, map-backed
//!     backend safe for shared use across threads
//!
//! # Validation
//!
//! The store performs no validation of its own. Callers run
//! [`PaymentLog::validate`] before storing; it checks required fields in a
//! fixed priority order and reports the first one missing.
//!
//! # Ordering
//!
//! Every list operation returns results most-recent-first: payment logs by
//! creation time, failure logs by failure time.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use payment_log_store::{
//!     LogStore, MemoryStore, PaymentLog, PaymentLogChange, CURRENCY_USD, SOURCE_BALANCED,
//!     STATUS_PENDING,
//! };
//!
//! let log = PaymentLog {
//!     id: "pl-1".to_string(),
//!     amount: 2500,
//!     source: SOURCE_BALANCED.to_string(),
//!     source_id: "balanced-123".to_string(),
//!     created: Utc::now(),
//!     status: STATUS_PENDING.to_string(),
//!     currency: CURRENCY_USD.to_string(),
//!     project_id: "project-1".to_string(),
//!     user_id: "user-1".to_string(),
//!     account_id: "account-1".to_string(),
//!     account_type: "card".to_string(),
//!     ..Default::default()
//! };
//! log.validate()?;
//!
//! let store = MemoryStore::new();
//! store.store_payment_log(log)?;
//! store.update_payment_log(
//!     "pl-1",
//!     PaymentLogChange {
//!         status: Some("succeeded".to_string()),
//!         ..Default::default()
//!     },
//! )?;
//!
//! let fetched = store.get_payment_log("pl-1")?;
//! assert_eq!(fetched.status, "succeeded");
//! # Ok::<(), payment_log_store::LogError>(())
//! ```

// Module declarations
pub mod store;
pub mod types;

pub use store::{LogStore, MemoryStore};
pub use types::{
    sort_failure_logs, sort_logs_by_created, FailureLog, LogError, PaymentLog, PaymentLogChange,
    CURRENCY_USD, SOURCE_BALANCED, STATUS_PENDING,
};
