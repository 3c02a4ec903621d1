//! In-memory log store
//!
//! This module provides [`MemoryStore`], the map-backed implementation of
//! [`LogStore`]. It holds every record it is given and hands out owned
//! copies, so callers can never alias the store's internal state.
//!
//! # Locking
//!
//! One mutex guards both maps. Every operation, read or write, holds the
//! lock for its full duration, so payment log and failure log operations
//! serialize against each other. Lock hold times are bounded by map lookups
//! plus, for list operations, a linear scan and sort. There is no
//! finer-grained locking; all operations are already low-latency.
//!
//! # Pagination
//!
//! The `num`/`offset` parameters of the list operations are ignored; the
//! full filtered, sorted result is always returned.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::traits::LogStore;
use crate::types::{
    sort_failure_logs, sort_logs_by_created, FailureLog, LogError, PaymentLog, PaymentLogChange,
};

/// Both maps live under one lock so a single critical section covers every
/// operation.
#[derive(Default)]
struct Inner {
    /// Payment log ID to payment log
    payment_logs: HashMap<String, PaymentLog>,

    /// Failure log ID to failure log
    failure_logs: HashMap<String, FailureLog>,
}

/// Map-backed [`LogStore`] guarded by a single mutex
///
/// Methods take `&self`; share one instance across threads with an `Arc`.
/// State does not survive the process: there is no durability and no
/// persistence.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Acquire the store lock
    ///
    /// A poisoned lock is recovered: every mutation runs to completion
    /// before its guard drops, so the inner maps are consistent even if a
    /// previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogStore for MemoryStore {
    fn store_payment_log(&self, log: PaymentLog) -> Result<(), LogError> {
        let mut inner = self.lock();
        if inner.payment_logs.contains_key(&log.id) {
            return Err(LogError::already_exists(&log.id));
        }
        inner.payment_logs.insert(log.id.clone(), log);
        Ok(())
    }

    fn update_payment_log(&self, id: &str, change: PaymentLogChange) -> Result<(), LogError> {
        let mut inner = self.lock();
        let log = inner
            .payment_logs
            .get_mut(id)
            .ok_or_else(|| LogError::not_found(id))?;
        change.apply(log);
        Ok(())
    }

    fn delete_payment_log(&self, id: &str) -> Result<(), LogError> {
        let mut inner = self.lock();
        inner
            .payment_logs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LogError::not_found(id))
    }

    fn get_payment_log(&self, id: &str) -> Result<PaymentLog, LogError> {
        let inner = self.lock();
        inner
            .payment_logs
            .get(id)
            .cloned()
            .ok_or_else(|| LogError::not_found(id))
    }

    fn list_payment_logs_by_project(
        &self,
        project_id: &str,
        _num: usize,
        _offset: usize,
    ) -> Result<Vec<PaymentLog>, LogError> {
        let inner = self.lock();
        let results = inner
            .payment_logs
            .values()
            .filter(|log| log.project_id == project_id)
            .cloned()
            .collect();
        Ok(sort_logs_by_created(results))
    }

    fn list_payment_logs_by_user(
        &self,
        user_id: &str,
        _num: usize,
        _offset: usize,
    ) -> Result<Vec<PaymentLog>, LogError> {
        let inner = self.lock();
        let results = inner
            .payment_logs
            .values()
            .filter(|log| log.user_id == user_id)
            .cloned()
            .collect();
        Ok(sort_logs_by_created(results))
    }

    fn list_payment_logs(&self, _num: usize, _offset: usize) -> Result<Vec<PaymentLog>, LogError> {
        let inner = self.lock();
        let results = inner.payment_logs.values().cloned().collect();
        Ok(sort_logs_by_created(results))
    }

    fn store_failure_log(&self, failure: FailureLog) -> Result<(), LogError> {
        let mut inner = self.lock();
        if inner.failure_logs.contains_key(&failure.id) {
            return Err(LogError::already_exists(&failure.id));
        }
        inner.failure_logs.insert(failure.id.clone(), failure);
        Ok(())
    }

    fn list_failure_logs(&self, _num: usize, _offset: usize) -> Result<Vec<FailureLog>, LogError> {
        let inner = self.lock();
        let results = inner.failure_logs.values().cloned().collect();
        Ok(sort_failure_logs(results))
    }

    fn list_failure_logs_since(
        &self,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<FailureLog>, LogError> {
        let inner = self.lock();
        let results = inner
            .failure_logs
            .values()
            .filter(|log| log.timestamp > timestamp)
            .cloned()
            .collect();
        Ok(sort_failure_logs(results))
    }
}
