//! Audit Log
//!
//! Structured records of every accepted command, handed to an optional
//! injected logger.

use chrono::Local;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Field name to value, in insertion order.
pub type AuditRecord = Map<String, Value>;

/// Receives one record per accepted command
pub trait AuditLogger: Send + Sync {
    fn log(&self, record: AuditRecord);
}

/// Per-handler audit configuration: which logger, if any, and whether
/// records are date-stamped.
#[derive(Clone, Default)]
pub struct AuditSettings {
    logger: Option<Arc<dyn AuditLogger>>,
    stamp_date: bool,
}

impl AuditSettings {
    /// No logger; nothing is recorded
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(logger: Arc<dyn AuditLogger>) -> Self {
        Self {
            logger: Some(logger),
            stamp_date: false,
        }
    }

    pub fn with_date(mut self, stamp_date: bool) -> Self {
        self.stamp_date = stamp_date;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    /// Forward `fields` to the logger, appending `date` when configured.
    ///
    /// Returns whether a logger received the record.
    pub fn record(&self, mut fields: AuditRecord) -> bool {
        let Some(logger) = &self.logger else {
            return false;
        };

        if self.stamp_date {
            fields.insert(
                "date".to_string(),
                Value::String(Local::now().date_naive().to_string()),
            );
        }

        logger.log(fields);
        true
    }
}

impl fmt::Debug for AuditSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditSettings")
            .field("enabled", &self.is_enabled())
            .field("stamp_date", &self.stamp_date)
            .finish()
    }
}

/// Keeps every record for later inspection
#[derive(Debug, Default)]
pub struct InMemoryAuditLogger {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&self, record: AuditRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

/// Emits each record as an `info` event on the `audit` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn log(&self, record: AuditRecord) {
        let record = Value::Object(record);
        info!(target: "audit", record = %record, "command accepted");
    }
}
