//! Where conversion diagnostics go.
//!
//! The converter never logs directly. It hands each failure to a [`Reporter`],
//! so the verbosity threshold stays with whoever installed the subscriber.

use std::sync::Mutex;

use crate::error::ConversionError;

pub trait Reporter: Send + Sync {
    fn report(&self, error: &ConversionError);
}

/// Emits each diagnostic as a `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: &ConversionError) {
        match error {
            ConversionError::OutOfRange { angle, unit } => {
                tracing::error!(angle = *angle, unit = %unit, "{error}");
            }
            other => tracing::error!("{other}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _error: &ConversionError) {}
}

/// Keeps every diagnostic it is given.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: Mutex<Vec<ConversionError>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ConversionError> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, error: &ConversionError) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(error.clone());
    }
}
