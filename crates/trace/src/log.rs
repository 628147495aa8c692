// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trace log implementation.

use crate::event::{TraceEvent, TraceRecord};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

/// Shared, append-only log of controller decisions
pub struct TraceLog {
    records: Arc<Mutex<Vec<TraceRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl TraceLog {
    /// Create a new in-memory trace log
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a trace log that also appends to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record an event for the named carousel
    pub fn record(&self, carousel: &str, elapsed_ms: u64, event: TraceEvent) {
        let mut records = self.records.lock();
        let record = TraceRecord {
            seq: records.len() as u64,
            elapsed_ms,
            carousel: carousel.to_string(),
            event,
        };

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        records.push(record);
    }

    /// Get all records
    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.lock().clone()
    }

    /// Get the last N records
    pub fn last(&self, n: usize) -> Vec<TraceRecord> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&TraceRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Records produced by one carousel
    pub fn for_carousel(&self, name: &str) -> Vec<TraceRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.carousel == name)
            .cloned()
            .collect()
    }

    /// Records that committed an index change
    pub fn commits(&self) -> Vec<TraceRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.event.is_commit())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear all records. Sequence numbers restart at zero.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TraceLog {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl std::fmt::Debug for TraceLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceLog")
            .field("len", &self.len())
            .field("file", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
