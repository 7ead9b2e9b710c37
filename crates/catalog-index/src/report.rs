//! Outcome of one import run.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use catalog_model::RawRecord;
use catalog_transform::FieldIssue;
use serde::Serialize;

/// Sink call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkStage {
    Index,
    Commit,
}

impl fmt::Display for SinkStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkStage::Index => f.write_str("index"),
            SinkStage::Commit => f.write_str("commit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkFailure {
    pub stage: SinkStage,
    pub message: String,
}

/// A raw record that did not become a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discard {
    /// Short reason code, e.g. `missing_presentation_identifier`.
    pub reason: String,
    pub message: String,
    pub record: RawRecord,
}

/// Counters and failures collected while importing a catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub records_parsed: usize,
    pub records_indexed: usize,
    pub discarded: Vec<Discard>,
    pub fields_dropped: Vec<FieldIssue>,
    pub sink_errors: Vec<SinkFailure>,
    pub elapsed: Duration,
}

impl ImportReport {
    /// True when a sink call failed, so the target may hold partial data.
    pub fn is_partial(&self) -> bool {
        !self.sink_errors.is_empty()
    }

    pub fn records_discarded(&self) -> usize {
        self.discarded.len()
    }

    /// Discards grouped by reason code.
    pub fn discard_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for discard in &self.discarded {
            *counts.entry(discard.reason.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
