//! Import orchestration.
//!
//! One run reads the whole feed, normalizes every record, then calls the
//! sink's `index` once with all surviving documents and `commit` once. A
//! broken stream aborts the run before the sink is touched; sink failures are
//! logged and reported but never retried.

use std::io::Read;
use std::time::Instant;

use catalog_ingest::{CatalogReader, IngestError, ReaderOptions};
use catalog_transform::{NormalizeOptions, Normalizer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::report::{Discard, ImportReport, SinkFailure, SinkStage};
use crate::sink::IndexSink;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("catalog stream failed: {0}")]
    Stream(#[from] IngestError),
}

/// Options controlling one import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    pub reader: ReaderOptions,
    pub normalize: NormalizeOptions,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.reader = self.reader.with_buffer_size(size);
        self
    }

    pub fn with_identifier_base(mut self, base: impl Into<String>) -> Self {
        self.normalize = self.normalize.with_identifier_base(base);
        self
    }
}

/// Runs catalog imports against an index sink.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    options: ImportOptions,
    normalizer: Normalizer,
}

impl Importer {
    pub fn new(options: ImportOptions) -> Self {
        let normalizer = Normalizer::new(options.normalize.clone());
        Self {
            options,
            normalizer,
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import one catalog stream into `sink`.
    pub fn run<R, S>(&self, input: R, sink: &mut S) -> Result<ImportReport, ImportError>
    where
        R: Read,
        S: IndexSink + ?Sized,
    {
        let started = Instant::now();
        let mut report = ImportReport::default();
        let mut documents = Vec::new();

        for record in CatalogReader::new(input, &self.options.reader) {
            let record = record?;
            report.records_parsed += 1;
            match self.normalizer.normalize(&record) {
                Ok(normalized) => {
                    report.fields_dropped.extend(normalized.issues);
                    documents.push(normalized.presentation);
                }
                Err(err) => {
                    warn!(
                        reason = err.reason(),
                        error = %err,
                        record = ?record,
                        "discarding presentation record"
                    );
                    report.discarded.push(Discard {
                        reason: err.reason().to_string(),
                        message: err.to_string(),
                        record,
                    });
                }
            }
        }

        match sink.index(&documents) {
            Ok(()) => report.records_indexed = documents.len(),
            Err(err) => {
                error!(error = %err, documents = documents.len(), "index call failed");
                report.sink_errors.push(SinkFailure {
                    stage: SinkStage::Index,
                    message: err.to_string(),
                });
            }
        }
        if let Err(err) = sink.commit() {
            error!(error = %err, "commit failed");
            report.sink_errors.push(SinkFailure {
                stage: SinkStage::Commit,
                message: err.to_string(),
            });
        }

        report.elapsed = started.elapsed();
        info!(
            parsed = report.records_parsed,
            indexed = report.records_indexed,
            discarded = report.records_discarded(),
            fields_dropped = report.fields_dropped.len(),
            partial = report.is_partial(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "catalog import finished"
        );
        Ok(report)
    }
}
