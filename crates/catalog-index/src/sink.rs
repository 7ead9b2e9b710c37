//! Index sinks.
//!
//! A sink receives the normalized documents of one import in a single
//! [`IndexSink::index`] call and is then asked to [`IndexSink::commit`].

use std::io::{self, Write};

use catalog_model::NormalizedPresentation;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("index rejected the request: {0}")]
    Rejected(String),
}

/// External indexing target.
pub trait IndexSink {
    /// Add or replace a batch of documents.
    fn index(&mut self, documents: &[NormalizedPresentation]) -> Result<(), SinkError>;

    /// Make everything indexed so far visible.
    fn commit(&mut self) -> Result<(), SinkError>;
}

/// Sink that keeps every batch in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    batches: Vec<Vec<NormalizedPresentation>>,
    commits: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> &[Vec<NormalizedPresentation>] {
        &self.batches
    }

    /// All documents received, in order.
    pub fn documents(&self) -> impl Iterator<Item = &NormalizedPresentation> {
        self.batches.iter().flatten()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl IndexSink for MemorySink {
    fn index(&mut self, documents: &[NormalizedPresentation]) -> Result<(), SinkError> {
        self.batches.push(documents.to_vec());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        self.commits += 1;
        Ok(())
    }
}

/// Sink that writes one JSON document per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of documents written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> IndexSink for JsonLinesSink<W> {
    fn index(&mut self, documents: &[NormalizedPresentation]) -> Result<(), SinkError> {
        for document in documents {
            serde_json::to_writer(&mut self.writer, document)?;
            self.writer.write_all(b"\n")?;
            self.written += 1;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        debug!(documents = self.written, "json lines output flushed");
        Ok(())
    }
}
