//! Course catalog import.
//!
//! Drives a catalog stream through the reader and the normalizer, then hands
//! the resulting documents to an [`IndexSink`] in one batch followed by one
//! commit.

pub mod importer;
pub mod report;
pub mod sink;

pub use importer::{ImportError, ImportOptions, Importer};
pub use report::{Discard, ImportReport, SinkFailure, SinkStage};
pub use sink::{IndexSink, JsonLinesSink, MemorySink, SinkError};
