//! XCRI-CAP catalog ingestion.
//!
//! - **capture**: static field capture table keyed by context and element name
//! - **context**: context-tracking state machine producing raw records
//! - **reader**: incremental XML reader driving the state machine
//! - **namespaces**: the catalog vocabularies the table is keyed on

pub mod capture;
pub mod context;
pub mod error;
pub mod namespaces;
pub mod reader;

pub use capture::{
    Capture, CaptureMode, ElementName, FieldCaptureRule, RuleAction, ScopedRule, captured_fields,
    rules,
};
pub use context::{Attribute, ContextTracker, FeedEvent, QualifiedName, split_qname};
pub use error::{IngestError, Result};
pub use reader::{CatalogReader, DEFAULT_BUFFER_SIZE, ReaderOptions, read_records};
