//! Course catalog record normalization.
//!
//! Turns the raw, multi-valued captures produced by `catalog-ingest` into
//! flat [`NormalizedPresentation`](catalog_model::NormalizedPresentation)
//! documents:
//!
//! - **normalization::identifier**: short identifiers derived from URI values
//! - **normalization::datetime**: feed dates to UTC timestamps
//! - **normalizer**: per-record collapsing and discard decisions

pub mod error;
pub mod normalization;
pub mod normalizer;
pub mod options;

pub use error::{FieldIssue, NormalizeError};
pub use normalization::datetime::{TIMESTAMP_FORMAT, parse_timestamp, to_utc_timestamp};
pub use normalization::identifier::{extract_identifier, identifier_from_uri, is_uri};
pub use normalizer::{Normalized, Normalizer, normalize};
pub use options::{DEFAULT_IDENTIFIER_BASE, NormalizeOptions};
