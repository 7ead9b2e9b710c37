//! Configuration options for record normalization.

use serde::{Deserialize, Serialize};

/// Base URI stripped from identifiers published by the Oxford course data service.
pub const DEFAULT_IDENTIFIER_BASE: &str = "https://course.data.ox.ac.uk/id/";

/// Options for normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Prefix removed from URI identifiers before they are flattened.
    /// URIs outside this base only lose their `scheme://` part.
    pub identifier_base: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            identifier_base: DEFAULT_IDENTIFIER_BASE.to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier_base(mut self, base: impl Into<String>) -> Self {
        self.identifier_base = base.into();
        self
    }
}
