use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural level of the catalog that owns captured fields.
///
/// Presentations nest inside courses, which nest inside providers. Fields
/// captured at an outer level are shared by every presentation beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    Provider,
    Course,
    Presentation,
}

impl Context {
    /// All contexts from outermost to innermost.
    pub const ALL: [Context; 3] = [Context::Provider, Context::Course, Context::Presentation];

    /// Prefix used by every field key captured in this context.
    pub fn field_prefix(self) -> &'static str {
        match self {
            Context::Provider => "provider",
            Context::Course => "course",
            Context::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_prefix())
    }
}
