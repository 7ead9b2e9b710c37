use serde::Serialize;
use thiserror::Error;

/// Reason a raw record cannot become a presentation document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("presentation has no URI-shaped identifier among {values:?}")]
    MissingPresentationIdentifier { values: Vec<String> },
    #[error("presentation belongs to no identified course")]
    MissingCourseIdentifier,
}

impl NormalizeError {
    /// Stable short name, used to group discards in reports.
    pub fn reason(&self) -> &'static str {
        match self {
            NormalizeError::MissingPresentationIdentifier { .. } => {
                "missing_presentation_identifier"
            }
            NormalizeError::MissingCourseIdentifier => "missing_course_identifier",
        }
    }
}

/// A field value that was dropped while the record itself was kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: unparseable date {value:?}")]
pub struct FieldIssue {
    pub field: String,
    pub value: String,
}
