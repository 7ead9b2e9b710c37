use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One course presentation, flattened for indexing.
///
/// Course and provider fields are denormalized onto every presentation so the
/// search index can group presentations by course without joins. Timestamps
/// are UTC strings in the `YYYY-MM-DDTHH:MM:SSZ` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPresentation {
    pub course_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub course_subjects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_title: Option<String>,

    pub presentation_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_apply_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_apply_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_booking_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_apply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_member_apply_to: Option<String>,

    // Attendance and venue metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_attendance_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_attendance_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_study_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_places: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_venue_identifier: Option<String>,

    /// Captured fields without a dedicated slot, first value only.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl NormalizedPresentation {
    pub fn new(
        course_identifier: impl Into<String>,
        presentation_identifier: impl Into<String>,
    ) -> Self {
        Self {
            course_identifier: course_identifier.into(),
            presentation_identifier: presentation_identifier.into(),
            ..Default::default()
        }
    }

    /// Whether the presentation carries both application window bounds.
    pub fn has_application_window(&self) -> bool {
        self.presentation_apply_from.is_some() && self.presentation_apply_until.is_some()
    }
}
