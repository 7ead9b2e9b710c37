//! Per-record normalization.
//!
//! Collapses a multi-valued [`RawRecord`] into a [`NormalizedPresentation`]:
//! single-valued fields keep their first capture, subjects keep every capture,
//! and description fragments are joined. A record without a usable
//! presentation or course identifier is discarded; an unparseable date only
//! drops that field.

use catalog_model::{NormalizedPresentation, RawRecord, fields};
use tracing::warn;

use crate::error::{FieldIssue, NormalizeError};
use crate::normalization::datetime::to_utc_timestamp;
use crate::normalization::identifier::extract_identifier;
use crate::options::NormalizeOptions;

/// A normalized presentation plus the fields dropped on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub presentation: NormalizedPresentation,
    pub issues: Vec<FieldIssue>,
}

/// Record normalizer bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn normalize(&self, record: &RawRecord) -> Result<Normalized, NormalizeError> {
        let base = self.options.identifier_base.as_str();

        let presentation_ids = record.values(fields::PRESENTATION_IDENTIFIER);
        let presentation_identifier = extract_identifier(presentation_ids, base).ok_or_else(
            || NormalizeError::MissingPresentationIdentifier {
                values: presentation_ids.to_vec(),
            },
        )?;
        let course_identifier = identifier_or_first(record, fields::COURSE_IDENTIFIER, base)
            .ok_or(NormalizeError::MissingCourseIdentifier)?;

        let mut presentation =
            NormalizedPresentation::new(course_identifier, presentation_identifier);
        presentation.course_title = first(record, fields::COURSE_TITLE);
        presentation.course_description = joined(record, fields::COURSE_DESCRIPTION);
        presentation.course_subjects = record.values(fields::COURSE_SUBJECT).to_vec();

        presentation.provider_identifier =
            identifier_or_first(record, fields::PROVIDER_IDENTIFIER, base);
        presentation.provider_title = first(record, fields::PROVIDER_TITLE);

        presentation.presentation_title = first(record, fields::PRESENTATION_TITLE);
        presentation.presentation_booking_endpoint =
            first(record, fields::PRESENTATION_BOOKING_ENDPOINT);
        presentation.presentation_apply_to = first(record, fields::PRESENTATION_APPLY_TO);
        presentation.presentation_member_apply_to =
            first(record, fields::PRESENTATION_MEMBER_APPLY_TO);
        presentation.presentation_attendance_mode =
            first(record, fields::PRESENTATION_ATTENDANCE_MODE);
        presentation.presentation_attendance_pattern =
            first(record, fields::PRESENTATION_ATTENDANCE_PATTERN);
        presentation.presentation_study_mode = first(record, fields::PRESENTATION_STUDY_MODE);
        presentation.presentation_places = first(record, fields::PRESENTATION_PLACES);
        presentation.presentation_venue_identifier =
            first(record, fields::PRESENTATION_VENUE_IDENTIFIER);

        let mut issues = Vec::new();
        let id = presentation.presentation_identifier.clone();
        let mut date = |field: &str| timestamp(record, field, &id, &mut issues);
        presentation.presentation_start = date(fields::PRESENTATION_START);
        presentation.presentation_end = date(fields::PRESENTATION_END);
        presentation.presentation_apply_from = date(fields::PRESENTATION_APPLY_FROM);
        presentation.presentation_apply_until = date(fields::PRESENTATION_APPLY_UNTIL);

        for (key, values) in record.iter() {
            if fields::is_known(key) {
                continue;
            }
            if let Some(value) = values.first() {
                presentation.extra.insert(key.to_string(), value.clone());
            }
        }

        Ok(Normalized {
            presentation,
            issues,
        })
    }
}

/// Normalize one record with the given options.
pub fn normalize(
    record: &RawRecord,
    options: &NormalizeOptions,
) -> Result<Normalized, NormalizeError> {
    Normalizer::new(options.clone()).normalize(record)
}

fn first(record: &RawRecord, field: &str) -> Option<String> {
    record.first(field).map(str::to_string)
}

fn joined(record: &RawRecord, field: &str) -> Option<String> {
    let values = record.values(field);
    (!values.is_empty()).then(|| values.join(" "))
}

/// URI-derived identifier, falling back to the first raw value.
fn identifier_or_first(record: &RawRecord, field: &str, base: &str) -> Option<String> {
    let values = record.values(field);
    extract_identifier(values, base).or_else(|| values.first().cloned())
}

fn timestamp(
    record: &RawRecord,
    field: &str,
    presentation: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    let value = record.first(field)?;
    let normalized = to_utc_timestamp(value);
    if normalized.is_none() {
        warn!(presentation, field, value, "dropping unparseable date");
        issues.push(FieldIssue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn course_identifier_falls_back_to_the_raw_value() {
        let raw = record(&[
            (fields::COURSE_IDENTIFIER, "TDAE"),
            (
                fields::PRESENTATION_IDENTIFIER,
                "https://course.data.ox.ac.uk/id/itlp/presentation/TDAE-1",
            ),
        ]);
        let normalized = Normalizer::default().normalize(&raw).expect("normalized");
        assert_eq!(normalized.presentation.course_identifier, "TDAE");
        assert_eq!(
            normalized.presentation.presentation_identifier,
            "itlp-presentation-TDAE-1"
        );
        assert_eq!(normalized.presentation.provider_identifier, None);
    }

    #[test]
    fn missing_course_is_a_discard() {
        let raw = record(&[(
            fields::PRESENTATION_IDENTIFIER,
            "https://course.data.ox.ac.uk/id/itlp/presentation/TDAE-1",
        )]);
        let err = Normalizer::default().normalize(&raw).expect_err("discard");
        assert_eq!(err, NormalizeError::MissingCourseIdentifier);
        assert_eq!(err.reason(), "missing_course_identifier");
    }
}
