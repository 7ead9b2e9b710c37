//! Field keys shared by the capture table and the normalizer.
//!
//! Keys are prefixed with the context that captures them, so the same
//! element name (`dc:title`, `dc:identifier`) never collides across levels.

pub const PROVIDER_IDENTIFIER: &str = "provider_identifier";
pub const PROVIDER_TITLE: &str = "provider_title";

pub const COURSE_IDENTIFIER: &str = "course_identifier";
pub const COURSE_TITLE: &str = "course_title";
pub const COURSE_DESCRIPTION: &str = "course_description";
pub const COURSE_SUBJECT: &str = "course_subject";

pub const PRESENTATION_IDENTIFIER: &str = "presentation_identifier";
pub const PRESENTATION_TITLE: &str = "presentation_title";
pub const PRESENTATION_START: &str = "presentation_start";
pub const PRESENTATION_END: &str = "presentation_end";
pub const PRESENTATION_APPLY_FROM: &str = "presentation_apply_from";
pub const PRESENTATION_APPLY_UNTIL: &str = "presentation_apply_until";
pub const PRESENTATION_BOOKING_ENDPOINT: &str = "presentation_booking_endpoint";
pub const PRESENTATION_APPLY_TO: &str = "presentation_apply_to";
pub const PRESENTATION_MEMBER_APPLY_TO: &str = "presentation_member_apply_to";
pub const PRESENTATION_ATTENDANCE_MODE: &str = "presentation_attendance_mode";
pub const PRESENTATION_ATTENDANCE_PATTERN: &str = "presentation_attendance_pattern";
pub const PRESENTATION_STUDY_MODE: &str = "presentation_study_mode";
pub const PRESENTATION_PLACES: &str = "presentation_places";
pub const PRESENTATION_VENUE_IDENTIFIER: &str = "presentation_venue_identifier";

/// Date-valued fields, normalized to UTC timestamps.
pub const DATE_FIELDS: [&str; 4] = [
    PRESENTATION_START,
    PRESENTATION_END,
    PRESENTATION_APPLY_FROM,
    PRESENTATION_APPLY_UNTIL,
];

/// Fields with a dedicated slot on `NormalizedPresentation`.
///
/// Anything captured under another key is carried in `extra`.
pub const KNOWN_FIELDS: [&str; 20] = [
    PROVIDER_IDENTIFIER,
    PROVIDER_TITLE,
    COURSE_IDENTIFIER,
    COURSE_TITLE,
    COURSE_DESCRIPTION,
    COURSE_SUBJECT,
    PRESENTATION_IDENTIFIER,
    PRESENTATION_TITLE,
    PRESENTATION_START,
    PRESENTATION_END,
    PRESENTATION_APPLY_FROM,
    PRESENTATION_APPLY_UNTIL,
    PRESENTATION_BOOKING_ENDPOINT,
    PRESENTATION_APPLY_TO,
    PRESENTATION_MEMBER_APPLY_TO,
    PRESENTATION_ATTENDANCE_MODE,
    PRESENTATION_ATTENDANCE_PATTERN,
    PRESENTATION_STUDY_MODE,
    PRESENTATION_PLACES,
    PRESENTATION_VENUE_IDENTIFIER,
];

/// Returns true if the key has a dedicated slot on `NormalizedPresentation`.
pub fn is_known(key: &str) -> bool {
    KNOWN_FIELDS.contains(&key)
}
