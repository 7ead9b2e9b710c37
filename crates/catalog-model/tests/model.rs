use std::collections::BTreeMap;

use catalog_model::{NormalizedPresentation, RawRecord, fields};

#[test]
fn raw_record_keeps_fragments_in_order() {
    let mut record = RawRecord::new();
    record.push(fields::COURSE_SUBJECT, "History");
    record.push(fields::COURSE_SUBJECT, "Classics");
    record.push(fields::COURSE_TITLE, "Latin");

    assert_eq!(record.values(fields::COURSE_SUBJECT), ["History", "Classics"]);
    assert_eq!(record.first(fields::COURSE_TITLE), Some("Latin"));
    assert_eq!(record.len(), 2);
}

#[test]
fn raw_record_ignores_empty_values() {
    let mut record = RawRecord::new();
    record.push(fields::COURSE_TITLE, "");
    assert!(record.is_empty());
    assert!(record.values(fields::COURSE_TITLE).is_empty());
    assert_eq!(record.first(fields::COURSE_TITLE), None);
}

#[test]
fn raw_record_extend_appends_after_existing_values() {
    let mut outer: RawRecord = [(fields::PROVIDER_TITLE, "Humanities")].into_iter().collect();
    let inner: RawRecord = [
        (fields::PROVIDER_TITLE, "Second"),
        (fields::PRESENTATION_IDENTIFIER, "p-1"),
    ]
    .into_iter()
    .collect();

    outer.extend_from(&inner);

    assert_eq!(outer.values(fields::PROVIDER_TITLE), ["Humanities", "Second"]);
    assert!(outer.contains(fields::PRESENTATION_IDENTIFIER));
    assert_eq!(
        outer.keys().collect::<Vec<_>>(),
        vec![fields::PRESENTATION_IDENTIFIER, fields::PROVIDER_TITLE]
    );
}

#[test]
fn raw_record_serializes_as_plain_map() {
    let record: RawRecord = [(fields::COURSE_TITLE, "Latin")].into_iter().collect();
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"course_title":["Latin"]}"#);
}

#[test]
fn presentation_omits_absent_fields() {
    let mut presentation = NormalizedPresentation::new("daisy-course-1", "daisy-presentation-1");
    presentation.presentation_start = Some("2012-05-24T00:00:00Z".to_string());

    let value = serde_json::to_value(&presentation).expect("serialize presentation");
    let object = value.as_object().expect("json object");

    assert_eq!(object.len(), 3);
    assert_eq!(object["course_identifier"], "daisy-course-1");
    assert_eq!(object["presentation_start"], "2012-05-24T00:00:00Z");
    assert!(!object.contains_key("course_subjects"));
}

#[test]
fn presentation_flattens_extra_fields() {
    let mut extra = BTreeMap::new();
    extra.insert("presentation_duration".to_string(), "P1D".to_string());
    let presentation = NormalizedPresentation {
        extra,
        ..NormalizedPresentation::new("c", "p")
    };

    let json = serde_json::to_string(&presentation).expect("serialize presentation");
    let round: NormalizedPresentation = serde_json::from_str(&json).expect("deserialize");

    assert!(json.contains(r#""presentation_duration":"P1D""#));
    assert_eq!(round, presentation);
}

#[test]
fn application_window_requires_both_bounds() {
    let mut presentation = NormalizedPresentation::new("c", "p");
    presentation.presentation_apply_from = Some("2012-04-19T00:00:00Z".to_string());
    assert!(!presentation.has_application_window());
    presentation.presentation_apply_until = Some("2012-05-14T00:00:00Z".to_string());
    assert!(presentation.has_application_window());
}
