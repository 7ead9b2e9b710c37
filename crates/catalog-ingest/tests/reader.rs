//! Integration tests for the streaming catalog reader.

use catalog_ingest::{CatalogReader, IngestError, ReaderOptions, read_records};
use catalog_model::{RawRecord, fields};

const CATALOG: &str = include_str!("data/xcri.xml");

fn records() -> Vec<RawRecord> {
    read_records(CATALOG.as_bytes(), &ReaderOptions::default()).expect("read catalog")
}

#[test]
fn one_record_per_presentation() {
    assert_eq!(records().len(), 4);
}

#[test]
fn first_presentation_fields() {
    let records = records();
    let first = &records[0];

    assert_eq!(first.values(fields::PROVIDER_TITLE), ["Humanities Division"]);
    assert_eq!(
        first.values(fields::PROVIDER_IDENTIFIER),
        [
            "https://course.data.ox.ac.uk/id/provider/humdiv",
            "HUMDIV"
        ]
    );
    assert_eq!(
        first.values(fields::COURSE_TITLE),
        ["Monograph Publishing Workshop"]
    );
    assert_eq!(
        first.values(fields::COURSE_DESCRIPTION),
        ["A practical workshop on publishing a first monograph."]
    );
    assert_eq!(first.values(fields::COURSE_SUBJECT).len(), 1);
    assert_eq!(
        first.values(fields::PRESENTATION_IDENTIFIER),
        [
            "ABCD",
            "https://course.data.ox.ac.uk/id/itlp/presentation/TDAE-106830"
        ]
    );
    assert_eq!(first.values(fields::PRESENTATION_START), ["2012-06-15"]);
    assert_eq!(first.values(fields::PRESENTATION_END), ["2012-06-15"]);
    assert_eq!(
        first.first(fields::PRESENTATION_BOOKING_ENDPOINT),
        Some("https://weblearn.ox.ac.uk/course-signup/rest/course/5E00D50013")
    );
    assert_eq!(
        first.first(fields::PRESENTATION_ATTENDANCE_PATTERN),
        Some("Daytime")
    );
    assert_eq!(first.first(fields::PRESENTATION_ATTENDANCE_MODE), Some("Campus"));
    assert_eq!(
        first.first(fields::PRESENTATION_MEMBER_APPLY_TO),
        Some("http://courses.it.ox.ac.uk/detail/TRWF")
    );
    assert_eq!(
        first.first(fields::PRESENTATION_APPLY_TO),
        Some("http://courses.it.ox.ac.uk/detail/TDAE")
    );
}

#[test]
fn venue_only_contributes_its_identifier() {
    let records = records();

    assert_eq!(
        records[0].values(fields::PRESENTATION_VENUE_IDENTIFIER),
        ["oxpoints:ABCD"]
    );
    assert_eq!(
        records[2].values(fields::PRESENTATION_VENUE_IDENTIFIER),
        ["oxpoints:FFFF"]
    );
    for record in &records {
        // The venue's nested provider never replaces the real provider.
        assert_eq!(record.values(fields::PROVIDER_TITLE), ["Humanities Division"]);
        assert!(!record.contains(fields::PRESENTATION_TITLE));
    }
}

#[test]
fn course_fields_are_shared_by_sibling_presentations() {
    let records = records();
    let (second, third) = (&records[1], &records[2]);

    assert_eq!(
        second.values(fields::COURSE_SUBJECT),
        ["Digital Humanities", "Computing"]
    );
    assert_eq!(second.values(fields::COURSE_SUBJECT), third.values(fields::COURSE_SUBJECT));
    assert_eq!(second.first(fields::COURSE_TITLE), third.first(fields::COURSE_TITLE));
    assert_eq!(second.first(fields::PRESENTATION_STUDY_MODE), Some("Part time"));
    assert!(!third.contains(fields::PRESENTATION_STUDY_MODE));
    assert_eq!(third.first(fields::PRESENTATION_PLACES), Some("20"));
}

#[test]
fn entities_and_cdata_join_into_one_fragment() {
    let records = records();
    assert_eq!(
        records[1].values(fields::COURSE_DESCRIPTION),
        ["Text & data mining for <humanities> scholars."]
    );
}

#[test]
fn course_fields_reset_between_courses() {
    let records = records();
    let last = &records[3];

    assert_eq!(
        last.values(fields::COURSE_TITLE),
        ["Lunchtime Briefings on the Digital Humanities"]
    );
    assert!(!last.contains(fields::COURSE_SUBJECT));
    assert!(!last.contains(fields::COURSE_DESCRIPTION));
    assert_eq!(last.values(fields::PRESENTATION_APPLY_FROM), ["2012-04-19"]);
    assert_eq!(last.values(fields::PRESENTATION_APPLY_UNTIL), ["2012-05-14"]);
}

#[test]
fn reader_counts_emitted_records() {
    let mut reader = CatalogReader::new(CATALOG.as_bytes(), &ReaderOptions::default());
    assert!(reader.next().is_some());
    assert!(reader.next().is_some());
    assert_eq!(reader.records_emitted(), 2);
    assert_eq!(reader.by_ref().count(), 2);
    assert!(reader.next().is_none());
}

#[test]
fn unprefixed_elements_outside_the_catalog_namespace_are_ignored() {
    let xml = r#"<catalog xmlns:dc="http://purl.org/dc/elements/1.1/">
        <presentation><dc:identifier>x</dc:identifier></presentation>
    </catalog>"#;
    let records = read_records(xml.as_bytes(), &ReaderOptions::default()).expect("read");
    assert!(records.is_empty());
}

#[test]
fn mismatched_tags_are_fatal() {
    let xml = r#"<catalog xmlns="http://xcri.org/profiles/1.2/catalog">
        <provider><course></provider>
    </catalog>"#;
    let mut reader = CatalogReader::new(xml.as_bytes(), &ReaderOptions::default());
    let result = reader.next().expect("an error item");
    assert!(matches!(result, Err(IngestError::Malformed { .. })));
    assert!(reader.next().is_none());
}

#[test]
fn truncated_documents_are_fatal() {
    let cut = &CATALOG[..CATALOG.find("</provider>").expect("closing provider")];
    let result = read_records(cut.as_bytes(), &ReaderOptions::default());
    assert!(matches!(
        result,
        Err(IngestError::Truncated { .. } | IngestError::Malformed { .. })
    ));
}
