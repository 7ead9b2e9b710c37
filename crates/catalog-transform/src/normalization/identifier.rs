//! Identifier extraction.
//!
//! Catalog elements usually carry several `dc:identifier` values: local codes
//! (`ABCD`, `12`) and one URI. Only the URI is globally unique, so it is the
//! one kept, flattened into a path-free key such as
//! `itlp-presentation-TDAE-106830`.

/// Returns true for `scheme://...` values with an RFC 3986 scheme.
pub fn is_uri(value: &str) -> bool {
    authority_start(value).is_some()
}

/// Byte offset just past `scheme://`.
fn authority_start(value: &str) -> Option<usize> {
    let end = value.find("://")?;
    let scheme = &value[..end];
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(end + 3)
}

/// Flatten a URI into an identifier.
///
/// `base` is removed when the URI starts with it; otherwise only the scheme
/// is removed. Path separators become `-` and leading or trailing separators
/// are trimmed.
pub fn identifier_from_uri(uri: &str, base: &str) -> String {
    let rest = match uri.strip_prefix(base) {
        Some(rest) if !base.is_empty() => rest,
        _ => authority_start(uri).map_or(uri, |start| &uri[start..]),
    };
    rest.replace('/', "-").trim_matches('-').to_string()
}

/// Identifier from the first URI-shaped value, if any.
pub fn extract_identifier(values: &[String], base: &str) -> Option<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| is_uri(value))
        .map(|uri| identifier_from_uri(uri, base))
        .find(|identifier| !identifier.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://course.data.example.org/id/";

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn uri_detection() {
        assert!(is_uri("https://course.data.ox.ac.uk/id/daisy/course/19300"));
        assert!(is_uri("urn+x.y-z://thing"));
        assert!(!is_uri("oxpoints:ABCD"));
        assert!(!is_uri("ABCD"));
        assert!(!is_uri("://missing-scheme"));
        assert!(!is_uri("1http://digit-first"));
    }

    #[test]
    fn picks_the_uri_among_local_codes() {
        let ids = values(&[
            "ABCD",
            "https://course.data.example.org/id/itlp/presentation/TDAE-106830",
        ]);
        assert_eq!(
            extract_identifier(&ids, BASE).as_deref(),
            Some("itlp-presentation-TDAE-106830")
        );
    }

    #[test]
    fn no_uri_means_no_identifier() {
        assert_eq!(extract_identifier(&values(&["ABCD", "12"]), BASE), None);
        assert_eq!(extract_identifier(&[], BASE), None);
    }

    #[test]
    fn first_uri_wins_wherever_it_appears() {
        let ids = values(&[
            "ABCD",
            "12",
            "https://course.data.example.org/id/daisy/presentation/14941",
            "https://course.data.example.org/id/daisy/presentation/99999",
        ]);
        assert_eq!(
            extract_identifier(&ids, BASE).as_deref(),
            Some("daisy-presentation-14941")
        );
    }

    #[test]
    fn foreign_uris_only_lose_their_scheme() {
        assert_eq!(
            identifier_from_uri("http://example.com/courses/42/", BASE),
            "example.com-courses-42"
        );
        assert_eq!(
            identifier_from_uri("https://course.data.example.org/id/x/", ""),
            "course.data.example.org-id-x"
        );
    }

    #[test]
    fn bare_base_is_skipped() {
        let ids = values(&[BASE, "https://course.data.example.org/id/itlp/course/1"]);
        assert_eq!(
            extract_identifier(&ids, BASE).as_deref(),
            Some("itlp-course-1")
        );
    }
}
