//! Namespace URIs of the XCRI-CAP 1.2 catalog vocabularies.

/// XCRI-CAP catalog elements (`provider`, `course`, `presentation`, ...).
pub const XCRI_NS: &str = "http://xcri.org/profiles/1.2/catalog";

/// Local extension vocabulary (booking endpoints, member application links).
pub const OXCAP_NS: &str = "http://purl.ox.ac.uk/oxcap/ns/";

/// Metadata for Learning Opportunities.
pub const MLO_NS: &str = "http://purl.org/net/mlo";

/// Dublin Core elements.
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Conventional prefix for a known namespace URI.
pub fn prefix_for(namespace: &str) -> Option<&'static str> {
    match namespace {
        XCRI_NS => Some("xcri"),
        OXCAP_NS => Some("oxcap"),
        MLO_NS => Some("mlo"),
        DC_NS => Some("dc"),
        _ => None,
    }
}
