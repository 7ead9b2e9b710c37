pub mod context;
pub mod fields;
pub mod presentation;
pub mod record;

pub use context::Context;
pub use presentation::NormalizedPresentation;
pub use record::RawRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_field_prefixes() {
        assert_eq!(Context::Provider.field_prefix(), "provider");
        assert_eq!(Context::Course.field_prefix(), "course");
        assert_eq!(Context::Presentation.field_prefix(), "presentation");
    }

    #[test]
    fn fields_belong_to_their_context() {
        assert!(fields::PROVIDER_TITLE.starts_with(Context::Provider.field_prefix()));
        assert!(fields::COURSE_SUBJECT.starts_with(Context::Course.field_prefix()));
        assert!(fields::PRESENTATION_VENUE_IDENTIFIER
            .starts_with(Context::Presentation.field_prefix()));
    }
}
