//! Field capture table.
//!
//! Static configuration describing which elements are captured in each
//! context and whether the value comes from the element text or from one of
//! its attributes. The context tracker only consults this table, so a new
//! capturable field needs a table entry and nothing else.

use catalog_model::{Context, fields};

use crate::namespaces::{DC_NS, MLO_NS, OXCAP_NS, XCRI_NS};

/// Namespaced element name as it appears in the capture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementName {
    pub namespace: &'static str,
    pub local_name: &'static str,
}

impl ElementName {
    pub const fn new(namespace: &'static str, local_name: &'static str) -> Self {
        Self {
            namespace,
            local_name,
        }
    }

    pub fn matches(&self, namespace: Option<&str>, local_name: &str) -> bool {
        namespace == Some(self.namespace) && local_name == self.local_name
    }
}

/// Where a captured value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Character data of the element and its descendants.
    Text,
    /// Value of the named attribute; the element text is not captured.
    Attribute(&'static str),
}

/// Field filled by a matching element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub field: &'static str,
    pub mode: CaptureMode,
}

/// Capture that applies only inside an excluded sub-structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedRule {
    pub element: ElementName,
    pub capture: Capture,
}

/// What happens when a table element opens in its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Capture(Capture),
    /// Non-capturing sub-structure. Descendants are not matched against the
    /// context rules; only the scoped rules apply.
    Exclude(&'static [ScopedRule]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCaptureRule {
    pub context: Context,
    pub element: ElementName,
    pub action: RuleAction,
}

const fn text(
    context: Context,
    namespace: &'static str,
    local_name: &'static str,
    field: &'static str,
) -> FieldCaptureRule {
    FieldCaptureRule {
        context,
        element: ElementName::new(namespace, local_name),
        action: RuleAction::Capture(Capture {
            field,
            mode: CaptureMode::Text,
        }),
    }
}

const fn attribute(
    context: Context,
    namespace: &'static str,
    local_name: &'static str,
    attribute: &'static str,
    field: &'static str,
) -> FieldCaptureRule {
    FieldCaptureRule {
        context,
        element: ElementName::new(namespace, local_name),
        action: RuleAction::Capture(Capture {
            field,
            mode: CaptureMode::Attribute(attribute),
        }),
    }
}

/// Elements that open a record-level context.
pub const STRUCTURE: [(ElementName, Context); 3] = [
    (ElementName::new(XCRI_NS, "provider"), Context::Provider),
    (ElementName::new(XCRI_NS, "course"), Context::Course),
    (ElementName::new(XCRI_NS, "presentation"), Context::Presentation),
];

static VENUE_RULES: [ScopedRule; 1] = [ScopedRule {
    element: ElementName::new(DC_NS, "identifier"),
    capture: Capture {
        field: fields::PRESENTATION_VENUE_IDENTIFIER,
        mode: CaptureMode::Text,
    },
}];

const DATE_ATTRIBUTE: &str = "dtf";

static RULES: [FieldCaptureRule; 20] = [
    text(Context::Provider, DC_NS, "identifier", fields::PROVIDER_IDENTIFIER),
    text(Context::Provider, DC_NS, "title", fields::PROVIDER_TITLE),
    text(Context::Course, DC_NS, "identifier", fields::COURSE_IDENTIFIER),
    text(Context::Course, DC_NS, "title", fields::COURSE_TITLE),
    text(Context::Course, DC_NS, "description", fields::COURSE_DESCRIPTION),
    text(Context::Course, DC_NS, "subject", fields::COURSE_SUBJECT),
    text(Context::Presentation, DC_NS, "identifier", fields::PRESENTATION_IDENTIFIER),
    text(Context::Presentation, DC_NS, "title", fields::PRESENTATION_TITLE),
    attribute(Context::Presentation, MLO_NS, "start", DATE_ATTRIBUTE, fields::PRESENTATION_START),
    attribute(Context::Presentation, XCRI_NS, "end", DATE_ATTRIBUTE, fields::PRESENTATION_END),
    attribute(
        Context::Presentation,
        XCRI_NS,
        "applyFrom",
        DATE_ATTRIBUTE,
        fields::PRESENTATION_APPLY_FROM,
    ),
    attribute(
        Context::Presentation,
        XCRI_NS,
        "applyUntil",
        DATE_ATTRIBUTE,
        fields::PRESENTATION_APPLY_UNTIL,
    ),
    text(
        Context::Presentation,
        OXCAP_NS,
        "bookingEndpoint",
        fields::PRESENTATION_BOOKING_ENDPOINT,
    ),
    text(
        Context::Presentation,
        OXCAP_NS,
        "memberApplyTo",
        fields::PRESENTATION_MEMBER_APPLY_TO,
    ),
    text(Context::Presentation, XCRI_NS, "applyTo", fields::PRESENTATION_APPLY_TO),
    text(
        Context::Presentation,
        XCRI_NS,
        "attendanceMode",
        fields::PRESENTATION_ATTENDANCE_MODE,
    ),
    text(
        Context::Presentation,
        XCRI_NS,
        "attendancePattern",
        fields::PRESENTATION_ATTENDANCE_PATTERN,
    ),
    text(Context::Presentation, XCRI_NS, "studyMode", fields::PRESENTATION_STUDY_MODE),
    text(Context::Presentation, MLO_NS, "places", fields::PRESENTATION_PLACES),
    FieldCaptureRule {
        context: Context::Presentation,
        element: ElementName::new(XCRI_NS, "venue"),
        action: RuleAction::Exclude(&VENUE_RULES),
    },
];

/// The full capture table.
pub fn rules() -> &'static [FieldCaptureRule] {
    &RULES
}

/// Context opened by a structural element, if any.
pub fn structural(namespace: Option<&str>, local_name: &str) -> Option<Context> {
    STRUCTURE
        .iter()
        .find(|(element, _)| element.matches(namespace, local_name))
        .map(|(_, context)| *context)
}

/// Rule for an element opened directly in `context`.
pub fn lookup(
    context: Context,
    namespace: Option<&str>,
    local_name: &str,
) -> Option<&'static RuleAction> {
    RULES
        .iter()
        .find(|rule| rule.context == context && rule.element.matches(namespace, local_name))
        .map(|rule| &rule.action)
}

/// Scoped rule for an element opened inside an exclusion.
pub fn lookup_scoped(
    scoped: &'static [ScopedRule],
    namespace: Option<&str>,
    local_name: &str,
) -> Option<&'static Capture> {
    scoped
        .iter()
        .find(|rule| rule.element.matches(namespace, local_name))
        .map(|rule| &rule.capture)
}

/// Every field key the table can produce, in table order.
pub fn captured_fields() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for rule in &RULES {
        match rule.action {
            RuleAction::Capture(capture) => keys.push(capture.field),
            RuleAction::Exclude(scoped) => {
                keys.extend(scoped.iter().map(|scoped| scoped.capture.field));
            }
        }
    }
    keys.dedup();
    keys
}
