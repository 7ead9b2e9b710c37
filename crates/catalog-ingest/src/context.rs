//! Context-tracking state machine.
//!
//! [`ContextTracker`] consumes element-open, element-close and character-data
//! events and accumulates captured values per structural level. It knows
//! nothing about XML syntax; [`crate::reader::CatalogReader`] feeds it from a
//! byte stream, and tests feed it synthetic events directly.
//!
//! One frame is pushed for every open element and popped by its matching
//! close, so a context or exclusion ends exactly where the element that
//! started it ends.

use catalog_model::{Context, RawRecord};
use tracing::trace;

use crate::capture::{self, Capture, CaptureMode, RuleAction, ScopedRule};

/// Namespace-resolved element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub local_name: String,
}

impl QualifiedName {
    pub fn new(namespace: Option<&str>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local_name: local_name.into(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

/// Attribute as written in the document; `name` may carry a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name with any `prefix:` removed.
    pub fn local_name(&self) -> &str {
        split_qname(&self.name).1
    }
}

/// Split `prefix:local` into its parts.
pub fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

/// Document structure event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Open {
        name: QualifiedName,
        attributes: Vec<Attribute>,
    },
    Close(QualifiedName),
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Context(Context),
    Exclusion,
    Element,
}

#[derive(Debug)]
struct Frame {
    name: QualifiedName,
    role: Role,
    /// Field receiving character data inside this element, if any.
    text_target: Option<&'static str>,
}

#[derive(Debug)]
struct Level {
    context: Context,
    fields: RawRecord,
}

/// Tracks the open provider/course/presentation contexts and the values
/// captured in each of them.
#[derive(Debug, Default)]
pub struct ContextTracker {
    frames: Vec<Frame>,
    levels: Vec<Level>,
    exclusions: Vec<&'static [ScopedRule]>,
}

impl ContextTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost open context.
    pub fn active_context(&self) -> Option<Context> {
        self.levels.last().map(|level| level.context)
    }

    /// Whether the current position is inside a non-capturing element.
    pub fn is_excluded(&self) -> bool {
        !self.exclusions.is_empty()
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Drop all state, e.g. before reusing the tracker for another document.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.levels.clear();
        self.exclusions.clear();
    }

    /// Apply one event. Returns the finished record when a presentation closes.
    pub fn handle(&mut self, event: FeedEvent) -> Option<RawRecord> {
        match event {
            FeedEvent::Open { name, attributes } => {
                self.open(name, &attributes);
                None
            }
            FeedEvent::Close(name) => self.close(&name),
            FeedEvent::Text(text) => {
                self.text(&text);
                None
            }
        }
    }

    fn open(&mut self, name: QualifiedName, attributes: &[Attribute]) {
        let inherited = self.frames.last().and_then(|frame| frame.text_target);

        if let Some(scoped) = self.exclusions.last().copied() {
            let text_target = match capture::lookup_scoped(scoped, name.namespace(), &name.local_name)
            {
                Some(rule) => self.capture(rule, attributes),
                None => inherited,
            };
            self.push(name, Role::Element, text_target);
            return;
        }

        if let Some(context) = capture::structural(name.namespace(), &name.local_name) {
            trace!(%context, "context opened");
            self.levels.push(Level {
                context,
                fields: RawRecord::new(),
            });
            self.push(name, Role::Context(context), None);
            return;
        }

        let Some(context) = self.active_context() else {
            self.push(name, Role::Element, None);
            return;
        };

        match capture::lookup(context, name.namespace(), &name.local_name) {
            Some(RuleAction::Exclude(scoped)) => {
                self.exclusions.push(*scoped);
                self.push(name, Role::Exclusion, None);
            }
            Some(RuleAction::Capture(rule)) => {
                let text_target = self.capture(rule, attributes);
                self.push(name, Role::Element, text_target);
            }
            None => self.push(name, Role::Element, inherited),
        }
    }

    /// Apply a capture rule to an opening element and return the field that
    /// should receive its text.
    fn capture(&mut self, rule: &Capture, attributes: &[Attribute]) -> Option<&'static str> {
        match rule.mode {
            CaptureMode::Text => Some(rule.field),
            CaptureMode::Attribute(wanted) => {
                if let Some(attribute) = attributes.iter().find(|a| a.local_name() == wanted) {
                    self.record(rule.field, &attribute.value);
                }
                None
            }
        }
    }

    fn close(&mut self, name: &QualifiedName) -> Option<RawRecord> {
        // A close that does not match the innermost open element is ignored.
        if self.frames.last().is_none_or(|frame| frame.name != *name) {
            return None;
        }
        let frame = self.frames.pop()?;
        match frame.role {
            Role::Element => None,
            Role::Exclusion => {
                self.exclusions.pop();
                None
            }
            Role::Context(context) => {
                let level = self.levels.pop()?;
                trace!(%context, "context closed");
                if context != Context::Presentation {
                    return None;
                }
                let mut record = RawRecord::new();
                for outer in &self.levels {
                    record.extend_from(&outer.fields);
                }
                record.extend_from(&level.fields);
                Some(record)
            }
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(field) = self.frames.last().and_then(|frame| frame.text_target) {
            self.record(field, text);
        }
    }

    fn record(&mut self, field: &'static str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        if let Some(level) = self.levels.last_mut() {
            level.fields.push(field, value);
        }
    }

    fn push(&mut self, name: QualifiedName, role: Role, text_target: Option<&'static str>) {
        self.frames.push(Frame {
            name,
            role,
            text_target,
        });
    }
}
