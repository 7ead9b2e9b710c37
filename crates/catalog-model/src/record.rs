use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Captured, not yet normalized values for one presentation.
///
/// Each field key maps to the fragments captured for it, in document order.
/// Fields are multi-valued because text can arrive in several runs and
/// elements such as `dc:subject` repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, Vec<String>>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a field. Empty values are ignored.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.fields.entry(key.into()).or_default().push(value);
    }

    /// Append every value of `other` after the values already held.
    pub fn extend_from(&mut self, other: &RawRecord) {
        for (key, values) in &other.fields {
            self.fields
                .entry(key.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
    }

    /// All values captured for a field, empty if none.
    pub fn values(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// First value captured for a field.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct fields captured.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (key, value) in iter {
            record.push(key, value);
        }
        record
    }
}
