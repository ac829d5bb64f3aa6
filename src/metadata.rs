use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Display labels, in the order the builder emits them.
pub mod labels {
    pub const ACCOUNT_OWNER: &str = "Account owner";
    pub const ACCOUNT_STATUS: &str = "Account status";
    pub const ACTIVE_CUSTOMERS: &str = "Active customers";
    pub const BILLING_SYSTEMS: &str = "Billing system(s)";
    pub const IMPORT_STATUS: &str = "Import status";
    pub const LAST_ACTIVE: &str = "Last active";
    pub const REVENUE_RECOGNITION: &str = "Revenue recognition access";
    pub const SAMPLE_DATA_PRESENT: &str = "Sample Data Present?";

    pub const ORDER: [&str; 8] = [
        ACCOUNT_OWNER,
        ACCOUNT_STATUS,
        ACTIVE_CUSTOMERS,
        BILLING_SYSTEMS,
        IMPORT_STATUS,
        LAST_ACTIVE,
        REVENUE_RECOGNITION,
        SAMPLE_DATA_PRESENT,
    ];
}

/// A single metadata value.
///
/// `Absent` is the only variant the final filter removes; `false`, `0`,
/// empty text and empty lists are data.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Absent,
    Text(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<String>),
    Timestamp(DateTime<Utc>),
}

impl MetadataValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, MetadataValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            MetadataValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Integer(i64::from(value))
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Boolean(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        MetadataValue::List(value)
    }
}

impl From<DateTime<Utc>> for MetadataValue {
    fn from(value: DateTime<Utc>) -> Self {
        MetadataValue::Timestamp(value)
    }
}

impl<T> From<Option<T>> for MetadataValue
where
    T: Into<MetadataValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(MetadataValue::Absent, Into::into)
    }
}

/// Ordered label → value mapping.
///
/// Serves both as the mutable draft handed to customization callbacks and as
/// the filtered result. Insertion order is preserved; overwriting a label
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountMetadata {
    entries: Vec<(String, MetadataValue)>,
}

impl AccountMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&MetadataValue> {
        self.position(label).map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut MetadataValue> {
        let idx = self.position(label)?;
        Some(&mut self.entries[idx].1)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Overwrites `label` in place, or appends it when new.
    ///
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        let label = label.into();
        let value = value.into();
        match self.position(&label) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    /// Removes `label`, keeping the order of the remaining entries.
    pub fn remove(&mut self, label: &str) -> Option<MetadataValue> {
        let idx = self.position(label)?;
        Some(self.entries.remove(idx).1)
    }

    /// Marks an existing entry absent so the final filter drops it.
    ///
    /// Returns `false` when the label is not present.
    pub fn set_absent(&mut self, label: &str) -> bool {
        match self.get_mut(label) {
            Some(value) => {
                *value = MetadataValue::Absent;
                true
            }
            None => false,
        }
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &MetadataValue) -> bool,
    {
        self.entries.retain(|(label, value)| keep(label, value));
    }

    /// Drops strictly absent entries.
    pub fn without_absent(mut self) -> Self {
        self.entries.retain(|(_, value)| !value.is_absent());
        self
    }

    /// JSON object with keys in mapping order.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(label, value)| {
                (
                    label.clone(),
                    serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == label)
    }
}

impl Serialize for AccountMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a AccountMetadata {
    type Item = &'a (String, MetadataValue);
    type IntoIter = std::slice::Iter<'a, (String, MetadataValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for AccountMetadata {
    type Item = (String, MetadataValue);
    type IntoIter = std::vec::IntoIter<(String, MetadataValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AccountMetadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = AccountMetadata::new();
        for (label, value) in iter {
            metadata.insert(label, value);
        }
        metadata
    }
}
