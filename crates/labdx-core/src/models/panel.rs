use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::result::RejectionReason;
use crate::error::CoreError;

/// A raw lab reading as supplied by the caller: a number, or text that
/// should hold one. Anything else (`null` for a missing reading, booleans,
/// nested values) is kept as-is and rejected when parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl LabValue {
    /// Resolve to a finite number.
    pub fn parse(&self) -> Result<f64, RejectionReason> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| RejectionReason::NotANumber)?,
            Self::Other(_) => return Err(RejectionReason::NotANumber),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RejectionReason::NotFinite)
        }
    }
}

impl fmt::Display for LabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for LabValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LabValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LabValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One patient's lab readings, keyed by parameter identifier.
///
/// Entry order is the caller's order and is kept through (de)serialization,
/// so report ordering is predictable from input ordering. Re-inserting a key
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabPanel {
    entries: Vec<(String, LabValue)>,
}

impl LabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<LabValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&LabValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON object of `key: value` pairs.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, V> FromIterator<(K, V)> for LabPanel
where
    K: Into<String>,
    V: Into<LabValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut panel = Self::new();
        for (key, value) in iter {
            panel.insert(key, value);
        }
        panel
    }
}

impl Serialize for LabPanel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct LabPanelVisitor;

impl<'de> Visitor<'de> for LabPanelVisitor {
    type Value = LabPanel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of parameter keys to lab values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut panel = LabPanel::new();
        while let Some((key, value)) = access.next_entry::<String, LabValue>()? {
            panel.insert(key, value);
        }
        Ok(panel)
    }
}

impl<'de> Deserialize<'de> for LabPanel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LabPanelVisitor)
    }
}
