use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Validated numeric request parameters
///
/// A missing key means the caller did not supply the parameter; the rule's
/// declared default is applied at evaluation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    values: BTreeMap<String, f64>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used by tests and benches
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Value produced by a decision rule
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    Label(&'static str),
    Number(f64),
    List(Vec<&'static str>),
}

/// Single-key response body: `{ "<key>": <decision> }`
#[derive(Debug, Clone, PartialEq)]
pub struct RuleResponse {
    pub key: &'static str,
    pub value: Decision,
}

impl RuleResponse {
    pub fn new(key: &'static str, value: Decision) -> Self {
        Self { key, value }
    }
}

impl Serialize for RuleResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}
