//! Catalog parts as seen by the engine: an immutable snapshot per call.

use crate::spec_value::{SpecValue, Specifications};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CPU: &str = "CPU";
pub const GPU: &str = "GPU";
pub const MOTHERBOARD: &str = "Motherboard";
pub const PSU: &str = "PSU";
pub const CASE: &str = "Case";
pub const STORAGE: &str = "Storage";
pub const RAM: &str = "RAM";
pub const COOLER: &str = "Cooler";

/// Unique, immutable catalog identifier of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u64);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category tag of a part (`CPU`, `Motherboard`, ...). Compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartType(String);

impl PartType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PartType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for PartType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    #[serde(default)]
    pub name: String,
    pub part_type: PartType,
    #[serde(default)]
    pub specifications: Specifications,
}

impl Part {
    pub fn new(id: u64, name: impl Into<String>, part_type: impl Into<PartType>) -> Self {
        Self {
            id: PartId(id),
            name: name.into(),
            part_type: part_type.into(),
            specifications: Specifications::new(),
        }
    }

    /// Builder-style helper for fixtures and callers assembling parts by hand.
    pub fn with_spec(mut self, key: &str, value: impl Into<SpecValue>) -> Self {
        self.specifications.insert(key.to_string(), value.into());
        self
    }

    /// Look up a specification, treating explicit `null` as absent.
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specifications.get(key).filter(|v| !v.is_null())
    }

    /// Human label used in messages.
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            format!("{} #{}", self.part_type, self.id)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_type_and_id() {
        assert_eq!(Part::new(7, "", CPU).label(), "CPU #7");
        assert_eq!(Part::new(7, "Ryzen 7 7700X", CPU).label(), "Ryzen 7 7700X");
    }

    #[test]
    fn null_spec_is_absent() {
        let part = Part::new(1, "board", MOTHERBOARD).with_spec("socket", SpecValue::Null);
        assert!(part.spec("socket").is_none());
    }

    #[test]
    fn parses_catalog_record() {
        let part: Part = serde_json::from_str(
            r#"{"id":3,"name":"RM750","part_type":"PSU","specifications":{"wattage":750}}"#,
        )
        .expect("part should parse");
        assert_eq!(part.id, PartId(3));
        assert!(part.part_type == *PSU);
        assert_eq!(part.spec("wattage").and_then(SpecValue::as_f64), Some(750.0));
    }
}
