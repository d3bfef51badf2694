//! Loosely-typed part specification data.
//!
//! Catalog records store specifications as schema-free JSON. `SpecValue` is
//! the single boundary where that data is inspected: every accessor returns
//! `None` on a kind mismatch instead of failing, and callers decide whether
//! an absent value means "cannot verify" or "malformed".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Specification key/value mapping of one part (or the parameters of one
/// rule). Sorted keys keep every derived output deterministic.
pub type Specifications = BTreeMap<String, SpecValue>;

/// A tagged specification value.
///
/// `Null` exists so that JSON `null` loads; accessors treat it as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<SpecValue>),
    Map(BTreeMap<String, SpecValue>),
}

impl SpecValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SpecValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpecValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SpecValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SpecValue]> {
        match self {
            SpecValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, SpecValue>> {
        match self {
            SpecValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Read a list of text items.
    ///
    /// A bare text value counts as a one-item list. A list containing any
    /// non-text item yields `None`.
    pub fn as_text_list(&self) -> Option<Vec<&str>> {
        match self {
            SpecValue::Text(s) => Some(vec![s.as_str()]),
            SpecValue::List(items) => items.iter().map(SpecValue::as_str).collect(),
            _ => None,
        }
    }

    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SpecValue::Null => "null",
            SpecValue::Bool(_) => "boolean",
            SpecValue::Number(_) => "number",
            SpecValue::Text(_) => "text",
            SpecValue::List(_) => "list",
            SpecValue::Map(_) => "mapping",
        }
    }
}

/// Render a number the way a catalog would print it: `500`, not `500.0`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Null => write!(f, "null"),
            SpecValue::Bool(b) => write!(f, "{b}"),
            SpecValue::Number(n) => write!(f, "{}", format_number(*n)),
            SpecValue::Text(s) => write!(f, "{s}"),
            SpecValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            SpecValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        SpecValue::Text(value)
    }
}

impl From<f64> for SpecValue {
    fn from(value: f64) -> Self {
        SpecValue::Number(value)
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        SpecValue::Number(value as f64)
    }
}

impl From<bool> for SpecValue {
    fn from(value: bool) -> Self {
        SpecValue::Bool(value)
    }
}

impl<T: Into<SpecValue>> From<Vec<T>> for SpecValue {
    fn from(values: Vec<T>) -> Self {
        SpecValue::List(values.into_iter().map(Into::into).collect())
    }
}
