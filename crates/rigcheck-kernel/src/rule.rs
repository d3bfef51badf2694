//! Compatibility rules: a constraint between two part categories.

use crate::error::ValidationError;
use crate::part::PartType;
use crate::spec_value::{SpecValue, Specifications};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub u64);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule types the engine knows how to evaluate.
///
/// Rule records carry the raw tag so that rules written for newer engines
/// still load; `RuleKind::from_str` fails for those and the engine takes its
/// fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    SocketMatch,
    FormFactor,
    PowerRequirement,
    InterfaceMatch,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::SocketMatch,
        RuleKind::FormFactor,
        RuleKind::PowerRequirement,
        RuleKind::InterfaceMatch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::SocketMatch => "socket_match",
            RuleKind::FormFactor => "form_factor",
            RuleKind::PowerRequirement => "power_requirement",
            RuleKind::InterfaceMatch => "interface_match",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unrecognized rule type `{s}`"))
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub id: RuleId,
    pub part_type_1: PartType,
    pub part_type_2: PartType,
    pub rule_type: String,
    #[serde(default)]
    pub rule_data: Specifications,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CompatibilityRule {
    pub fn new(
        id: u64,
        part_type_1: impl Into<PartType>,
        part_type_2: impl Into<PartType>,
        rule_type: impl Into<String>,
    ) -> Self {
        Self {
            id: RuleId(id),
            part_type_1: part_type_1.into(),
            part_type_2: part_type_2.into(),
            rule_type: rule_type.into(),
            rule_data: Specifications::new(),
            is_active: true,
        }
    }

    pub fn with_data(mut self, key: &str, value: impl Into<SpecValue>) -> Self {
        self.rule_data.insert(key.to_string(), value.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Parsed rule type, or `None` for tags this engine does not know.
    pub fn kind(&self) -> Option<RuleKind> {
        self.rule_type.parse().ok()
    }

    /// The rule's categories as an unordered pair, normalized to sorted order.
    pub fn category_pair(&self) -> (&PartType, &PartType) {
        if self.part_type_1 <= self.part_type_2 {
            (&self.part_type_1, &self.part_type_2)
        } else {
            (&self.part_type_2, &self.part_type_1)
        }
    }

    /// Whether `{a, b}` equals `{part_type_1, part_type_2}`.
    pub fn covers(&self, a: &PartType, b: &PartType) -> bool {
        (self.part_type_1 == *a && self.part_type_2 == *b)
            || (self.part_type_1 == *b && self.part_type_2 == *a)
    }

    pub fn involves(&self, part_type: &PartType) -> bool {
        self.part_type_1 == *part_type || self.part_type_2 == *part_type
    }

    /// Rule parameter lookup, treating explicit `null` as absent.
    pub fn data(&self, key: &str) -> Option<&SpecValue> {
        self.rule_data.get(key).filter(|v| !v.is_null())
    }

    /// Structural checks applied when a rule is created or loaded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (label, value) in [
            ("part_type_1", self.part_type_1.as_str()),
            ("part_type_2", self.part_type_2.as_str()),
            ("rule_type", self.rule_type.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidRule {
                    id: self.id,
                    reason: format!("{label} is required"),
                });
            }
        }
        Ok(())
    }
}
