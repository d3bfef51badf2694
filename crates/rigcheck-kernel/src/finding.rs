//! Findings: the atomic outcome of evaluating one rule against one pair.
//!
//! Every finding carries a deterministic identifier so that two runs over
//! the same input can be compared finding by finding.
//!
//! Algorithm:
//! 1. Build the canonical finding key (schema, severity, ruleId, partIds, message)
//! 2. Serialize it with sorted keys and no whitespace
//! 3. findingId = "f1_" || lowercase hex of SHA256(keyBytes)

use crate::part::PartId;
use crate::rule::{CompatibilityRule, RuleId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;

/// How a finding affects the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocking: the build is incompatible.
    Issue,
    /// Advisory: something looks risky or could not be verified.
    Warning,
    /// The rule could not be evaluated at all (unknown type, malformed data).
    Indeterminate,
}

impl Severity {
    pub fn is_blocking(self) -> bool {
        matches!(self, Severity::Issue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Issue => "issue",
            Severity::Warning => "warning",
            Severity::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Deterministic content identifier.
    pub finding_id: String,
    pub severity: Severity,
    /// Originating rule; `None` for build-level checks such as required types.
    pub rule_id: Option<RuleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    /// Parts involved, ascending.
    pub part_ids: Vec<PartId>,
    pub message: String,
}

impl Finding {
    pub fn new(
        severity: Severity,
        rule: Option<&CompatibilityRule>,
        part_ids: impl IntoIterator<Item = PartId>,
        message: impl Into<String>,
    ) -> Self {
        let mut part_ids: Vec<PartId> = part_ids.into_iter().collect();
        part_ids.sort();
        part_ids.dedup();
        let message = message.into();
        let rule_id = rule.map(|r| r.id);
        let finding_id = compute_finding_id(severity, rule_id, &part_ids, &message);
        Self {
            finding_id,
            severity,
            rule_id,
            rule_type: rule.map(|r| r.rule_type.clone()),
            part_ids,
            message,
        }
    }

    pub fn issue(
        rule: &CompatibilityRule,
        part_ids: impl IntoIterator<Item = PartId>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Issue, Some(rule), part_ids, message)
    }

    pub fn warning(
        rule: &CompatibilityRule,
        part_ids: impl IntoIterator<Item = PartId>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, Some(rule), part_ids, message)
    }

    pub fn indeterminate(
        rule: &CompatibilityRule,
        part_ids: impl IntoIterator<Item = PartId>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Indeterminate, Some(rule), part_ids, message)
    }

    /// Report ordering: rule id (build-level findings first), then part ids,
    /// then message.
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.rule_id
            .cmp(&other.rule_id)
            .then_with(|| self.part_ids.cmp(&other.part_ids))
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.severity.cmp(&other.severity))
    }
}

/// Compute a finding ID from the canonical finding key fields.
pub fn compute_finding_id(
    severity: Severity,
    rule_id: Option<RuleId>,
    part_ids: &[PartId],
    message: &str,
) -> String {
    let key = canonical_finding_key(severity, rule_id, part_ids, message);
    let digest = Sha256::digest(key.to_string().as_bytes());
    format!("f1_{digest:x}")
}

/// `serde_json::Map` is a `BTreeMap` (no `preserve_order`), so `to_string`
/// on this value already has lexicographically sorted keys and no
/// insignificant whitespace.
fn canonical_finding_key(
    severity: Severity,
    rule_id: Option<RuleId>,
    part_ids: &[PartId],
    message: &str,
) -> Value {
    json!({
        "schema": 1,
        "severity": severity.as_str(),
        "ruleId": rule_id.map(|id| id.0),
        "partIds": part_ids.iter().map(|id| id.0).collect::<Vec<_>>(),
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_id_is_deterministic_and_content_sensitive() {
        let a = compute_finding_id(Severity::Issue, Some(RuleId(1)), &[PartId(1), PartId(2)], "x");
        let b = compute_finding_id(Severity::Issue, Some(RuleId(1)), &[PartId(1), PartId(2)], "x");
        let c = compute_finding_id(Severity::Warning, Some(RuleId(1)), &[PartId(1), PartId(2)], "x");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("f1_"));
        assert_eq!(a.len(), 3 + 64);
        assert!(a[3..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn part_ids_are_normalized() {
        let rule = CompatibilityRule::new(3, "CPU", "Motherboard", "socket_match");
        let finding = Finding::issue(&rule, [PartId(9), PartId(2), PartId(9)], "m");
        assert_eq!(finding.part_ids, vec![PartId(2), PartId(9)]);
        assert_eq!(finding.rule_type.as_deref(), Some("socket_match"));
    }

    #[test]
    fn build_level_findings_order_first() {
        let rule = CompatibilityRule::new(1, "CPU", "Motherboard", "socket_match");
        let ruled = Finding::warning(&rule, [PartId(1)], "a");
        let global = Finding::new(Severity::Issue, None, [], "z");
        assert_eq!(global.report_order(&ruled), Ordering::Less);
    }
}
