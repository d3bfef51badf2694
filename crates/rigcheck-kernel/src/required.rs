//! Build composition: every mandatory category must be present.

use crate::finding::{Finding, Severity};
use crate::part::{Part, PartType};
use std::collections::BTreeSet;

pub const EMPTY_BUILD: &str = "Build contains no parts";

/// One issue per category in `required` with no part in `parts`, ascending
/// by category. An empty build always fails, even with nothing required.
pub fn validate_required_types(parts: &[Part], required: &BTreeSet<PartType>) -> Vec<Finding> {
    let present: BTreeSet<&PartType> = parts.iter().map(|p| &p.part_type).collect();
    let mut findings: Vec<Finding> = required
        .iter()
        .filter(|t| !present.contains(t))
        .map(|t| {
            Finding::new(
                Severity::Issue,
                None,
                [],
                format!("Missing required part type: {t}"),
            )
        })
        .collect();
    if parts.is_empty() && findings.is_empty() {
        findings.push(Finding::new(Severity::Issue, None, [], EMPTY_BUILD));
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{CPU, MOTHERBOARD};

    fn required() -> BTreeSet<PartType> {
        [CPU, MOTHERBOARD].into_iter().map(PartType::from).collect()
    }

    #[test]
    fn empty_build_misses_everything() {
        let findings = validate_required_types(&[], &required());
        let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required part type: CPU",
                "Missing required part type: Motherboard"
            ]
        );
        assert!(findings.iter().all(|f| f.severity == Severity::Issue));
        assert!(findings.iter().all(|f| f.rule_id.is_none()));
    }

    #[test]
    fn empty_build_fails_with_nothing_required() {
        let findings = validate_required_types(&[], &BTreeSet::new());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Issue);
        assert_eq!(findings[0].message, EMPTY_BUILD);
    }

    #[test]
    fn nothing_required_passes_any_non_empty_build() {
        let parts = vec![Part::new(1, "fan", "Fan")];
        assert!(validate_required_types(&parts, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn complete_build_passes() {
        let parts = vec![Part::new(1, "cpu", CPU), Part::new(2, "board", MOTHERBOARD)];
        assert!(validate_required_types(&parts, &required()).is_empty());
    }

    #[test]
    fn categories_are_exact() {
        let parts = vec![Part::new(1, "cpu", "cpu"), Part::new(2, "board", MOTHERBOARD)];
        let findings = validate_required_types(&parts, &required());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Missing required part type: CPU");
    }
}
