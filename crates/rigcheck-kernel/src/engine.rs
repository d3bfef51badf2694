//! The rule engine: pairwise traversal, power budget, required categories.
//!
//! `evaluate` is a pure function of `(parts, rules)`:
//!
//! 1. reject duplicate part ids,
//! 2. index the active rules,
//! 3. check required categories once over the whole build,
//! 4. for every unordered pair of parts (ascending ids), evaluate every
//!    matching rule; a pair can violate several rules at once and all of
//!    them are reported,
//! 5. evaluate each power rule once per PSU in the build, using the full
//!    build as context,
//! 6. aggregate into a report.

use crate::comparator::{compare, power_requirement};
use crate::config::EngineConfig;
use crate::error::ValidationError;
use crate::finding::Finding;
use crate::matcher::RuleMatcher;
use crate::part::Part;
use crate::report::{CompatibilityReport, aggregate, sort_findings};
use crate::required::validate_required_types;
use crate::rule::{CompatibilityRule, RuleKind};

#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: EngineConfig,
}

impl RuleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a build and produce the compatibility report.
    pub fn evaluate(
        &self,
        parts: &[Part],
        rules: &[CompatibilityRule],
    ) -> Result<CompatibilityReport, ValidationError> {
        Ok(aggregate(self.findings(parts, rules)?))
    }

    /// Every finding for a build, in report order, before deduplication.
    pub fn findings(
        &self,
        parts: &[Part],
        rules: &[CompatibilityRule],
    ) -> Result<Vec<Finding>, ValidationError> {
        let ordered = ordered_unique(parts)?;
        let matcher = RuleMatcher::new(rules);

        let mut findings = validate_required_types(parts, &self.config.required_types);

        for (i, first) in ordered.iter().enumerate() {
            for second in &ordered[i + 1..] {
                for rule in matcher.for_pair(&first.part_type, &second.part_type) {
                    if self.is_budget_rule(rule) {
                        continue;
                    }
                    findings.extend(compare(rule, first, second));
                }
            }
        }

        let psus: Vec<&Part> = ordered
            .iter()
            .copied()
            .filter(|p| p.part_type == self.config.psu_type)
            .collect();
        for rule in matcher.power_rules(&self.config.psu_type) {
            for psu in &psus {
                findings.extend(power_requirement(
                    rule,
                    psu,
                    ordered.iter().copied(),
                    self.config.default_margin,
                ));
            }
        }

        sort_findings(&mut findings);
        Ok(findings)
    }

    /// Check two specific parts against the rules for their category pair.
    ///
    /// No required-category check. A power rule for the pair is evaluated
    /// with the two parts as the whole build.
    pub fn check_pair(
        &self,
        a: &Part,
        b: &Part,
        rules: &[CompatibilityRule],
    ) -> Result<CompatibilityReport, ValidationError> {
        if a.id == b.id {
            return Err(ValidationError::DuplicatePart { id: a.id });
        }
        let ordered = if a.id < b.id { [a, b] } else { [b, a] };
        let matcher = RuleMatcher::new(rules);

        let mut findings = Vec::new();
        for rule in matcher.for_pair(&a.part_type, &b.part_type) {
            if !self.is_budget_rule(rule) {
                findings.extend(compare(rule, a, b));
                continue;
            }
            for psu in ordered
                .iter()
                .filter(|p| p.part_type == self.config.psu_type)
            {
                findings.extend(power_requirement(
                    rule,
                    psu,
                    ordered,
                    self.config.default_margin,
                ));
            }
        }
        Ok(aggregate(findings))
    }

    /// Power rules naming the PSU category are evaluated per PSU, not per pair.
    fn is_budget_rule(&self, rule: &CompatibilityRule) -> bool {
        rule.kind() == Some(RuleKind::PowerRequirement) && rule.involves(&self.config.psu_type)
    }
}

/// Evaluate with the default configuration (CPU and Motherboard required,
/// `PSU` power category, 0.8 safety margin).
pub fn evaluate(
    parts: &[Part],
    rules: &[CompatibilityRule],
) -> Result<CompatibilityReport, ValidationError> {
    RuleEngine::default().evaluate(parts, rules)
}

/// Parts sorted by id; duplicate ids are a caller defect.
fn ordered_unique(parts: &[Part]) -> Result<Vec<&Part>, ValidationError> {
    let mut ordered: Vec<&Part> = parts.iter().collect();
    ordered.sort_by_key(|p| p.id);
    if let Some(pair) = ordered.windows(2).find(|w| w[0].id == w[1].id) {
        return Err(ValidationError::DuplicatePart { id: pair[0].id });
    }
    Ok(ordered)
}
