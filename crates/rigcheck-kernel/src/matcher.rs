//! Rule selection for a pair of part categories.
//!
//! Rules are indexed by their normalized (sorted) category pair, so lookups
//! are symmetric by construction. Only active rules enter the index.

use crate::part::PartType;
use crate::rule::{CompatibilityRule, RuleKind};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct RuleMatcher<'a> {
    by_pair: BTreeMap<(PartType, PartType), Vec<&'a CompatibilityRule>>,
}

impl<'a> RuleMatcher<'a> {
    /// Index the active subset of `rules`.
    pub fn new(rules: &'a [CompatibilityRule]) -> Self {
        let mut by_pair: BTreeMap<_, Vec<&'a CompatibilityRule>> = BTreeMap::new();
        for rule in rules.iter().filter(|r| r.is_active) {
            let (low, high) = rule.category_pair();
            by_pair
                .entry((low.clone(), high.clone()))
                .or_default()
                .push(rule);
        }
        for bucket in by_pair.values_mut() {
            bucket.sort_by_key(|r| r.id);
        }
        Self { by_pair }
    }

    /// Active rules whose `{part_type_1, part_type_2}` equals `{a, b}`,
    /// ascending by rule id.
    pub fn for_pair(&self, a: &PartType, b: &PartType) -> &[&'a CompatibilityRule] {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        self.by_pair.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Active `power_requirement` rules that name `psu_type` on either side,
    /// ascending by rule id.
    pub fn power_rules(&self, psu_type: &PartType) -> Vec<&'a CompatibilityRule> {
        let mut out: Vec<&'a CompatibilityRule> = self
            .rules()
            .filter(|r| r.kind() == Some(RuleKind::PowerRequirement) && r.involves(psu_type))
            .collect();
        out.sort_by_key(|r| r.id);
        out
    }

    pub fn rules(&self) -> impl Iterator<Item = &'a CompatibilityRule> + '_ {
        self.by_pair.values().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.by_pair.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }
}
