//! Report aggregation: ordered, deduplicated issues and warnings.

use crate::finding::Finding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The externally visible verdict. Field names follow the existing wire
/// contract (`is_compatible`, `issues`, `warnings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub is_compatible: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl CompatibilityReport {
    pub fn summary(&self) -> String {
        format!(
            "{} ({} issue{}, {} warning{})",
            if self.is_compatible {
                "compatible"
            } else {
                "incompatible"
            },
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" },
            self.warnings.len(),
            if self.warnings.len() == 1 { "" } else { "s" },
        )
    }
}

/// Sort findings into report order in place.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(Finding::report_order);
}

/// Partition findings into blocking issues and advisory warnings.
///
/// Findings are ordered by originating rule (build-level findings first) and
/// then by part ids; an exact message repeated within a list is kept once,
/// at its first position.
pub fn aggregate(mut findings: Vec<Finding>) -> CompatibilityReport {
    sort_findings(&mut findings);

    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_issues = BTreeSet::new();
    let mut seen_warnings = BTreeSet::new();

    for finding in findings {
        let (list, seen) = if finding.severity.is_blocking() {
            (&mut issues, &mut seen_issues)
        } else {
            (&mut warnings, &mut seen_warnings)
        };
        if seen.insert(finding.message.clone()) {
            list.push(finding.message);
        }
    }

    CompatibilityReport {
        is_compatible: issues.is_empty(),
        issues,
        warnings,
    }
}
