//! Specification comparators, one per rule type.
//!
//! Each comparator inspects the specifications of the parts a rule applies
//! to and returns at most one finding. Comparators never fail: missing keys
//! become "cannot verify" warnings, malformed data becomes an indeterminate
//! finding.
//!
//! Roles (which part is the case, which is the host) are resolved from the
//! data, never from the rule's orientation, and messages name parts in
//! ascending id order. Swapping `part_type_1`/`part_type_2` on a rule does
//! not change any output.

use crate::finding::Finding;
use crate::part::Part;
use crate::rule::{CompatibilityRule, RuleKind};
use crate::spec_value::{SpecValue, format_number};

pub const DEFAULT_SOCKET_KEY: &str = "socket";
pub const DEFAULT_FORM_FACTOR_KEY: &str = "form_factor";
pub const DEFAULT_SUPPORTED_FORM_FACTORS_KEY: &str = "supported_form_factors";
pub const DEFAULT_INTERFACE_KEY: &str = "interface";
pub const DEFAULT_SUPPORTED_INTERFACES_KEY: &str = "supported_interfaces";
pub const DEFAULT_POWER_DRAW_KEY: &str = "power_draw";
pub const DEFAULT_WATTAGE_KEY: &str = "wattage";

/// Evaluate one pairwise rule against two distinct parts.
///
/// `power_requirement` rules reach this path only when they do not name the
/// power supply category; such rules cannot be evaluated.
pub fn compare(rule: &CompatibilityRule, a: &Part, b: &Part) -> Option<Finding> {
    let (first, second) = if a.id <= b.id { (a, b) } else { (b, a) };
    match rule.kind() {
        Some(RuleKind::SocketMatch) => socket_match(rule, first, second),
        Some(RuleKind::FormFactor) => form_factor(rule, first, second),
        Some(RuleKind::InterfaceMatch) => interface_match(rule, first, second),
        Some(RuleKind::PowerRequirement) => Some(not_evaluable(
            rule,
            first,
            second,
            "power_requirement rules must name the power supply category",
        )),
        None => Some(unrecognized(rule, first, second)),
    }
}

/// Exact equality of one specification key on both parts.
pub fn socket_match(rule: &CompatibilityRule, first: &Part, second: &Part) -> Option<Finding> {
    let key = match key_param(rule, "key", DEFAULT_SOCKET_KEY) {
        Ok(key) => key,
        Err(detail) => return Some(not_evaluable(rule, first, second, &detail)),
    };
    let ids = [first.id, second.id];

    match (first.spec(key), second.spec(key)) {
        (Some(v1), Some(v2)) if v1 == v2 => None,
        (Some(v1), Some(v2)) => Some(Finding::issue(
            rule,
            ids,
            format!(
                "{} ({key}: {v1}) is incompatible with {} ({key}: {v2})",
                first.label(),
                second.label()
            ),
        )),
        (None, None) => Some(Finding::warning(
            rule,
            ids,
            format!(
                "Cannot verify {key} compatibility: {} and {} do not declare `{key}`",
                first.label(),
                second.label()
            ),
        )),
        (None, Some(_)) | (Some(_), None) => {
            let missing = if first.spec(key).is_none() {
                first
            } else {
                second
            };
            Some(Finding::warning(
                rule,
                ids,
                format!(
                    "Cannot verify {key} compatibility: {} does not declare `{key}`",
                    missing.label()
                ),
            ))
        }
    }
}

/// Membership of a board's form factor in a container's supported list.
pub fn form_factor(rule: &CompatibilityRule, first: &Part, second: &Part) -> Option<Finding> {
    let params = key_param(rule, "supported_key", DEFAULT_SUPPORTED_FORM_FACTORS_KEY).and_then(
        |supported| {
            key_param(rule, "form_factor_key", DEFAULT_FORM_FACTOR_KEY).map(|ff| (supported, ff))
        },
    );
    let (supported_key, ff_key) = match params {
        Ok(keys) => keys,
        Err(detail) => return Some(not_evaluable(rule, first, second, &detail)),
    };
    let ids = [first.id, second.id];

    let Some((container, board)) = resolve_roles(first, second, supported_key) else {
        return Some(Finding::warning(
            rule,
            ids,
            format!(
                "Cannot verify form factor fit: neither {} nor {} declares `{supported_key}`",
                first.label(),
                second.label()
            ),
        ));
    };

    let supported = match read_text_list(container, supported_key) {
        Ok(list) => list,
        Err(detail) => return Some(not_evaluable(rule, first, second, &detail)),
    };
    if supported.is_empty() {
        return Some(Finding::warning(
            rule,
            ids,
            format!(
                "Cannot verify form factor fit: {} declares an empty `{supported_key}` list",
                container.label()
            ),
        ));
    }

    let form_factor = match board.spec(ff_key) {
        None => {
            return Some(Finding::warning(
                rule,
                ids,
                format!(
                    "Cannot verify form factor fit: {} does not declare `{ff_key}`",
                    board.label()
                ),
            ));
        }
        Some(value) => match value.as_str() {
            Some(s) => s,
            None => {
                let detail = malformed_spec(board, ff_key, value, "a text value");
                return Some(not_evaluable(rule, first, second, &detail));
            }
        },
    };

    if supported.contains(&form_factor) {
        None
    } else {
        Some(Finding::issue(
            rule,
            ids,
            format!(
                "{} (form factor: {form_factor}) does not fit {} (supports: {})",
                board.label(),
                container.label(),
                supported.join(", ")
            ),
        ))
    }
}

/// A device's interface against a host's supported-interfaces list, with an
/// optional `required_interface` the device must provide.
pub fn interface_match(rule: &CompatibilityRule, first: &Part, second: &Part) -> Option<Finding> {
    let params = key_param(rule, "interface_key", DEFAULT_INTERFACE_KEY).and_then(|iface| {
        key_param(rule, "supported_key", DEFAULT_SUPPORTED_INTERFACES_KEY)
            .map(|supported| (iface, supported))
    });
    let (iface_key, supported_key) = match params {
        Ok(keys) => keys,
        Err(detail) => return Some(not_evaluable(rule, first, second, &detail)),
    };
    let required = match rule.data("required_interface") {
        None => None,
        Some(value) => match value.as_str() {
            Some(s) => Some(s),
            None => {
                let detail = format!(
                    "rule_data.required_interface must be text, got {} `{value}`",
                    value.kind()
                );
                return Some(not_evaluable(rule, first, second, &detail));
            }
        },
    };
    let ids = [first.id, second.id];

    let Some((host, device)) = resolve_roles(first, second, supported_key) else {
        return match required {
            Some(required) => required_interface_only(rule, first, second, iface_key, required),
            None => Some(Finding::warning(
                rule,
                ids,
                format!(
                    "Cannot verify interface compatibility: neither {} nor {} declares `{supported_key}`",
                    first.label(),
                    second.label()
                ),
            )),
        };
    };

    let supported = match read_text_list(host, supported_key) {
        Ok(list) => list,
        Err(detail) => return Some(not_evaluable(rule, first, second, &detail)),
    };
    if supported.is_empty() {
        return Some(Finding::warning(
            rule,
            ids,
            format!(
                "Cannot verify interface compatibility: {} declares an empty `{supported_key}` list",
                host.label()
            ),
        ));
    }

    let interface = match device.spec(iface_key) {
        None => {
            return Some(Finding::warning(
                rule,
                ids,
                format!(
                    "Cannot verify interface compatibility: {} does not declare `{iface_key}`",
                    device.label()
                ),
            ));
        }
        Some(value) => match value.as_str() {
            Some(s) => s,
            None => {
                let detail = malformed_spec(device, iface_key, value, "a text value");
                return Some(not_evaluable(rule, first, second, &detail));
            }
        },
    };

    if let Some(required) = required.filter(|r| *r != interface) {
        return Some(Finding::issue(
            rule,
            ids,
            format!(
                "Interface mismatch: {required} required, {} provides {interface}",
                device.label()
            ),
        ));
    }

    if supported.contains(&interface) {
        None
    } else {
        Some(Finding::issue(
            rule,
            ids,
            format!(
                "{} ({iface_key}: {interface}) is not supported by {} (supports: {})",
                device.label(),
                host.label(),
                supported.join(", ")
            ),
        ))
    }
}

/// Neither part declares a supported list, but the rule names the interface
/// that one of them must provide.
fn required_interface_only(
    rule: &CompatibilityRule,
    first: &Part,
    second: &Part,
    iface_key: &str,
    required: &str,
) -> Option<Finding> {
    let ids = [first.id, second.id];
    let declared: Vec<(&Part, &SpecValue)> = [first, second]
        .into_iter()
        .filter_map(|part| part.spec(iface_key).map(|v| (part, v)))
        .collect();
    if declared.is_empty() {
        return Some(Finding::warning(
            rule,
            ids,
            format!(
                "Cannot verify interface compatibility: {} and {} do not declare `{iface_key}`",
                first.label(),
                second.label()
            ),
        ));
    }
    if declared.iter().any(|(_, v)| v.as_str() == Some(required)) {
        return None;
    }
    let provided = declared
        .iter()
        .map(|(part, v)| format!("{} provides {v}", part.label()))
        .collect::<Vec<_>>()
        .join(", ");
    Some(Finding::issue(
        rule,
        ids,
        format!("Interface mismatch: {required} required, {provided}"),
    ))
}

/// Total declared power draw across the whole build against one PSU.
///
/// This is the one comparator that is not strictly pairwise: `parts` is the
/// full build and the finding names only the PSU.
pub fn power_requirement<'p>(
    rule: &CompatibilityRule,
    psu: &Part,
    parts: impl IntoIterator<Item = &'p Part>,
    default_margin: f64,
) -> Option<Finding> {
    let ids = [psu.id];
    let params = key_param(rule, "draw_key", DEFAULT_POWER_DRAW_KEY).and_then(|draw| {
        key_param(rule, "wattage_key", DEFAULT_WATTAGE_KEY).map(|wattage| (draw, wattage))
    });
    let (draw_key, wattage_key) = match params {
        Ok(keys) => keys,
        Err(detail) => return Some(power_not_evaluable(rule, psu, &detail)),
    };

    let margin = match rule.data("margin") {
        None => default_margin,
        Some(value) => match value.as_f64() {
            Some(m) if m > 0.0 && m <= 1.0 => m,
            _ => {
                let detail = format!(
                    "rule_data.margin must be a number in (0, 1], got {} `{value}`",
                    value.kind()
                );
                return Some(power_not_evaluable(rule, psu, &detail));
            }
        },
    };

    let wattage = match psu.spec(wattage_key) {
        None => {
            return Some(Finding::warning(
                rule,
                ids,
                format!(
                    "Cannot verify power budget: {} does not declare `{wattage_key}`",
                    psu.label()
                ),
            ));
        }
        Some(value) => match value.as_f64() {
            Some(w) => w,
            None => {
                let detail = malformed_spec(psu, wattage_key, value, "a number");
                return Some(power_not_evaluable(rule, psu, &detail));
            }
        },
    };

    let mut total = 0.0;
    let mut malformed = Vec::new();
    for part in parts {
        if let Some(value) = part.spec(draw_key) {
            match value.as_f64() {
                Some(draw) => total += draw,
                None => malformed.push(malformed_spec(part, draw_key, value, "a number")),
            }
        }
    }
    if !malformed.is_empty() {
        return Some(power_not_evaluable(rule, psu, &malformed.join("; ")));
    }

    let budget = wattage * margin;
    if total > wattage {
        Some(Finding::issue(
            rule,
            ids,
            format!(
                "Total power draw ({}W) exceeds PSU capacity: {} provides {}W",
                format_watts(total),
                psu.label(),
                format_watts(wattage)
            ),
        ))
    } else if total > budget {
        Some(Finding::warning(
            rule,
            ids,
            format!(
                "Total power draw ({}W) exceeds the {}% safety margin of {} ({}W of {}W)",
                format_watts(total),
                format_watts(margin * 100.0),
                psu.label(),
                format_watts(budget),
                format_watts(wattage)
            ),
        ))
    } else {
        None
    }
}

/// Fallback arm for rule types this engine does not understand.
pub fn unrecognized(rule: &CompatibilityRule, first: &Part, second: &Part) -> Finding {
    Finding::indeterminate(
        rule,
        [first.id, second.id],
        format!(
            "Rule {} has unrecognized type `{}`; could not evaluate {} and {}",
            rule.id,
            rule.rule_type,
            first.label(),
            second.label()
        ),
    )
}

fn not_evaluable(rule: &CompatibilityRule, first: &Part, second: &Part, detail: &str) -> Finding {
    Finding::indeterminate(
        rule,
        [first.id, second.id],
        format!(
            "Rule {} ({}) could not be evaluated for {} and {}: {detail}",
            rule.id,
            rule.rule_type,
            first.label(),
            second.label()
        ),
    )
}

fn power_not_evaluable(rule: &CompatibilityRule, psu: &Part, detail: &str) -> Finding {
    Finding::indeterminate(
        rule,
        [psu.id],
        format!(
            "Rule {} ({}) could not be evaluated for {}: {detail}",
            rule.id,
            rule.rule_type,
            psu.label()
        ),
    )
}

/// A specification-key parameter from `rule_data`, or `default` when unset.
fn key_param<'r>(
    rule: &'r CompatibilityRule,
    name: &str,
    default: &'static str,
) -> Result<&'r str, String> {
    match rule.data(name) {
        None => Ok(default),
        Some(value) => match value.as_str().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(format!(
                "rule_data.{name} must be a non-empty text key, got {} `{value}`",
                value.kind()
            )),
        },
    }
}

/// The lower-id part declaring `supported_key` holds the list; the other
/// part is checked against it.
fn resolve_roles<'p>(
    first: &'p Part,
    second: &'p Part,
    supported_key: &str,
) -> Option<(&'p Part, &'p Part)> {
    if first.spec(supported_key).is_some() {
        Some((first, second))
    } else if second.spec(supported_key).is_some() {
        Some((second, first))
    } else {
        None
    }
}

fn read_text_list<'p>(part: &'p Part, key: &str) -> Result<Vec<&'p str>, String> {
    let value = part
        .spec(key)
        .ok_or_else(|| format!("{} does not declare `{key}`", part.label()))?;
    value
        .as_text_list()
        .ok_or_else(|| malformed_spec(part, key, value, "a list of text values"))
}

fn malformed_spec(part: &Part, key: &str, value: &SpecValue, expected: &str) -> String {
    format!(
        "{} has malformed `{key}` ({} `{value}`), expected {expected}",
        part.label(),
        value.kind()
    )
}

fn format_watts(value: f64) -> String {
    format_number((value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use crate::part::{CASE, CPU, GPU, MOTHERBOARD, PSU, STORAGE};

    fn cpu(socket: &str) -> Part {
        Part::new(1, "Ryzen 7 7700X", CPU).with_spec("socket", socket)
    }

    fn board(socket: &str) -> Part {
        Part::new(2, "B650 Tomahawk", MOTHERBOARD).with_spec("socket", socket)
    }

    #[test]
    fn socket_equal_passes() {
        let rule = CompatibilityRule::new(1, CPU, MOTHERBOARD, "socket_match");
        assert_eq!(socket_match(&rule, &cpu("AM5"), &board("AM5")), None);
    }

    #[test]
    fn socket_mismatch_is_issue() {
        let rule = CompatibilityRule::new(1, CPU, MOTHERBOARD, "socket_match");
        let finding = socket_match(&rule, &cpu("AM5"), &board("LGA1700")).expect("finding");
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(
            finding.message,
            "Ryzen 7 7700X (socket: AM5) is incompatible with B650 Tomahawk (socket: LGA1700)"
        );
    }

    #[test]
    fn socket_missing_is_warning() {
        let rule = CompatibilityRule::new(1, CPU, MOTHERBOARD, "socket_match");
        let bare = Part::new(2, "Mystery Board", MOTHERBOARD);
        let finding = socket_match(&rule, &cpu("AM5"), &bare).expect("finding");
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("Mystery Board does not declare `socket`"));
    }

    #[test]
    fn socket_custom_key() {
        let rule =
            CompatibilityRule::new(1, CPU, MOTHERBOARD, "socket_match").with_data("key", "chipset");
        let a = Part::new(1, "a", CPU).with_spec("chipset", "X670");
        let b = Part::new(2, "b", MOTHERBOARD).with_spec("chipset", "B650");
        let finding = socket_match(&rule, &a, &b).expect("finding");
        assert_eq!(finding.message, "a (chipset: X670) is incompatible with b (chipset: B650)");
    }

    #[test]
    fn socket_malformed_key_is_indeterminate() {
        let rule = CompatibilityRule::new(1, CPU, MOTHERBOARD, "socket_match").with_data("key", 5.0);
        let finding = socket_match(&rule, &cpu("AM5"), &board("AM5")).expect("finding");
        assert_eq!(finding.severity, Severity::Indeterminate);
        assert!(finding.message.contains("rule_data.key"));
    }

    #[test]
    fn form_factor_roles_follow_data_not_orientation() {
        let case = Part::new(5, "Meshify C", CASE)
            .with_spec("supported_form_factors", vec!["ATX", "Micro-ATX"]);
        let mb = Part::new(2, "X670E Extreme", MOTHERBOARD).with_spec("form_factor", "E-ATX");
        let forward = CompatibilityRule::new(7, MOTHERBOARD, CASE, "form_factor");
        let reverse = CompatibilityRule::new(7, CASE, MOTHERBOARD, "form_factor");

        let a = compare(&forward, &mb, &case).expect("finding");
        let b = compare(&reverse, &case, &mb).expect("finding");
        assert_eq!(a, b);
        assert_eq!(a.severity, Severity::Issue);
        assert_eq!(
            a.message,
            "X670E Extreme (form factor: E-ATX) does not fit Meshify C (supports: ATX, Micro-ATX)"
        );
    }

    #[test]
    fn form_factor_fit_passes() {
        let case = Part::new(5, "Meshify C", CASE).with_spec("supported_form_factors", vec!["ATX"]);
        let mb = Part::new(2, "B650", MOTHERBOARD).with_spec("form_factor", "ATX");
        let rule = CompatibilityRule::new(7, MOTHERBOARD, CASE, "form_factor");
        assert_eq!(compare(&rule, &mb, &case), None);
    }

    #[test]
    fn form_factor_missing_or_empty_list_is_warning() {
        let mb = Part::new(2, "B650", MOTHERBOARD).with_spec("form_factor", "ATX");
        let rule = CompatibilityRule::new(7, MOTHERBOARD, CASE, "form_factor");

        let bare = Part::new(5, "Box", CASE);
        let missing = compare(&rule, &mb, &bare).expect("finding");
        assert_eq!(missing.severity, Severity::Warning);

        let empty = Part::new(5, "Box", CASE)
            .with_spec("supported_form_factors", SpecValue::List(Vec::new()));
        let finding = compare(&rule, &mb, &empty).expect("finding");
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("empty `supported_form_factors` list"));
    }

    #[test]
    fn interface_unsupported_is_issue() {
        let ssd = Part::new(8, "990 Pro", STORAGE).with_spec("interface", "NVMe");
        let mb = Part::new(2, "H610", MOTHERBOARD).with_spec("supported_interfaces", vec!["SATA"]);
        let rule = CompatibilityRule::new(4, STORAGE, MOTHERBOARD, "interface_match");
        let finding = compare(&rule, &ssd, &mb).expect("finding");
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(
            finding.message,
            "990 Pro (interface: NVMe) is not supported by H610 (supports: SATA)"
        );
    }

    #[test]
    fn interface_missing_list_is_warning() {
        let ssd = Part::new(8, "990 Pro", STORAGE).with_spec("interface", "NVMe");
        let mb = Part::new(2, "H610", MOTHERBOARD);
        let rule = CompatibilityRule::new(4, STORAGE, MOTHERBOARD, "interface_match");
        let finding = compare(&rule, &ssd, &mb).expect("finding");
        assert_eq!(finding.severity, Severity::Warning);
    }

    #[test]
    fn interface_required_by_rule() {
        let ssd = Part::new(8, "MX500", STORAGE).with_spec("interface", "SATA");
        let mb = Part::new(2, "B650", MOTHERBOARD)
            .with_spec("supported_interfaces", vec!["SATA", "NVMe"]);
        let rule = CompatibilityRule::new(4, STORAGE, MOTHERBOARD, "interface_match")
            .with_data("required_interface", "NVMe");
        let finding = compare(&rule, &ssd, &mb).expect("finding");
        assert_eq!(finding.message, "Interface mismatch: NVMe required, MX500 provides SATA");

        let plain = Part::new(2, "B650", MOTHERBOARD);
        let finding = compare(&rule, &ssd, &plain).expect("finding");
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(finding.message, "Interface mismatch: NVMe required, MX500 provides SATA");
    }

    fn psu(wattage: f64) -> Part {
        Part::new(10, "Focus 500", PSU).with_spec("wattage", wattage)
    }

    #[test]
    fn power_over_wattage_is_issue() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement").with_data("margin", 0.8);
        let parts = vec![
            Part::new(1, "cpu", CPU).with_spec("power_draw", 300.0),
            Part::new(2, "gpu", GPU).with_spec("power_draw", 250.0),
            psu(500.0),
        ];
        let finding = power_requirement(&rule, &parts[2], &parts, 0.8).expect("finding");
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(
            finding.message,
            "Total power draw (550W) exceeds PSU capacity: Focus 500 provides 500W"
        );
        assert_eq!(finding.part_ids, vec![parts[2].id]);
    }

    #[test]
    fn power_over_margin_is_warning() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement").with_data("margin", 0.8);
        let parts = vec![
            Part::new(1, "cpu", CPU).with_spec("power_draw", 250.0),
            Part::new(2, "gpu", GPU).with_spec("power_draw", 180.0),
            psu(500.0),
        ];
        let finding = power_requirement(&rule, &parts[2], &parts, 0.8).expect("finding");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(
            finding.message,
            "Total power draw (430W) exceeds the 80% safety margin of Focus 500 (400W of 500W)"
        );
    }

    #[test]
    fn power_within_margin_passes() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement");
        let parts = vec![Part::new(1, "cpu", CPU).with_spec("power_draw", 200.0), psu(500.0)];
        assert_eq!(power_requirement(&rule, &parts[1], &parts, 0.8), None);
    }

    #[test]
    fn power_non_numeric_draw_is_indeterminate() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement");
        let parts = vec![Part::new(1, "cpu", CPU).with_spec("power_draw", "lots"), psu(500.0)];
        let finding = power_requirement(&rule, &parts[1], &parts, 0.8).expect("finding");
        assert_eq!(finding.severity, Severity::Indeterminate);
        assert!(finding.message.contains("malformed `power_draw`"));
    }

    #[test]
    fn power_bad_margin_is_indeterminate() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement").with_data("margin", 1.5);
        let parts = vec![psu(500.0)];
        let finding = power_requirement(&rule, &parts[0], &parts, 0.8).expect("finding");
        assert_eq!(finding.severity, Severity::Indeterminate);
        assert!(finding.message.contains("rule_data.margin"));
    }

    #[test]
    fn power_missing_wattage_is_warning() {
        let rule = CompatibilityRule::new(3, GPU, PSU, "power_requirement");
        let parts = vec![Part::new(10, "Unknown PSU", PSU)];
        let finding = power_requirement(&rule, &parts[0], &parts, 0.8).expect("finding");
        assert_eq!(finding.severity, Severity::Warning);
    }

    #[test]
    fn unknown_rule_type_is_indeterminate() {
        let rule = CompatibilityRule::new(9, CPU, MOTHERBOARD, "future_unknown_type");
        let finding = compare(&rule, &board("AM5"), &cpu("AM5")).expect("finding");
        assert_eq!(finding.severity, Severity::Indeterminate);
        assert_eq!(
            finding.message,
            "Rule 9 has unrecognized type `future_unknown_type`; could not evaluate Ryzen 7 7700X and B650 Tomahawk"
        );
    }
}
