use crate::support::{load_catalog_or_exit, print_json_or_exit, print_list_block};
use rigcheck_kernel::schema::recommended_keys;
use rigcheck_kernel::validate_specifications;
use serde_json::json;
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub fn run(input: String, json_output: bool) {
    let (catalog, catalog_path) = load_catalog_or_exit(&input);

    let mut errors = Vec::new();
    let mut notes = Vec::new();

    let mut seen_parts = BTreeSet::new();
    for part in &catalog.parts {
        if !seen_parts.insert(part.id) {
            errors.push(format!("part {}: duplicate part id", part.id));
        }
        if let Err(err) = validate_specifications(part.part_type.as_str(), &part.specifications) {
            errors.push(format!("part {}: {err}", part.id));
        }
        let missing: Vec<String> = recommended_keys(part.part_type.as_str())
            .into_iter()
            .filter(|key| part.spec(key).is_none())
            .collect();
        if !missing.is_empty() {
            debug!(part = %part.id, missing = missing.len(), "recommended keys absent");
            notes.push(format!("part {}: no {}", part.id, missing.join(", ")));
        }
    }

    for rule in &catalog.rules {
        if let Err(err) = rule.validate() {
            errors.push(err.to_string());
            continue;
        }
        if rule.kind().is_none() {
            warn!(rule = %rule.id, rule_type = %rule.rule_type, "unrecognized rule type");
            notes.push(format!(
                "rule {}: type `{}` is not understood by this engine and will be reported as indeterminate",
                rule.id, rule.rule_type
            ));
        }
        if !rule.is_active {
            notes.push(format!("rule {}: inactive", rule.id));
        }
    }

    let valid = errors.is_empty();
    if json_output {
        print_json_or_exit(&json!({
            "source": catalog_path.display().to_string(),
            "valid": valid,
            "part_count": catalog.parts.len(),
            "rule_count": catalog.rules.len(),
            "errors": errors,
            "notes": notes,
        }));
    } else {
        println!("rigcheck validate");
        println!("  Source: {}", catalog_path.display());
        println!("  Parts: {}", catalog.parts.len());
        println!("  Rules: {}", catalog.rules.len());
        println!("  Valid: {}", if valid { "yes" } else { "no" });
        print_list_block("Errors", &errors);
        print_list_block("Notes", &notes);
    }

    if !valid {
        std::process::exit(1);
    }
}
