use crate::support::{
    exit_on_validation, format_part_ids, load_catalog_or_exit, load_config_or_exit,
    print_json_or_exit, print_list_block, select_parts_or_exit,
};
use rigcheck_kernel::{RuleEngine, aggregate};
use serde_json::json;
use tracing::{debug, info};

pub struct Args {
    pub input: String,
    pub parts: Vec<u64>,
    pub config: Option<String>,
    pub findings: bool,
    pub fail_on_issues: bool,
    pub json: bool,
}

pub fn run(args: Args) {
    let (catalog, catalog_path) = load_catalog_or_exit(&args.input);
    let engine = RuleEngine::new(load_config_or_exit(args.config.as_deref()));
    let parts = select_parts_or_exit(&catalog, &args.parts);

    info!(parts = parts.len(), "evaluating build");
    let findings = engine
        .findings(&parts, &catalog.rules)
        .unwrap_or_else(|err| exit_on_validation(err));
    debug!(findings = findings.len(), "collected findings");
    let report = aggregate(findings.clone());

    if args.json {
        if args.findings {
            print_json_or_exit(&json!({
                "report": report,
                "findings": findings,
            }));
        } else {
            print_json_or_exit(&report);
        }
    } else {
        println!("rigcheck check");
        println!("  Source: {}", catalog_path.display());
        println!("  Parts: {}", format_part_ids(&parts));
        println!("  Verdict: {}", report.summary());
        print_list_block("Issues", &report.issues);
        print_list_block("Warnings", &report.warnings);
        if args.findings {
            let lines: Vec<String> = findings
                .iter()
                .map(|f| format!("[{}] {} {}", f.severity, f.finding_id, f.message))
                .collect();
            print_list_block("Findings", &lines);
        }
    }

    if args.fail_on_issues && !report.is_compatible {
        std::process::exit(2);
    }
}
