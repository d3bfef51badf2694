use crate::support::{
    exit_on_validation, load_catalog_or_exit, load_config_or_exit, part_or_exit,
    print_json_or_exit, print_list_block,
};
use rigcheck_kernel::RuleEngine;
use tracing::info;

pub fn run(a: u64, b: u64, input: String, config: Option<String>, json_output: bool) {
    let (catalog, _) = load_catalog_or_exit(&input);
    let engine = RuleEngine::new(load_config_or_exit(config.as_deref()));
    let first = part_or_exit(&catalog, a);
    let second = part_or_exit(&catalog, b);

    info!(a, b, "checking part pair");
    let report = engine
        .check_pair(first, second, &catalog.rules)
        .unwrap_or_else(|err| exit_on_validation(err));

    if json_output {
        print_json_or_exit(&report);
        return;
    }

    println!("rigcheck pair {a} {b}");
    println!("  {} ({})", first.label(), first.part_type);
    println!("  {} ({})", second.label(), second.part_type);
    println!("  Verdict: {}", report.summary());
    print_list_block("Issues", &report.issues);
    print_list_block("Warnings", &report.warnings);
}
