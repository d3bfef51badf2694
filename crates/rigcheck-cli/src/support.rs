use rigcheck_kernel::{CompatibilityRule, EngineConfig, Part, PartId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Parts and rules as exported by the catalog store. Rules include inactive
/// ones; the engine filters.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub rules: Vec<CompatibilityRule>,
}

impl Catalog {
    pub fn part(&self, id: u64) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == PartId(id))
    }
}

pub fn load_catalog_or_exit(input: &str) -> (Catalog, PathBuf) {
    let path = PathBuf::from(input);
    let bytes = fs::read(&path).unwrap_or_else(|err| {
        eprintln!("error: failed to read catalog {}: {err}", path.display());
        std::process::exit(1);
    });
    let catalog: Catalog = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        eprintln!("error: failed to parse catalog json {}: {err}", path.display());
        std::process::exit(1);
    });
    info!(
        path = %path.display(),
        parts = catalog.parts.len(),
        rules = catalog.rules.len(),
        "loaded catalog"
    );
    (catalog, path)
}

pub fn load_config_or_exit(config: Option<&str>) -> EngineConfig {
    let Some(path) = config else {
        debug!("using default engine config");
        return EngineConfig::default();
    };
    let config = EngineConfig::load(path).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });
    debug!(
        path,
        required_types = config.required_types.len(),
        psu_type = %config.psu_type,
        "loaded engine config"
    );
    config
}

/// Resolve requested part IDs against the catalog. Unknown IDs fail before
/// the engine runs; an empty request selects every part.
pub fn select_parts_or_exit(catalog: &Catalog, ids: &[u64]) -> Vec<Part> {
    if ids.is_empty() {
        return catalog.parts.clone();
    }
    let missing: BTreeSet<u64> = ids
        .iter()
        .copied()
        .filter(|id| catalog.part(*id).is_none())
        .collect();
    if !missing.is_empty() {
        let listed: Vec<String> = missing.iter().map(u64::to_string).collect();
        eprintln!("error: parts not found: {}", listed.join(", "));
        std::process::exit(1);
    }
    ids.iter()
        .filter_map(|id| catalog.part(*id).cloned())
        .collect()
}

pub fn part_or_exit(catalog: &Catalog, id: u64) -> &Part {
    catalog.part(id).unwrap_or_else(|| {
        eprintln!("error: parts not found: {id}");
        std::process::exit(1);
    })
}

pub fn exit_on_validation(err: rigcheck_kernel::ValidationError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

pub fn print_json_or_exit<T: Serialize>(value: &T) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        eprintln!("error: failed to render json: {err}");
        std::process::exit(1);
    });
    println!("{rendered}");
}

pub fn print_list_block(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {title}: (none)");
        return;
    }
    println!("  {title}:");
    for item in items {
        println!("    - {item}");
    }
}

pub fn format_part_ids(parts: &[Part]) -> String {
    if parts.is_empty() {
        return "(none)".to_string();
    }
    parts
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
