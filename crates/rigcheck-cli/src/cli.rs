use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rigcheck",
    about = "Rigcheck: compatibility rule evaluation for PC part builds",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a build against the active rules of a catalog
    Check {
        /// Path to catalog JSON (`{"parts": [...], "rules": [...]}`)
        #[arg(long, default_value = "catalog.json")]
        input: String,

        /// Part ID to include in the build (repeatable; default: every part)
        #[arg(long = "part")]
        parts: Vec<u64>,

        /// Path to engine config TOML
        #[arg(long)]
        config: Option<String>,

        /// Include every individual finding with its deterministic ID
        #[arg(long)]
        findings: bool,

        /// Exit with status 2 when the build is incompatible
        #[arg(long)]
        fail_on_issues: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check two specific parts against each other
    Pair {
        /// First part ID
        a: u64,

        /// Second part ID
        b: u64,

        /// Path to catalog JSON
        #[arg(long, default_value = "catalog.json")]
        input: String,

        /// Path to engine config TOML
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate part specifications and rule records of a catalog
    Validate {
        /// Path to catalog JSON
        #[arg(long, default_value = "catalog.json")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
