//! Rigcheck CLI: the `rigcheck` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to install log subscriber: {err}");
    }

    match cli.command {
        Commands::Check {
            input,
            parts,
            config,
            findings,
            fail_on_issues,
            json,
        } => commands::check::run(commands::check::Args {
            input,
            parts,
            config,
            findings,
            fail_on_issues,
            json,
        }),

        Commands::Pair {
            a,
            b,
            input,
            config,
            json,
        } => commands::pair::run(a, b, input, config, json),

        Commands::Validate { input, json } => commands::validate::run(input, json),
    }
}
