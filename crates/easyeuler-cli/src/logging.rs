//! Tracing setup for the binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. Everything goes to stderr so `verify` output on stdout stays
//! parseable.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown. Dependencies stay silent unless
/// `RUST_LOG` asks for them.
const TARGETS: [&str; 3] = ["easyeuler", "easyeuler_core", "easyeuler_adapters"];

/// Install the global subscriber. `RUST_LOG` wins over `-v`/`-q`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(!args.no_color && std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
