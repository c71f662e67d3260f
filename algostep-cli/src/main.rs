mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show algostep info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("algostep", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::List => commands::list::run(&cli.global),
        Command::Run {
            algorithm,
            preset,
            start,
            max_steps,
            allow_negative,
            summary,
        } => commands::run::run(
            &commands::run::RunOptions {
                algorithm: *algorithm,
                preset,
                start: *start,
                max_steps: *max_steps,
                allow_negative: *allow_negative,
                summary: *summary,
            },
            &cli.global,
        ),
    }
}
