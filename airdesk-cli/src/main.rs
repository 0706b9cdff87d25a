//! `airdesk` - airline back-office console

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use airdesk_cli::cli::Cli;
use airdesk_cli::{app, init_logging, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let terminal = std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();
    match app::run(&cli, &config, &mut stdout, terminal).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
