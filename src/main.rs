use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use free::cli::{self, Cli};
use free::runner::{self, RunMode};
use free::stats::SystemProvider;

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.kind() == ErrorKind::DisplayHelp {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        },
    };

    // Version is answered before anything else is looked at.
    if cli.version {
        println!("{}", cli::version_line());
        return ExitCode::SUCCESS;
    }

    let mode = match RunMode::from_schedule(cli.seconds, cli.count) {
        Ok(mode) => mode,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        },
    };

    let settings = cli.settings();
    let mut provider = SystemProvider::new();
    let mut stdout = io::stdout();

    if let Err(err) = runner::run(mode, &mut provider, &settings, &mut stdout) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
