//! Enigma binary.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt with the default machine (III II I, reflector B, AAA)
//! enigma encrypt "bootdev rocks"
//!
//! # Custom machine
//! enigma encrypt "hello world" -r I,II,III -u B -p AB,CD --positions ADU --double-step
//!
//! # Settings from a file
//! enigma --config machine.toml decrypt "WLQUC DIFFV VH"
//! ```

use std::process::ExitCode;

use clap::Parser;
use enigma_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        },
    }
}
