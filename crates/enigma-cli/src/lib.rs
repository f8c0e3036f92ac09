//! Command-line front end for the enigma rotor cipher.
//!
//! Settings are resolved in order of precedence: command-line flags, then
//! the config file, then built-in defaults. The resolved settings build a
//! [`Machine`](enigma_core::Machine) that transforms one message.
//!
//! ## Architecture
//!
//! ```text
//! enigma-cli
//!   ├─ Cli / TransformArgs  (clap arguments)
//!   ├─ config               (TOML file, ~/.enigma.toml)
//!   ├─ run                  (resolve, build, transform, report)
//!   └─ CliError             (exit codes)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod error;

use std::{io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use enigma_core::{MachineSettings, SteppingMode, group_blocks};
pub use error::{CliError, EXIT_CONFIG, EXIT_INPUT};

/// Enigma rotor cipher
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encrypt and decrypt messages with an Enigma-style rotor machine")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.enigma.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a message
    Encrypt(TransformArgs),
    /// Decrypt a message (the machine is reciprocal)
    Decrypt(TransformArgs),
}

impl Command {
    /// Arguments shared by both subcommands.
    pub fn args(&self) -> &TransformArgs {
        match self {
            Self::Encrypt(args) | Self::Decrypt(args) => args,
        }
    }
}

/// Machine and output options for one message.
#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Message to transform; letters and whitespace only
    pub message: String,

    /// Reflector (A, B, C)
    #[arg(short = 'u', long)]
    pub reflector: Option<String>,

    /// Rotors, slowest first (e.g. III,II,I)
    #[arg(short, long, value_delimiter = ',')]
    pub rotors: Option<Vec<String>>,

    /// Plugboard pairs (e.g. AB,CD)
    #[arg(short, long, value_delimiter = ',')]
    pub plugboard_pairs: Option<Vec<String>>,

    /// Starting positions, one letter per rotor (e.g. AAA)
    #[arg(long)]
    pub positions: Option<String>,

    /// Ring settings, one letter per rotor (e.g. AAA)
    #[arg(long)]
    pub ring_settings: Option<String>,

    /// Use the double-stepping mechanism
    #[arg(long)]
    pub double_step: bool,

    /// Letters per output block, 0 for none
    #[arg(long)]
    pub block_size: Option<usize>,
}

impl TransformArgs {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply_to(&self, settings: &mut MachineSettings) {
        if let Some(reflector) = &self.reflector {
            settings.reflector.clone_from(reflector);
        }
        if let Some(rotors) = &self.rotors {
            settings.rotors = rotors.iter().map(|r| r.trim().to_string()).collect();
        }
        if let Some(pairs) = &self.plugboard_pairs {
            settings.plugboard.pairs = pairs.iter().map(|p| p.trim().to_string()).collect();
        }
        if let Some(positions) = &self.positions {
            settings.rotor_positions.clone_from(positions);
        }
        if let Some(rings) = &self.ring_settings {
            settings.rotor_ring_settings.clone_from(rings);
        }
        if self.double_step {
            settings.stepping = SteppingMode::DoubleStep;
        }
    }
}

/// Run the CLI, loading the config from `~/.enigma.toml` unless `--config`
/// names a file.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    run_with_fallback(cli, config::default_config_path(), out)
}

/// Run the CLI with an explicit fallback config location.
pub fn run_with_fallback(
    cli: &Cli,
    fallback: Option<PathBuf>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let args = cli.command.args();
    if args.message.trim().is_empty() {
        return Err(CliError::EmptyMessage);
    }

    let file = config::load(cli.config.as_deref(), fallback)?;
    let mut settings = file.machine;
    args.apply_to(&mut settings);
    let block_size = args.block_size.unwrap_or(file.output.block_size);

    let mut machine = settings.build()?;
    let positions = machine.rotor_position_letters();
    let rings = machine.rotor_ring_setting_letters();
    let plugboard = machine.plugboard().to_string();

    let result = match &cli.command {
        Command::Encrypt(_) => machine.encrypt_string(&args.message)?,
        Command::Decrypt(_) => machine.decrypt_string(&args.message)?,
    };
    tracing::info!(letters = result.len(), end = %machine.rotor_position_letters(), "message transformed");

    writeln!(out, "Rotors:        {}", settings.rotors.join(" "))?;
    writeln!(out, "Reflector:     {}", settings.reflector.trim().to_ascii_uppercase())?;
    writeln!(out, "Positions:     {positions}")?;
    writeln!(out, "Ring settings: {rings}")?;
    writeln!(out, "Plugboard:     {plugboard}")?;
    writeln!(out, "Stepping:      {}", stepping_name(settings.stepping))?;
    writeln!(out, "Message:       {}", args.message)?;
    writeln!(out, "Result:        {}", group_blocks(&result, block_size))?;
    Ok(())
}

const fn stepping_name(mode: SteppingMode) -> &'static str {
    match mode {
        SteppingMode::SingleCarry => "single-carry",
        SteppingMode::DoubleStep => "double-step",
    }
}
