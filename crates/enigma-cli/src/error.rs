//! CLI error types.

use std::path::PathBuf;

use enigma_core::EnigmaError;

/// Exit code for configuration failures.
pub const EXIT_CONFIG: u8 = 1;

/// Exit code for a message the machine cannot encrypt.
pub const EXIT_INPUT: u8 = 3;

/// Errors that can occur while running the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Machine configuration or message error
    #[error(transparent)]
    Enigma(#[from] EnigmaError),

    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("invalid config file {}: {source}", .path.display())]
    ParseConfig {
        /// Path that failed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Message has no letters
    #[error("message is empty")]
    EmptyMessage,

    /// Writing the report failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Bad message input and bad configuration exit differently so scripts
    /// can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyMessage => EXIT_INPUT,
            Self::Enigma(err) if err.is_input_error() => EXIT_INPUT,
            _ => EXIT_CONFIG,
        }
    }
}
