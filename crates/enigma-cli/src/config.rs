//! Config file loading.
//!
//! The file is TOML with two optional tables:
//!
//! ```toml
//! [machine]
//! rotors = ["III", "II", "I"]
//! reflector = "B"
//! rotor-positions = "AAA"
//! rotor-ring-settings = "AAA"
//! stepping = "single-carry"
//!
//! [machine.plugboard]
//! pairs = ["AB", "CD"]
//!
//! [output]
//! block-size = 5
//! ```
//!
//! Missing keys fall back to defaults. Unknown keys are rejected.

use std::path::{Path, PathBuf};

use enigma_core::{HISTORICAL_BLOCK_SIZE, MachineSettings};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// File name looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".enigma.toml";

/// Output formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputSettings {
    /// Letters per block in the result, 0 for no grouping.
    pub block_size: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { block_size: HISTORICAL_BLOCK_SIZE }
    }
}

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Machine settings.
    pub machine: MachineSettings,
    /// Output settings.
    pub output: OutputSettings,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CliError::ReadConfig { path: path.to_path_buf(), source })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|source| CliError::ParseConfig { path: path.to_path_buf(), source })
    }
}

/// `$HOME/.enigma.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `fallback` is read when it
/// exists and defaults are used otherwise.
pub fn load(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<ConfigFile, CliError> {
    if let Some(path) = explicit {
        tracing::debug!("loading config from {}", path.display());
        return ConfigFile::read(path);
    }

    match fallback {
        Some(path) if path.is_file() => {
            tracing::debug!("loading config from {}", path.display());
            ConfigFile::read(&path)
        },
        _ => {
            tracing::debug!("no config file, using defaults");
            Ok(ConfigFile::default())
        },
    }
}

#[cfg(test)]
mod tests {
    use enigma_core::SteppingMode;

    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = ConfigFile::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.output.block_size, 5);
    }

    #[test]
    fn partial_machine_table_keeps_other_defaults() {
        let config = ConfigFile::parse(
            "[machine]\nreflector = \"C\"\nstepping = \"double-step\"\n",
            Path::new("partial.toml"),
        )
        .unwrap();

        assert_eq!(config.machine.reflector, "C");
        assert_eq!(config.machine.stepping, SteppingMode::DoubleStep);
        assert_eq!(config.machine.rotors, vec!["III", "II", "I"]);
    }

    #[test]
    fn malformed_file_reports_path() {
        let err = ConfigFile::parse("[machine\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, CliError::ParseConfig { .. }));
        assert!(err.to_string().starts_with("invalid config file broken.toml"));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        for content in [
            "[machine]\nrotor_positions = \"QEV\"\n",
            "[output]\nblock_size = 0\n",
            "[machin]\nreflector = \"C\"\n",
            "[machine.plugboard]\npair = [\"AB\"]\n",
        ] {
            let err = ConfigFile::parse(content, Path::new("typo.toml")).unwrap_err();
            assert!(matches!(err, CliError::ParseConfig { .. }), "{content:?} accepted");
        }
    }

    #[test]
    fn missing_fallback_uses_defaults() {
        let config = load(None, Some(PathBuf::from("/nonexistent/.enigma.toml"))).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/enigma.toml")), None).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
    }
}
