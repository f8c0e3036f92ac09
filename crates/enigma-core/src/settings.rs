//! Machine settings.
//!
//! A serializable description of a machine: which catalog rotors and
//! reflector to mount, the plugboard pairs, and the starting positions and
//! ring settings. Front ends fill this from flags or a config file and call
//! [`MachineSettings::build`].

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{ReflectorKind, RotorKind},
    error::EnigmaError,
    machine::{Machine, SteppingMode},
    plugboard::Plugboard,
};

/// Plugboard section of the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlugboardSettings {
    /// Letter pairs such as `"AB"`.
    pub pairs: Vec<String>,
}

/// Full machine settings.
///
/// Letter strings list one letter per rotor, left to right. An empty string
/// leaves every rotor at `A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MachineSettings {
    /// Rotor names, left (slowest) to right (fastest).
    pub rotors: Vec<String>,
    /// Reflector name.
    pub reflector: String,
    /// Starting positions, e.g. `"AAA"`.
    pub rotor_positions: String,
    /// Ring settings, e.g. `"AAA"`.
    pub rotor_ring_settings: String,
    /// Plugboard pairs.
    pub plugboard: PlugboardSettings,
    /// Stepping mechanism.
    pub stepping: SteppingMode,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            rotors: vec!["III".to_string(), "II".to_string(), "I".to_string()],
            reflector: "B".to_string(),
            rotor_positions: String::new(),
            rotor_ring_settings: String::new(),
            plugboard: PlugboardSettings::default(),
            stepping: SteppingMode::default(),
        }
    }
}

impl MachineSettings {
    /// Resolve names and build a machine ready to encrypt.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let rotors = self
            .rotors
            .iter()
            .map(|name| name.parse::<RotorKind>().and_then(RotorKind::build))
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = self.reflector.parse::<ReflectorKind>()?.build()?;
        let plugboard = Plugboard::with_connections(&self.plugboard_pairs()?)?;

        let mut machine = Machine::new(rotors, reflector, plugboard)?.with_stepping(self.stepping);

        let positions = setting_letters(&self.rotor_positions);
        if !positions.is_empty() {
            machine.set_rotor_positions(&positions)?;
        }

        let rings = setting_letters(&self.rotor_ring_settings);
        if !rings.is_empty() {
            machine.set_rotor_ring_settings(&rings)?;
        }

        tracing::debug!(
            rotors = ?self.rotors,
            reflector = %self.reflector,
            positions = %machine.rotor_position_letters(),
            rings = %machine.rotor_ring_setting_letters(),
            plugboard = %machine.plugboard(),
            "machine built"
        );

        Ok(machine)
    }

    /// Parse the plugboard pair strings.
    ///
    /// Each entry must be exactly two letters; letters are case-folded.
    pub fn plugboard_pairs(&self) -> Result<Vec<(char, char)>, EnigmaError> {
        self.plugboard
            .pairs
            .iter()
            .map(|pair| {
                let letters: Vec<char> =
                    pair.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
                match letters.as_slice() {
                    &[a, b] => Ok((a, b)),
                    _ => Err(EnigmaError::InvalidPair(pair.clone())),
                }
            })
            .collect()
    }
}

fn setting_letters(value: &str) -> Vec<char> {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
