//! Machine
//!
//! Orchestrates plugboard, rotor stack and reflector into the keystroke
//! transform.
//!
//! ## Keystroke
//!
//! 1. Step the rotors (before the signal flows)
//! 2. Plugboard
//! 3. Rotors from the fastest (last) to the slowest (first)
//! 4. Reflector
//! 5. Rotors from the slowest back to the fastest
//! 6. Plugboard
//!
//! ## States
//!
//! The machine has no terminal state. Each keystroke mutates rotor
//! positions; configuration calls may be issued between keystrokes.
//! Configuration calls validate everything before mutating, so a rejected
//! call leaves the machine exactly as it was.

use serde::{Deserialize, Serialize};

use crate::{
    alphabet::{self, RotorSetting},
    error::EnigmaError,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::Rotor,
};

/// How the rotor stack advances on each keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SteppingMode {
    /// Odometer rule: the fastest rotor always steps and each rotor that
    /// steps away from its notch carries into its left neighbor.
    #[default]
    SingleCarry,

    /// Historical pawl mechanism. In addition to the odometer rule, a rotor
    /// that is neither the fastest nor the slowest steps whenever it sits at
    /// its own notch, so the middle rotor advances on two consecutive
    /// keystrokes.
    DoubleStep,
}

/// Rotor cipher machine.
///
/// Rotors are ordered left to right: index 0 is the slowest rotor, the last
/// index is the fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    stepping: SteppingMode,
}

impl Machine {
    /// Assemble a machine from its parts with single-carry stepping.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::EmptyRotorStack`] if `rotors` is empty.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::EmptyRotorStack);
        }

        Ok(Self { rotors, reflector, plugboard, stepping: SteppingMode::default() })
    }

    /// Use a different stepping mode.
    #[must_use]
    pub fn with_stepping(mut self, stepping: SteppingMode) -> Self {
        self.stepping = stepping;
        self
    }

    /// Rotors, left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Active stepping mode.
    pub fn stepping(&self) -> SteppingMode {
        self.stepping
    }

    /// Encrypt one letter, advancing the rotors first.
    ///
    /// Encryption and decryption are the same operation.
    pub fn encrypt_letter(&mut self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter)?;
        self.step_rotors();

        let mut signal = self.plugboard.transform_index(index);
        tracing::trace!(stage = "plugboard", letter = %alphabet::letter_at(signal));

        for (slot, rotor) in self.rotors.iter().enumerate().rev() {
            signal = rotor.forward_index(signal);
            tracing::trace!(stage = "rotor forward", slot, letter = %alphabet::letter_at(signal));
        }

        signal = self.reflector.transform_index(signal);
        tracing::trace!(stage = "reflector", letter = %alphabet::letter_at(signal));

        for (slot, rotor) in self.rotors.iter().enumerate() {
            signal = rotor.backward_index(signal);
            tracing::trace!(stage = "rotor backward", slot, letter = %alphabet::letter_at(signal));
        }

        signal = self.plugboard.transform_index(signal);
        let output = alphabet::letter_at(signal);
        tracing::trace!(stage = "plugboard", letter = %output);

        Ok(output)
    }

    /// Normalize and encrypt a message.
    ///
    /// The whole message is validated before any rotor moves, so an invalid
    /// message leaves the rotor positions untouched.
    pub fn encrypt_string(&mut self, message: &str) -> Result<String, EnigmaError> {
        let normalized = Self::normalize_message(message)?;
        tracing::debug!(letters = normalized.len(), "encrypting message");

        normalized.chars().map(|letter| self.encrypt_letter(letter)).collect()
    }

    /// Decrypt a message. Identical to [`Machine::encrypt_string`] because
    /// the machine is reciprocal; rotors must first be reset to the positions
    /// used for encryption.
    pub fn decrypt_string(&mut self, message: &str) -> Result<String, EnigmaError> {
        self.encrypt_string(message)
    }

    /// Uppercase a message and drop whitespace.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidCharacter`] naming the first symbol outside
    /// `A`–`Z`.
    pub fn normalize_message(message: &str) -> Result<String, EnigmaError> {
        message
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                if upper.is_ascii_uppercase() {
                    Ok(upper)
                } else {
                    Err(EnigmaError::InvalidCharacter(c))
                }
            })
            .collect()
    }

    /// Set every rotor position, left to right.
    pub fn set_rotor_positions<T: RotorSetting>(&mut self, values: &[T]) -> Result<(), EnigmaError> {
        let indices = self.validate_settings(values)?;
        for (rotor, index) in self.rotors.iter_mut().zip(indices) {
            rotor.set_position(index)?;
        }
        tracing::debug!("rotor positions set to {}", self.rotor_position_letters());
        Ok(())
    }

    /// Set every ring setting, left to right.
    pub fn set_rotor_ring_settings<T: RotorSetting>(
        &mut self,
        values: &[T],
    ) -> Result<(), EnigmaError> {
        let indices = self.validate_settings(values)?;
        for (rotor, index) in self.rotors.iter_mut().zip(indices) {
            rotor.set_ring_setting(index)?;
        }
        tracing::debug!("ring settings set to {}", self.rotor_ring_setting_letters());
        Ok(())
    }

    /// Rotor positions as indices, left to right.
    pub fn rotor_positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Rotor positions as they read in the rotor window, e.g. `"AAA"`.
    pub fn rotor_position_letters(&self) -> String {
        self.rotors.iter().map(|r| alphabet::letter_at(r.position())).collect()
    }

    /// Ring settings as indices, left to right.
    pub fn rotor_ring_settings(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::ring_setting).collect()
    }

    /// Ring settings as letters.
    pub fn rotor_ring_setting_letters(&self) -> String {
        self.rotors.iter().map(|r| alphabet::letter_at(r.ring_setting())).collect()
    }

    /// Replace all plugboard connections.
    ///
    /// The new set is built aside and installed only if every pair is
    /// accepted; on error the previous connections remain.
    pub fn set_plugboard_connections(&mut self, pairs: &[(char, char)]) -> Result<(), EnigmaError> {
        self.plugboard = Plugboard::with_connections(pairs)?;
        tracing::debug!("plugboard set to {}", self.plugboard);
        Ok(())
    }

    /// Connected plugboard pairs.
    pub fn plugboard_connections(&self) -> Vec<(char, char)> {
        self.plugboard.connections()
    }

    /// Add one plugboard pair.
    pub fn add_plugboard_connection(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        self.plugboard.add_connection(a, b)
    }

    /// Remove the plugboard pair containing `a`.
    pub fn remove_plugboard_connection(&mut self, a: char) -> Result<(), EnigmaError> {
        self.plugboard.remove_connection(a)
    }

    /// Remove all plugboard pairs.
    pub fn clear_plugboard_connections(&mut self) {
        self.plugboard.clear_connections();
    }

    fn validate_settings<T: RotorSetting>(&self, values: &[T]) -> Result<Vec<u8>, EnigmaError> {
        if values.len() != self.rotors.len() {
            return Err(EnigmaError::MismatchedCount {
                expected: self.rotors.len(),
                actual: values.len(),
            });
        }
        values.iter().map(|&v| v.to_index()).collect()
    }

    fn step_rotors(&mut self) {
        match self.stepping {
            SteppingMode::SingleCarry => {
                for rotor in self.rotors.iter_mut().rev() {
                    if !rotor.step() {
                        break;
                    }
                }
            },
            SteppingMode::DoubleStep => {
                // Decide left to right: rotor `i` reads the pre-step state of
                // itself and of `i + 1`, neither of which has moved yet.
                let last = self.rotors.len() - 1;
                for i in 0..=last {
                    let advance = i == last
                        || self.rotors[i + 1].is_at_notch()
                        || (i > 0 && self.rotors[i].is_at_notch());
                    if advance {
                        self.rotors[i].step();
                    }
                }
            },
        }
    }
}
