//! Rotor
//!
//! A wired disk with a position indicator, a ring setting and a turnover
//! notch.
//!
//! ## Index Arithmetic
//!
//! A signal entering at contact `i` hits wiring entry
//! `(i + position - ring) mod 26` and leaves at
//! `(wiring[entry] - position + ring) mod 26`. The backward path applies the
//! same offsets around the inverse table.

use crate::{
    alphabet::{self, RotorSetting},
    error::EnigmaError,
};

/// A single cipher rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    /// Forward wiring, contact index to contact index.
    wiring: [u8; 26],
    /// Inverse of `wiring`, used on the return path.
    inverse: [u8; 26],
    /// Position whose step carries into the next slower rotor.
    notch: u8,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Create a rotor from a 26-letter wiring string and a notch letter.
    ///
    /// The rotor starts at position `A` with ring setting `A`.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidWiring`] unless `wiring` is a permutation of
    ///   `A`–`Z`
    /// - [`EnigmaError::InvalidNotch`] if `notch` is outside `A`–`Z`
    pub fn new(wiring: &str, notch: char) -> Result<Self, EnigmaError> {
        let wiring = alphabet::parse_permutation(wiring)?;
        let notch = alphabet::index_of(notch).map_err(|_| EnigmaError::InvalidNotch(notch))?;

        let mut inverse = [0u8; 26];
        for (input, &output) in (0u8..).zip(wiring.iter()) {
            inverse[usize::from(output)] = input;
        }

        Ok(Self { wiring, inverse, notch, ring_setting: 0, position: 0 })
    }

    /// Current position as an index.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Current ring setting as an index.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Notch position as an index.
    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// Whether the next step will carry into the neighboring rotor.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Turn the rotor to a position given as letter or index.
    pub fn set_position(&mut self, value: impl RotorSetting) -> Result<(), EnigmaError> {
        self.position = value.to_index()?;
        Ok(())
    }

    /// Set the ring offset given as letter or index.
    pub fn set_ring_setting(&mut self, value: impl RotorSetting) -> Result<(), EnigmaError> {
        self.ring_setting = value.to_index()?;
        Ok(())
    }

    /// Advance one position.
    ///
    /// Returns true when the rotor stepped away from its notch, meaning the
    /// next slower rotor must step as well.
    pub fn step(&mut self) -> bool {
        let carry = self.is_at_notch();
        self.position = alphabet::shift(self.position, 1);
        carry
    }

    /// Substitute a letter travelling toward the reflector.
    pub fn transform_forward(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter)?;
        Ok(alphabet::letter_at(self.forward_index(index)))
    }

    /// Substitute a letter travelling back from the reflector.
    pub fn transform_backward(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter)?;
        Ok(alphabet::letter_at(self.backward_index(index)))
    }

    pub(crate) fn forward_index(&self, index: u8) -> u8 {
        self.through(&self.wiring, index)
    }

    pub(crate) fn backward_index(&self, index: u8) -> u8 {
        self.through(&self.inverse, index)
    }

    fn through(&self, table: &[u8; 26], index: u8) -> u8 {
        let entry = alphabet::unshift(alphabet::shift(index, self.position), self.ring_setting);
        let exit = table[usize::from(entry)];
        alphabet::shift(alphabet::unshift(exit, self.position), self.ring_setting)
    }
}
