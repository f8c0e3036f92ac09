//! Reflector
//!
//! Fixed wiring that turns the signal back through the rotor stack. The
//! wiring must be an involution without fixed points, which is what makes
//! the whole machine reciprocal and guarantees no letter encrypts to itself.

use crate::{alphabet, error::EnigmaError};

/// Reflecting disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: [u8; 26],
}

impl Reflector {
    /// Create a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidWiring`] unless the wiring is a permutation that
    /// pairs every letter with a different letter.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let table = alphabet::parse_permutation(wiring)?;

        for (index, &target) in (0u8..).zip(table.iter()) {
            if target == index {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!("letter {} maps to itself", alphabet::letter_at(index)),
                });
            }
            if table[usize::from(target)] != index {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!(
                        "{} maps to {} but {} does not map back",
                        alphabet::letter_at(index),
                        alphabet::letter_at(target),
                        alphabet::letter_at(target),
                    ),
                });
            }
        }

        Ok(Self { wiring: table })
    }

    /// Reflect a letter.
    pub fn transform(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter)?;
        Ok(alphabet::letter_at(self.transform_index(index)))
    }

    pub(crate) fn transform_index(&self, index: u8) -> u8 {
        self.wiring[usize::from(index)]
    }
}
