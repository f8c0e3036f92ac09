//! Letter/index conversion for the 26-letter alphabet.
//!
//! Every component works on zero-based indices internally. Letters are only
//! accepted and produced at the public boundary.

use crate::error::EnigmaError;

/// Number of letters on every rotor, reflector and plugboard.
pub const ALPHABET_SIZE: u8 = 26;

/// Index of an uppercase letter `A`–`Z`.
///
/// Lowercase letters are rejected; callers that accept free text normalize
/// before calling.
pub fn index_of(letter: char) -> Result<u8, EnigmaError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidLetter(letter))
    }
}

/// Letter for an index. Indices wrap modulo 26.
pub fn letter_at(index: u8) -> char {
    char::from(b'A' + index % ALPHABET_SIZE)
}

/// Add an offset modulo 26.
pub(crate) fn shift(index: u8, offset: u8) -> u8 {
    (index + offset) % ALPHABET_SIZE
}

/// Subtract an offset modulo 26.
pub(crate) fn unshift(index: u8, offset: u8) -> u8 {
    (index + ALPHABET_SIZE - offset % ALPHABET_SIZE) % ALPHABET_SIZE
}

/// Parse a 26-letter wiring string into a permutation table.
///
/// Fails unless the string contains every letter `A`–`Z` exactly once.
pub(crate) fn parse_permutation(wiring: &str) -> Result<[u8; 26], EnigmaError> {
    let len = wiring.chars().count();
    if len != usize::from(ALPHABET_SIZE) {
        return Err(EnigmaError::InvalidWiring {
            reason: format!("expected 26 letters, got {len}"),
        });
    }

    let mut table = [0u8; 26];
    let mut seen = [false; 26];
    for (slot, letter) in table.iter_mut().zip(wiring.chars()) {
        let index = index_of(letter).map_err(|_| EnigmaError::InvalidWiring {
            reason: format!("{letter:?} is not a letter A-Z"),
        })?;
        if seen[usize::from(index)] {
            return Err(EnigmaError::InvalidWiring {
                reason: format!("letter {letter} appears more than once"),
            });
        }
        seen[usize::from(index)] = true;
        *slot = index;
    }

    Ok(table)
}

/// A value that can configure a rotor position or ring setting.
///
/// Implemented for `u8` (zero-based index) and `char` (letter, case-folded),
/// so callers can pass whichever form they hold.
pub trait RotorSetting: Copy {
    /// Validate and convert to a zero-based index.
    fn to_index(self) -> Result<u8, EnigmaError>;
}

impl RotorSetting for u8 {
    fn to_index(self) -> Result<u8, EnigmaError> {
        if self < ALPHABET_SIZE { Ok(self) } else { Err(EnigmaError::InvalidPosition(self)) }
    }
}

impl RotorSetting for char {
    fn to_index(self) -> Result<u8, EnigmaError> {
        index_of(self.to_ascii_uppercase()).map_err(|_| EnigmaError::InvalidLetter(self))
    }
}
