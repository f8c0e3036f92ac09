//! Operations for model-based testing.
//!
//! Operations represent every configuration call and keystroke the machine
//! accepts. They are generated randomly and applied to both the model and
//! the real engine.

use arbitrary::Arbitrary;
use enigma_core::EnigmaError;

/// Symbols that fall outside `A`–`Z` for letter seeds past 25.
const INVALID_SYMBOLS: [char; 6] = ['a', 'z', '1', '!', '#', 'Ä'];

/// Letter seed.
///
/// Seeds `0..26` map to `A`–`Z`; larger seeds map to invalid symbols so the
/// error paths get exercised too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct ModelLetter(pub u8);

impl ModelLetter {
    /// Expand to the character handed to the machine.
    pub fn to_char(self) -> char {
        if self.0 < 26 {
            char::from(b'A' + self.0)
        } else {
            INVALID_SYMBOLS[usize::from(self.0 - 26) % INVALID_SYMBOLS.len()]
        }
    }
}

/// Operations that can be applied to a machine.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Connect two letters on the plugboard.
    AddConnection {
        /// First letter.
        a: ModelLetter,
        /// Second letter.
        b: ModelLetter,
    },

    /// Disconnect a letter's pair.
    RemoveConnection {
        /// Letter to disconnect.
        a: ModelLetter,
    },

    /// Replace the whole plugboard.
    SetConnections {
        /// New pairs.
        pairs: Vec<(ModelLetter, ModelLetter)>,
    },

    /// Remove every plugboard pair.
    ClearConnections,

    /// Set rotor positions by index (may be out of range or mismatched).
    SetPositions {
        /// One index per rotor.
        positions: Vec<u8>,
    },

    /// Set ring settings by index.
    SetRingSettings {
        /// One index per rotor.
        rings: Vec<u8>,
    },

    /// Press one key.
    EncryptLetter {
        /// Key pressed.
        letter: ModelLetter,
    },

    /// Encrypt a short message.
    EncryptText {
        /// Message letters.
        letters: Vec<ModelLetter>,
    },
}

/// Result of applying an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Configuration call succeeded.
    Ok,

    /// Keystroke(s) produced this output.
    Output(String),

    /// Operation failed.
    Error(OperationError),
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Error kinds compared between model and engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Letter outside `A`–`Z` passed to a component.
    InvalidLetter,
    /// Message symbol outside `A`–`Z`.
    InvalidCharacter,
    /// Index outside `0..26`.
    InvalidPosition,
    /// Pair connects a letter to itself.
    SelfConnection,
    /// Letter already paired.
    AlreadyConnected,
    /// Letter not paired.
    NotConnected,
    /// More than ten pairs.
    TooManyConnections,
    /// Value count differs from rotor count.
    MismatchedCount,
    /// Any error the model never produces.
    Other,
}

impl From<&EnigmaError> for OperationError {
    fn from(err: &EnigmaError) -> Self {
        match err {
            EnigmaError::InvalidLetter(_) => Self::InvalidLetter,
            EnigmaError::InvalidCharacter(_) => Self::InvalidCharacter,
            EnigmaError::InvalidPosition(_) => Self::InvalidPosition,
            EnigmaError::SelfConnection(_) => Self::SelfConnection,
            EnigmaError::AlreadyConnected(_) => Self::AlreadyConnected,
            EnigmaError::NotConnected(_) => Self::NotConnected,
            EnigmaError::TooManyConnections { .. } => Self::TooManyConnections,
            EnigmaError::MismatchedCount { .. } => Self::MismatchedCount,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_map_to_letters_then_invalid_symbols() {
        assert_eq!(ModelLetter(0).to_char(), 'A');
        assert_eq!(ModelLetter(25).to_char(), 'Z');
        assert_eq!(ModelLetter(26).to_char(), 'a');
        assert_eq!(ModelLetter(31).to_char(), 'Ä');
        assert_eq!(ModelLetter(32).to_char(), 'a');
    }

    #[test]
    fn engine_errors_classify() {
        let err = EnigmaError::TooManyConnections { count: 11 };
        assert_eq!(OperationError::from(&err), OperationError::TooManyConnections);
        let err = EnigmaError::EmptyRotorStack;
        assert_eq!(OperationError::from(&err), OperationError::Other);
    }
}
