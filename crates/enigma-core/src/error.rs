//! Engine error types.

use thiserror::Error;

/// Errors from configuring or operating the machine.
///
/// All variants are deterministic validation failures. None of them leave
/// the machine partially reconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Letter outside `A`–`Z` passed to a component.
    #[error("invalid letter: {0}")]
    InvalidLetter(char),

    /// Message contains a symbol outside `A`–`Z` after normalization.
    #[error("invalid character in message: {0}")]
    InvalidCharacter(char),

    /// Wiring table is not a valid permutation for its component.
    #[error("invalid wiring: {reason}")]
    InvalidWiring {
        /// Which property the table violates.
        reason: String,
    },

    /// Notch letter outside `A`–`Z`.
    #[error("invalid notch: {0}")]
    InvalidNotch(char),

    /// Position or ring setting index outside `0..26`.
    #[error("invalid position: {0}")]
    InvalidPosition(u8),

    /// Plugboard pair connects a letter to itself.
    #[error("cannot connect a letter to itself: {0}")]
    SelfConnection(char),

    /// Letter already belongs to a plugboard pair.
    #[error("letter {0} is already connected")]
    AlreadyConnected(char),

    /// Letter has no plugboard pair to remove.
    #[error("letter {0} is not connected")]
    NotConnected(char),

    /// Plugboard would exceed its pair limit.
    #[error("too many plugboard connections: {count} (at most 10)")]
    TooManyConnections {
        /// Number of pairs the board would have held.
        count: usize,
    },

    /// Number of supplied values differs from the number of rotors.
    #[error("expected {expected} values, got {actual}")]
    MismatchedCount {
        /// Number of rotors in the machine.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Machine built without rotors.
    #[error("machine needs at least one rotor")]
    EmptyRotorStack,

    /// Rotor name not in the catalog.
    #[error("invalid rotor: {0}")]
    UnknownRotor(String),

    /// Reflector name not in the catalog.
    #[error("invalid reflector: {0}")]
    UnknownReflector(String),

    /// Plugboard pair string is not exactly two letters.
    #[error("plugboard pairs must be two letters: {0:?}")]
    InvalidPair(String),
}

impl EnigmaError {
    /// Returns true if this error was caused by message input rather than
    /// by the machine configuration.
    ///
    /// Input errors leave the machine usable with a corrected message.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::InvalidLetter(_) | Self::InvalidCharacter(_) => true,

            Self::InvalidWiring { .. }
            | Self::InvalidNotch(_)
            | Self::InvalidPosition(_)
            | Self::SelfConnection(_)
            | Self::AlreadyConnected(_)
            | Self::NotConnected(_)
            | Self::TooManyConnections { .. }
            | Self::MismatchedCount { .. }
            | Self::EmptyRotorStack
            | Self::UnknownRotor(_)
            | Self::UnknownReflector(_)
            | Self::InvalidPair(_) => false,
        }
    }
}
