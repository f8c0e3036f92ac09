//! Model plugboard: a plain list of pairs.

use super::operation::OperationError;

/// Maximum pairs, mirrored from the engine.
const MAX_PAIRS: usize = 10;

/// Plugboard as an unordered list of letter pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPlugboard {
    pairs: Vec<(char, char)>,
}

impl ModelPlugboard {
    /// Create an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    fn is_plugged(&self, letter: char) -> bool {
        self.pairs.iter().any(|&(a, b)| a == letter || b == letter)
    }

    /// Connect two letters.
    pub fn add(&mut self, a: char, b: char) -> Result<(), OperationError> {
        if !a.is_ascii_uppercase() || !b.is_ascii_uppercase() {
            return Err(OperationError::InvalidLetter);
        }
        if a == b {
            return Err(OperationError::SelfConnection);
        }
        if self.is_plugged(a) || self.is_plugged(b) {
            return Err(OperationError::AlreadyConnected);
        }
        if self.pairs.len() == MAX_PAIRS {
            return Err(OperationError::TooManyConnections);
        }

        self.pairs.push((a, b));
        Ok(())
    }

    /// Disconnect the pair containing `letter`.
    pub fn remove(&mut self, letter: char) -> Result<(), OperationError> {
        if !letter.is_ascii_uppercase() {
            return Err(OperationError::InvalidLetter);
        }

        let before = self.pairs.len();
        self.pairs.retain(|&(a, b)| a != letter && b != letter);
        if self.pairs.len() == before { Err(OperationError::NotConnected) } else { Ok(()) }
    }

    /// Replace all pairs, keeping the old ones on failure.
    pub fn replace(&mut self, pairs: &[(char, char)]) -> Result<(), OperationError> {
        if pairs.len() > MAX_PAIRS {
            return Err(OperationError::TooManyConnections);
        }

        let mut scratch = Self::new();
        for &(a, b) in pairs {
            scratch.add(a, b)?;
        }
        *self = scratch;
        Ok(())
    }

    /// Remove every pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Swap a letter with its partner.
    pub fn swap(&self, letter: char) -> char {
        self.pairs
            .iter()
            .find_map(|&(a, b)| {
                if a == letter {
                    Some(b)
                } else if b == letter {
                    Some(a)
                } else {
                    None
                }
            })
            .unwrap_or(letter)
    }

    /// Pairs as `(lower, higher)` in alphabetical order.
    pub fn sorted_pairs(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<_> = self.pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        pairs.sort_unstable();
        pairs
    }
}
