//! Plugboard
//!
//! Symmetric letter swaps applied on the way into and out of the rotor
//! stack. Unconnected letters pass through unchanged.
//!
//! ## Invariants
//!
//! - Symmetry: `A` maps to `B` exactly when `B` maps to `A`
//! - No letter is connected to itself or belongs to two pairs
//! - At most [`MAX_CONNECTIONS`] pairs

use std::fmt;

use crate::{
    alphabet::{self, ALPHABET_SIZE},
    error::EnigmaError,
};

/// Maximum number of plugboard pairs.
pub const MAX_CONNECTIONS: usize = 10;

/// Pairwise letter-swap panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    /// Partner index for each letter, `None` when unplugged.
    connections: [Option<u8>; ALPHABET_SIZE as usize],
}

impl Plugboard {
    /// Create an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plugboard holding the given pairs.
    ///
    /// Fails with [`EnigmaError::TooManyConnections`] before looking at any
    /// pair when more than [`MAX_CONNECTIONS`] are given.
    pub fn with_connections(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        if pairs.len() > MAX_CONNECTIONS {
            return Err(EnigmaError::TooManyConnections { count: pairs.len() });
        }

        let mut board = Self::new();
        for &(a, b) in pairs {
            board.add_connection(a, b)?;
        }
        Ok(board)
    }

    /// Connect two letters.
    pub fn add_connection(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        let ia = alphabet::index_of(a)?;
        let ib = alphabet::index_of(b)?;

        if ia == ib {
            return Err(EnigmaError::SelfConnection(a));
        }
        if self.connections[usize::from(ia)].is_some() {
            return Err(EnigmaError::AlreadyConnected(a));
        }
        if self.connections[usize::from(ib)].is_some() {
            return Err(EnigmaError::AlreadyConnected(b));
        }

        let count = self.count_connections();
        if count == MAX_CONNECTIONS {
            return Err(EnigmaError::TooManyConnections { count: count + 1 });
        }

        self.connections[usize::from(ia)] = Some(ib);
        self.connections[usize::from(ib)] = Some(ia);
        tracing::debug!("plugboard connected {a}-{b}");
        Ok(())
    }

    /// Disconnect a letter and its partner.
    pub fn remove_connection(&mut self, a: char) -> Result<(), EnigmaError> {
        let ia = alphabet::index_of(a)?;
        let Some(ib) = self.connections[usize::from(ia)] else {
            return Err(EnigmaError::NotConnected(a));
        };

        self.connections[usize::from(ia)] = None;
        self.connections[usize::from(ib)] = None;
        tracing::debug!("plugboard disconnected {a}-{}", alphabet::letter_at(ib));
        Ok(())
    }

    /// Remove every connection.
    pub fn clear_connections(&mut self) {
        self.connections = [None; ALPHABET_SIZE as usize];
    }

    /// Swap a letter with its partner, or return it unchanged.
    pub fn transform(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter)?;
        Ok(alphabet::letter_at(self.transform_index(index)))
    }

    pub(crate) fn transform_index(&self, index: u8) -> u8 {
        self.connections[usize::from(index)].unwrap_or(index)
    }

    /// Number of connected pairs.
    pub fn count_connections(&self) -> usize {
        self.connections.iter().flatten().count() / 2
    }

    /// Partner of a letter, if it is connected.
    pub fn partner(&self, letter: char) -> Option<char> {
        let index = alphabet::index_of(letter).ok()?;
        self.connections[usize::from(index)].map(alphabet::letter_at)
    }

    /// Connected pairs in alphabetical order, each as `(lower, higher)`.
    pub fn connections(&self) -> Vec<(char, char)> {
        (0..ALPHABET_SIZE)
            .filter_map(|a| match self.connections[usize::from(a)] {
                Some(b) if a < b => Some((alphabet::letter_at(a), alphabet::letter_at(b))),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.connections();
        if pairs.is_empty() {
            return write!(f, "none");
        }

        for (i, (a, b)) in pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{a}{b}")?;
        }
        Ok(())
    }
}
