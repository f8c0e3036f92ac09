//! Historical wiring tables.
//!
//! Resolves rotor names `I`–`V` and reflector names `A`–`C` to the wiring
//! of the three-rotor service machine.

use std::{fmt, str::FromStr};

use crate::{error::EnigmaError, reflector::Reflector, rotor::Rotor};

/// Rotors available in the catalog.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    /// Rotor I, turnover at Q.
    I,
    /// Rotor II, turnover at E.
    II,
    /// Rotor III, turnover at V.
    III,
    /// Rotor IV, turnover at J.
    IV,
    /// Rotor V, turnover at Z.
    V,
}

impl RotorKind {
    /// All catalog rotors.
    pub const ALL: [Self; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];

    /// Catalog name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        }
    }

    /// Wiring as seen from the entry side at position `A`.
    pub const fn wiring(self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFEKC",
        }
    }

    /// Position that carries into the next rotor when stepped from.
    pub const fn notch(self) -> char {
        match self {
            Self::I => 'Q',
            Self::II => 'E',
            Self::III => 'V',
            Self::IV => 'J',
            Self::V => 'Z',
        }
    }

    /// Build a fresh rotor at position `A`, ring setting `A`.
    pub fn build(self) -> Result<Rotor, EnigmaError> {
        Rotor::new(self.wiring(), self.notch())
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EnigmaError::UnknownRotor(s.to_string()))
    }
}

/// Reflectors available in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    /// Reflector A.
    A,
    /// Reflector B, the wartime standard.
    B,
    /// Reflector C.
    C,
}

impl ReflectorKind {
    /// All catalog reflectors.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Catalog name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Reflector wiring.
    pub const fn wiring(self) -> &'static str {
        match self {
            Self::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    /// Build the reflector.
    pub fn build(self) -> Result<Reflector, EnigmaError> {
        Reflector::new(self.wiring())
    }
}

impl fmt::Display for ReflectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorKind {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EnigmaError::UnknownReflector(s.to_string()))
    }
}
