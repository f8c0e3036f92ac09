//! Enigma Rotor Cipher Engine
//!
//! This crate simulates the electromechanical rotor cipher machine: an ordered
//! stack of wired rotors, a fixed reflector and a pairwise-swap plugboard.
//!
//! # Architecture
//!
//! ```text
//! Machine
//!   ├─ Plugboard   (up to 10 symmetric letter swaps)
//!   ├─ Rotor × N   (wiring + notch + ring setting + position)
//!   └─ Reflector   (involutive, fixed-point-free wiring)
//! ```
//!
//! Per keystroke the machine steps its rotors and then sends the signal
//! through plugboard, rotors (fastest to slowest), reflector, rotors (slowest
//! to fastest) and plugboard again.
//!
//! # Rotor Order
//!
//! Rotors are stored left to right as they appear in the rotor window. The
//! last rotor is the fastest one and steps on every keystroke.
//!
//! # Design
//!
//! - Plain data: no trait objects, the machine exclusively owns its parts
//! - Atomic configuration: a rejected call leaves the machine unchanged
//! - Deterministic: the same settings and input always produce the same output
//!
//! # Example
//!
//! ```
//! use enigma_core::MachineSettings;
//!
//! let mut machine = MachineSettings::default().build().unwrap();
//! let ciphertext = machine.encrypt_string("bootdev rocks").unwrap();
//! assert_eq!(ciphertext, "WLQUCDIFFVVH");
//!
//! machine.set_rotor_positions(&['A', 'A', 'A']).unwrap();
//! assert_eq!(machine.decrypt_string(&ciphertext).unwrap(), "BOOTDEVROCKS");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod format;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
pub mod settings;

pub use alphabet::{ALPHABET_SIZE, RotorSetting};
pub use catalog::{ReflectorKind, RotorKind};
pub use error::EnigmaError;
pub use format::{HISTORICAL_BLOCK_SIZE, group_blocks};
pub use machine::{Machine, SteppingMode};
pub use plugboard::{MAX_CONNECTIONS, Plugboard};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::{MachineSettings, PlugboardSettings};
