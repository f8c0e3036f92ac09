//! Fuzz target for [`MachineSettings`] parsing and building
//!
//! Feed arbitrary names, pair strings and setting strings to the settings
//! layer
//!
//! # Invariants
//!
//! - Building either succeeds or returns an error, NEVER panics
//! - A built machine round-trips any letter message
//!
//! [`MachineSettings`]: enigma_core::MachineSettings

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{MachineSettings, PlugboardSettings, SteppingMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    rotors: Vec<String>,
    reflector: String,
    positions: String,
    rings: String,
    pairs: Vec<String>,
    double_step: bool,
    message: String,
}

fuzz_target!(|input: FuzzInput| {
    let settings = MachineSettings {
        rotors: input.rotors,
        reflector: input.reflector,
        rotor_positions: input.positions,
        rotor_ring_settings: input.rings,
        plugboard: PlugboardSettings { pairs: input.pairs },
        stepping: if input.double_step { SteppingMode::DoubleStep } else { SteppingMode::SingleCarry },
    };

    let Ok(mut machine) = settings.build() else {
        return;
    };
    let start = machine.rotor_positions();

    let Ok(ciphertext) = machine.encrypt_string(&input.message) else {
        assert_eq!(machine.rotor_positions(), start, "invalid message moved the rotors");
        return;
    };

    let Ok(mut receiver) = settings.build() else {
        panic!("settings built once but not twice");
    };
    let plaintext = receiver.decrypt_string(&ciphertext);
    let expected = enigma_core::Machine::normalize_message(&input.message);
    assert_eq!(plaintext, expected, "decryption did not recover the message");
});
