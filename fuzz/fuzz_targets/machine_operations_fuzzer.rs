//! Fuzz target for [`Machine`] configuration and encryption
//!
//! Drive the engine and the reference model with the same operations
//!
//! # Strategy
//!
//! - Machine shape: 1 to 4 catalog rotors, any reflector, either stepping
//!   mode
//! - Operation sequences: plugboard edits, position and ring updates,
//!   keystrokes and whole messages
//! - Invalid input: lowercase, digits and non-ASCII letters mixed into
//!   keystrokes, out-of-range and mismatched setting lists
//!
//! # Invariants
//!
//! - Engine and model agree on every result and every observable state
//! - A rejected operation leaves the state unchanged
//! - No letter ever encrypts to itself
//! - NEVER panic on any operation
//!
//! [`Machine`]: enigma_core::Machine

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{ReflectorKind, RotorKind, SteppingMode};
use enigma_harness::{EngineWorld, ModelWorld, Operation, OperationResult};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Rotor catalog indices, slowest first.
    rotors: Vec<u8>,
    reflector: u8,
    double_step: bool,
    operations: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let rotors: Vec<RotorKind> = input
        .rotors
        .iter()
        .take(4)
        .map(|&i| RotorKind::ALL[usize::from(i) % RotorKind::ALL.len()])
        .collect();
    if rotors.is_empty() {
        return;
    }
    let reflector = ReflectorKind::ALL[usize::from(input.reflector) % ReflectorKind::ALL.len()];
    let stepping =
        if input.double_step { SteppingMode::DoubleStep } else { SteppingMode::SingleCarry };

    let mut model = ModelWorld::new(&rotors, reflector, stepping);
    let Ok(mut engine) = EngineWorld::new(&rotors, reflector, stepping) else {
        panic!("catalog machine failed to build");
    };

    for op in input.operations.iter().take(256) {
        let before = engine.observable_state();
        let engine_result = engine.apply(op);
        let model_result = model.apply(op);

        assert_eq!(engine_result, model_result, "result divergence on {op:?}");
        assert_eq!(engine.observable_state(), model.observable_state(), "state divergence on {op:?}");

        match (&engine_result, op) {
            (OperationResult::Error(_), _) => {
                assert_eq!(before, engine.observable_state(), "{op:?} failed but mutated state");
            },
            (OperationResult::Output(out), Operation::EncryptLetter { letter }) => {
                assert_ne!(out.chars().next(), Some(letter.to_char()), "letter encrypted to itself");
            },
            _ => {},
        }
    }
});
