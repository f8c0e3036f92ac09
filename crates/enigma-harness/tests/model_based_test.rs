//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! engine behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!      ModelWorld    EngineWorld      Compare
//!      (reference)   (enigma-core)    Results
//! ```

use enigma_core::{ReflectorKind, RotorKind, SteppingMode};
use enigma_harness::{EngineWorld, ModelLetter, ModelWorld, Operation, OperationResult};
use proptest::prelude::*;

/// Strategy for letters, mostly valid with some invalid symbols.
fn letter_strategy() -> impl Strategy<Value = ModelLetter> {
    prop_oneof![
        9 => (0u8..26).prop_map(ModelLetter),
        1 => (26u8..32).prop_map(ModelLetter),
    ]
}

/// Strategy for rotor values, occasionally out of range or mismatched.
fn values_strategy(rotors: usize) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        8 => prop::collection::vec(0u8..26, rotors),
        1 => prop::collection::vec(0u8..30, rotors),
        1 => prop::collection::vec(0u8..26, 0..6),
    ]
}

/// Strategy for generating operations for a machine with `rotors` rotors.
fn operation_strategy(rotors: usize) -> impl Strategy<Value = Operation> {
    let pair = || (letter_strategy(), letter_strategy());

    prop_oneof![
        // Weight towards keystrokes
        3 => pair().prop_map(|(a, b)| Operation::AddConnection { a, b }),
        1 => letter_strategy().prop_map(|a| Operation::RemoveConnection { a }),
        1 => prop::collection::vec(pair(), 0..12)
            .prop_map(|pairs| Operation::SetConnections { pairs }),
        1 => Just(Operation::ClearConnections),
        1 => values_strategy(rotors).prop_map(|positions| Operation::SetPositions { positions }),
        1 => values_strategy(rotors).prop_map(|rings| Operation::SetRingSettings { rings }),
        5 => letter_strategy().prop_map(|letter| Operation::EncryptLetter { letter }),
        3 => prop::collection::vec(letter_strategy(), 0..40)
            .prop_map(|letters| Operation::EncryptText { letters }),
    ]
}

fn rotors_strategy() -> impl Strategy<Value = Vec<RotorKind>> {
    prop::collection::vec(prop::sample::select(RotorKind::ALL.to_vec()), 1..=4)
}

fn reflector_strategy() -> impl Strategy<Value = ReflectorKind> {
    prop::sample::select(ReflectorKind::ALL.to_vec())
}

fn stepping_strategy() -> impl Strategy<Value = SteppingMode> {
    prop_oneof![Just(SteppingMode::SingleCarry), Just(SteppingMode::DoubleStep)]
}

proptest! {
    /// Verify that operation results and observable state match between the
    /// model and the real engine after every operation.
    #[test]
    fn prop_model_matches_real(
        (rotors, ops) in rotors_strategy().prop_flat_map(|rotors| {
            let n = rotors.len();
            (Just(rotors), prop::collection::vec(operation_strategy(n), 0..60))
        }),
        reflector in reflector_strategy(),
        stepping in stepping_strategy(),
    ) {
        let mut model = ModelWorld::new(&rotors, reflector, stepping);
        let mut real = EngineWorld::new(&rotors, reflector, stepping).unwrap();

        for (i, op) in ops.iter().enumerate() {
            let model_result = model.apply(op);
            let real_result = real.apply(op);

            prop_assert_eq!(
                &model_result,
                &real_result,
                "Divergence at operation {}: {:?}",
                i, op
            );
            prop_assert_eq!(
                model.observable_state(),
                real.observable_state(),
                "State divergence after operation {}: {:?}",
                i, op
            );
        }
    }

    /// A rejected configuration call never changes observable state.
    #[test]
    fn prop_failed_operations_do_not_mutate(
        ops in prop::collection::vec(operation_strategy(3), 0..80)
    ) {
        let mut real =
            EngineWorld::new(&[RotorKind::III, RotorKind::II, RotorKind::I], ReflectorKind::B, SteppingMode::SingleCarry)
                .unwrap();

        for op in ops {
            let before = real.observable_state();
            if real.apply(&op).is_err() {
                prop_assert_eq!(before, real.observable_state(), "{:?} mutated state", op);
            }
        }
    }

    /// The plugboard never holds more than ten pairs or a letter twice.
    #[test]
    fn prop_plugboard_invariants(
        ops in prop::collection::vec(operation_strategy(3), 0..100)
    ) {
        let mut real =
            EngineWorld::new(&[RotorKind::I, RotorKind::II, RotorKind::III], ReflectorKind::B, SteppingMode::DoubleStep)
                .unwrap();

        for op in ops {
            let _ = real.apply(&op);
        }

        let connections = real.observable_state().connections;
        prop_assert!(connections.len() <= 10);

        let mut letters: Vec<char> = connections.iter().flat_map(|&(a, b)| [a, b]).collect();
        let total = letters.len();
        letters.sort_unstable();
        letters.dedup();
        prop_assert_eq!(letters.len(), total, "a letter appears in two pairs");
    }
}

#[cfg(test)]
mod smoke_tests {
    use super::*;

    fn letters(text: &str) -> Vec<ModelLetter> {
        text.bytes().map(|b| ModelLetter(b - b'A')).collect()
    }

    /// Basic smoke test for the model and engine side by side.
    #[test]
    fn model_basic_operations() {
        let rotors = [RotorKind::III, RotorKind::II, RotorKind::I];
        let mut model = ModelWorld::new(&rotors, ReflectorKind::B, SteppingMode::SingleCarry);
        let mut real = EngineWorld::new(&rotors, ReflectorKind::B, SteppingMode::SingleCarry).unwrap();

        let ops = [
            Operation::EncryptText { letters: letters("BOOTDEVROCKS") },
            Operation::SetPositions { positions: vec![0, 0, 0] },
            Operation::AddConnection { a: ModelLetter(12), b: ModelLetter(5) },
            Operation::AddConnection { a: ModelLetter(5), b: ModelLetter(1) },
            Operation::RemoveConnection { a: ModelLetter(0) },
            Operation::EncryptLetter { letter: ModelLetter(0) },
            Operation::SetRingSettings { rings: vec![1, 2] },
        ];

        let expected = [
            OperationResult::Output("WLQUCDIFFVVH".to_string()),
            OperationResult::Ok,
            OperationResult::Ok,
            OperationResult::Error(enigma_harness::OperationError::AlreadyConnected),
            OperationResult::Error(enigma_harness::OperationError::NotConnected),
            OperationResult::Output("M".to_string()),
            OperationResult::Error(enigma_harness::OperationError::MismatchedCount),
        ];

        for (op, want) in ops.iter().zip(expected) {
            assert_eq!(model.apply(op), want, "model: {op:?}");
            assert_eq!(real.apply(op), want, "real: {op:?}");
        }
        assert_eq!(model.observable_state(), real.observable_state());
    }
}
