//! Model world - applies operations to the reference machine.

use enigma_core::{ReflectorKind, RotorKind, SteppingMode};

use super::{
    machine::ModelMachine,
    operation::{Operation, OperationResult},
};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Rotor positions, left to right.
    pub positions: Vec<u8>,
    /// Ring settings, left to right.
    pub rings: Vec<u8>,
    /// Plugboard pairs as `(lower, higher)`, sorted.
    pub connections: Vec<(char, char)>,
}

/// Model world - the reference implementation.
#[derive(Debug, Clone)]
pub struct ModelWorld {
    machine: ModelMachine,
}

impl ModelWorld {
    /// Create a world around a catalog machine.
    pub fn new(rotors: &[RotorKind], reflector: ReflectorKind, stepping: SteppingMode) -> Self {
        Self { machine: ModelMachine::new(rotors, reflector, stepping) }
    }

    /// The model machine.
    pub fn machine(&self) -> &ModelMachine {
        &self.machine
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real engine's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let result = match op {
            Operation::AddConnection { a, b } => {
                self.machine.plugboard_mut().add(a.to_char(), b.to_char()).map(|()| None)
            },
            Operation::RemoveConnection { a } => {
                self.machine.plugboard_mut().remove(a.to_char()).map(|()| None)
            },
            Operation::SetConnections { pairs } => {
                let pairs: Vec<_> = pairs.iter().map(|(a, b)| (a.to_char(), b.to_char())).collect();
                self.machine.plugboard_mut().replace(&pairs).map(|()| None)
            },
            Operation::ClearConnections => {
                self.machine.plugboard_mut().clear();
                Ok(None)
            },
            Operation::SetPositions { positions } => {
                self.machine.set_positions(positions).map(|()| None)
            },
            Operation::SetRingSettings { rings } => self.machine.set_rings(rings).map(|()| None),
            Operation::EncryptLetter { letter } => {
                self.machine.press(letter.to_char()).map(|c| Some(c.to_string()))
            },
            Operation::EncryptText { letters } => {
                let message: String = letters.iter().map(|l| l.to_char()).collect();
                self.machine.type_message(&message).map(Some)
            },
        };

        match result {
            Ok(None) => OperationResult::Ok,
            Ok(Some(output)) => OperationResult::Output(output),
            Err(e) => OperationResult::Error(e),
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            positions: self.machine.positions(),
            rings: self.machine.rings(),
            connections: self.machine.plugboard().sorted_pairs(),
        }
    }
}
