//! Real engine wrapper that mirrors [`ModelWorld`](crate::ModelWorld)'s
//! interface.

use enigma_core::{EnigmaError, Machine, Plugboard, ReflectorKind, RotorKind, SteppingMode};

use crate::model::{ObservableState, Operation, OperationError, OperationResult};

/// The real [`Machine`] driven by model operations.
#[derive(Debug, Clone)]
pub struct EngineWorld {
    machine: Machine,
}

impl EngineWorld {
    /// Build a machine from catalog parts, all rotors at `A`.
    pub fn new(
        rotors: &[RotorKind],
        reflector: ReflectorKind,
        stepping: SteppingMode,
    ) -> Result<Self, EnigmaError> {
        let rotors = rotors.iter().map(|kind| kind.build()).collect::<Result<Vec<_>, _>>()?;
        let machine =
            Machine::new(rotors, reflector.build()?, Plugboard::new())?.with_stepping(stepping);
        Ok(Self { machine })
    }

    /// The wrapped machine.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Apply an operation to the engine.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let result = match op {
            Operation::AddConnection { a, b } => {
                self.machine.add_plugboard_connection(a.to_char(), b.to_char()).map(|()| None)
            },
            Operation::RemoveConnection { a } => {
                self.machine.remove_plugboard_connection(a.to_char()).map(|()| None)
            },
            Operation::SetConnections { pairs } => {
                let pairs: Vec<_> = pairs.iter().map(|(a, b)| (a.to_char(), b.to_char())).collect();
                self.machine.set_plugboard_connections(&pairs).map(|()| None)
            },
            Operation::ClearConnections => {
                self.machine.clear_plugboard_connections();
                Ok(None)
            },
            Operation::SetPositions { positions } => {
                self.machine.set_rotor_positions(positions.as_slice()).map(|()| None)
            },
            Operation::SetRingSettings { rings } => {
                self.machine.set_rotor_ring_settings(rings.as_slice()).map(|()| None)
            },
            Operation::EncryptLetter { letter } => {
                self.machine.encrypt_letter(letter.to_char()).map(|c| Some(c.to_string()))
            },
            Operation::EncryptText { letters } => {
                let message: String = letters.iter().map(|l| l.to_char()).collect();
                self.machine.encrypt_string(&message).map(Some)
            },
        };

        match result {
            Ok(None) => OperationResult::Ok,
            Ok(Some(output)) => OperationResult::Output(output),
            Err(e) => OperationResult::Error(OperationError::from(&e)),
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            positions: self.machine.rotor_positions(),
            rings: self.machine.rotor_ring_settings(),
            connections: self.machine.plugboard_connections(),
        }
    }
}
