//! Reference model for model-based testing.
//!
//! The model is a deliberately naive implementation of the machine. It
//! serves as the oracle against which the real engine is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Independence: Keystrokes are computed by permutation composition, not by
//!   the engine's signal-tracing code path
//! - Deterministic: Same inputs produce same outputs

mod machine;
pub mod operation;
mod plugboard;
mod world;

pub use machine::ModelMachine;
pub use operation::{ModelLetter, Operation, OperationError, OperationResult};
pub use plugboard::ModelPlugboard;
pub use world::{ModelWorld, ObservableState};
