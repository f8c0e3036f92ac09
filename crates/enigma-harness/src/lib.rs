//! Model-based testing harness for the Enigma engine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation that computes each
//! keystroke by composing whole-alphabet permutation tables instead of
//! tracing a single signal. Operations are applied to both the model and the
//! real [`enigma_core::Machine`] (wrapped by [`EngineWorld`]), and their
//! results and observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod model;

pub use engine::EngineWorld;
pub use model::{
    ModelLetter, ModelMachine, ModelPlugboard, ModelWorld, ObservableState, Operation,
    OperationError, OperationResult,
};
