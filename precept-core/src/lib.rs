//! # precept-core
//!
//! Core traits for the Precept conditional dispatch framework.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only *defines* instructions. The registries live in `precept-std`.
//!
//! # Model
//!
//! - An **event** is a name.
//! - An **instruction** ([`Instruction`]) is a predicate-with-effect
//!   registered under an event name. Instructions of one event form an
//!   ordered list; registration order is priority order.
//! - **Firing** an event offers its parameters to each instruction in order
//!   until one returns [`Outcome::Applied`].
//!
//! Asynchronous instructions ([`AsyncInstruction`]) follow the same model,
//! awaited one at a time.
//!
//! # Error Types
//!
//! - [`DispatchError`] - A firing was aborted by a failing instruction
//! - [`InstructionError`] - Errors raised by instruction decorators

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod argument;
mod async_instruction;
mod error;
mod instruction;
mod outcome;
mod trigger;

// Re-exports
pub use argument::Argument;
pub use async_instruction::{AsyncInstruction, DynAsyncInstruction, Immediate};
pub use error::{BoxError, DispatchError, InstructionError};
pub use instruction::Instruction;
pub use outcome::{IntoOutcome, Outcome};
pub use trigger::Trigger;
