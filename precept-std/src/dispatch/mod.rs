//! Dispatch registries.
//!
//! - [`Registry`] - Owned registry of synchronous instructions
//! - [`RegistryBuilder`] - One-expression wiring of a [`Registry`]
//! - [`SharedRegistry`] - Cloneable, lock-guarded handle to a [`Registry`]
//! - [`AsyncRegistry`] - Registry of awaited instructions

pub mod asynchronous;
pub mod registry;
pub mod shared;
mod table;

#[cfg(all(test, feature = "tracing"))]
mod log_capture;

pub use asynchronous::AsyncRegistry;
pub use registry::{Dispatch, Registry, RegistryBuilder};
pub use shared::SharedRegistry;
