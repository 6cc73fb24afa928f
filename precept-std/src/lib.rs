//! # precept-std
//!
//! Standard implementations for the Precept conditional dispatch framework.
//!
//! This crate provides:
//! - **Registries**: [`Registry`], [`RegistryBuilder`], [`SharedRegistry`], [`AsyncRegistry`]
//! - **Decorators**: `Timeout` (feature `timeout`)
//! - **Testing**: [`testing::RecordingInstruction`], [`testing::FailingInstruction`]
//!
//! [`Registry`]: dispatch::Registry
//! [`RegistryBuilder`]: dispatch::RegistryBuilder
//! [`SharedRegistry`]: dispatch::SharedRegistry
//! [`AsyncRegistry`]: dispatch::AsyncRegistry

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use precept_core;

// Modules
pub mod dispatch;
pub mod testing;
#[cfg(feature = "timeout")]
pub mod timeout;
