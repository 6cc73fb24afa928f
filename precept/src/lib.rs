//! # precept - Priority-Ordered Conditional Dispatch
//!
//! `precept` maps named events to ordered lists of *instructions*:
//! callables that check a condition and, when it holds, perform an effect.
//! Firing an event offers its parameters to each instruction in registration
//! order and stops at the first one that applies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use precept::prelude::*;
//!
//! fn is_over_14_days(args: &[u32]) -> bool {
//!     args.first().is_some_and(|days| *days > 14)
//! }
//!
//! fn is_logged_out(args: &[u32]) -> bool {
//!     args.first().is_none_or(|session| *session == 0)
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(is_over_14_days, "routeX")
//!     .register(is_logged_out, "routeX")
//!     .build();
//!
//! // Only `is_over_14_days` runs.
//! assert!(registry.do_event("routeX", &[20])?);
//! // Nothing is registered under this name.
//! assert!(!registry.do_event("unregisteredX", &[3])?);
//! ```
//!
//! ## Return Value of a Firing
//!
//! `do_event` returns `false` only when nothing is registered under the name.
//! It returns `true` once the instruction list has been processed, whether or
//! not an instruction applied. Use `dispatch` to learn which one applied.
//!
//! ## Features
//!
//! - `tracing` (default): log registration and firing through `tracing`
//! - `timeout`: the `Timeout` decorator for async instructions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use precept_core::{
    // Arguments
    Argument,
    // Instructions
    AsyncInstruction,
    // Error types
    BoxError,
    DispatchError,
    DynAsyncInstruction,
    Immediate,
    Instruction,
    InstructionError,
    // Outcomes
    IntoOutcome,
    Outcome,
    // Descriptors
    Trigger,
};

// Registries
pub use precept_std::dispatch::{AsyncRegistry, Dispatch, Registry, RegistryBuilder, SharedRegistry};

/// Dispatch registries.
pub mod dispatch {
    pub use precept_std::dispatch::{
        AsyncRegistry, Dispatch, Registry, RegistryBuilder, SharedRegistry,
    };
}

/// Instruction decorators.
#[cfg(feature = "timeout")]
pub mod decorators {
    pub use precept_std::timeout::Timeout;
}

/// Testing utilities.
pub mod testing {
    pub use precept_std::testing::{CallLog, FailingInstruction, RecordingInstruction};
}

/// Prelude module - common imports for Precept.
///
/// # Usage
///
/// ```rust,ignore
/// use precept::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Registries
        AsyncRegistry,
        // Errors
        BoxError,
        Dispatch,
        DispatchError,
        // Core traits
        Instruction,
        Outcome,
        Registry,
        RegistryBuilder,
        SharedRegistry,
        Trigger,
    };
}
