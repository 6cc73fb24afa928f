//! Error types for Precept.
//!
//! The registry itself has almost nothing that can go wrong: firing an
//! unknown or empty event is a normal `false`, not an error. What remains is
//! structured with `thiserror`:
//!
//! - [`DispatchError`] - A firing was aborted by a failing instruction
//! - [`InstructionError`] - Errors raised by the crate's instruction decorators

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// This is what an [`Instruction`](crate::Instruction) may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort the firing of an event.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An instruction failed. Instructions after it were not invoked.
    #[error("instruction #{position} of event `{event}` failed")]
    Instruction {
        /// Name of the event being fired.
        event: String,
        /// Zero-based position of the failing instruction in the event's list.
        position: usize,
        /// The error the instruction returned, unchanged.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Name of the event whose firing was aborted.
    pub fn event(&self) -> &str {
        match self {
            DispatchError::Instruction { event, .. } => event,
        }
    }

    /// Position of the failing instruction in the event's list.
    pub fn position(&self) -> usize {
        match self {
            DispatchError::Instruction { position, .. } => *position,
        }
    }

    /// Unwrap the error the instruction returned.
    pub fn into_source(self) -> BoxError {
        match self {
            DispatchError::Instruction { source, .. } => source,
        }
    }
}

/// Errors raised by instruction decorators.
#[derive(Error, Debug)]
pub enum InstructionError {
    /// The instruction did not resolve within its time limit.
    #[error("instruction timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn instruction_error_keeps_source() {
        let err = DispatchError::Instruction {
            event: "routeX".to_string(),
            position: 2,
            source: "database unavailable".into(),
        };

        assert_eq!(err.to_string(), "instruction #2 of event `routeX` failed");
        assert_eq!(err.event(), "routeX");
        assert_eq!(err.position(), 2);
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("database unavailable")
        );
        assert_eq!(err.into_source().to_string(), "database unavailable");
    }

    #[test]
    fn timeout_display() {
        let err = InstructionError::Timeout(Duration::from_millis(50));
        assert_eq!(err.to_string(), "instruction timed out after 50ms");
    }

    #[test]
    fn decorator_errors_are_timeouts_only() {
        let err = InstructionError::Timeout(Duration::from_secs(1));
        let limit = match err {
            InstructionError::Timeout(limit) => limit,
        };
        assert_eq!(limit, Duration::from_secs(1));
    }
}
