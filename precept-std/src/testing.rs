//! Testing utilities for Precept.
//!
//! This module provides instructions that make registry behavior observable.
//!
//! # Features
//!
//! - [`CallLog`]: A shared log of which instructions ran, in order
//! - [`RecordingInstruction`]: Records every parameter slice it receives
//! - [`FailingInstruction`]: Always fails, counting its invocations

use precept_core::{Argument, AsyncInstruction, BoxError, Instruction, Outcome};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// An ordered log of instruction labels, shared between instructions.
///
/// Give several [`RecordingInstruction`]s the same log to assert the order
/// in which a firing invoked them.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, label: &'static str) {
        self.entries.lock().unwrap().push(label);
    }

    /// Labels in invocation order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Instruction
// ============================================================================

/// An instruction that records the parameters of every invocation and
/// returns a fixed outcome.
///
/// Clones share their records, so keep a clone to inspect after registering.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let a = RecordingInstruction::skipping("a").with_log(&log);
/// let b = RecordingInstruction::applying("b").with_log(&log);
///
/// registry.add_instruction_to_event(a.clone(), "routeX");
/// registry.add_instruction_to_event(b.clone(), "routeX");
/// registry.do_event("routeX", &[20])?;
///
/// assert_eq!(log.entries(), vec!["a", "b"]);
/// assert_eq!(b.calls(), vec![vec![20]]);
/// ```
pub struct RecordingInstruction<A> {
    label: &'static str,
    outcome: Outcome,
    calls: Arc<Mutex<Vec<Vec<A>>>>,
    log: Option<CallLog>,
}

impl<A: Clone> RecordingInstruction<A> {
    /// Create a recording instruction returning `outcome`.
    pub fn new(label: &'static str, outcome: Outcome) -> Self {
        Self {
            label,
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
            log: None,
        }
    }

    /// Create a recording instruction that applies.
    pub fn applying(label: &'static str) -> Self {
        Self::new(label, Outcome::Applied)
    }

    /// Create a recording instruction that skips.
    pub fn skipping(label: &'static str) -> Self {
        Self::new(label, Outcome::Skipped)
    }

    /// Also append this instruction's label to `log` on every invocation.
    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// The label given at construction.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get a clone of the recorded parameter slices, one per invocation.
    pub fn calls(&self) -> Vec<Vec<A>> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, params: &[A]) -> Outcome {
        self.calls.lock().unwrap().push(params.to_vec());
        if let Some(log) = &self.log {
            log.push(self.label);
        }
        self.outcome
    }
}

impl<A> Clone for RecordingInstruction<A> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            outcome: self.outcome,
            calls: self.calls.clone(),
            log: self.log.clone(),
        }
    }
}

impl<A: Argument + Clone> Instruction<A> for RecordingInstruction<A> {
    fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        Ok(self.record(params))
    }
}

impl<A: Argument + Clone> AsyncInstruction<A> for RecordingInstruction<A> {
    async fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        Ok(self.record(params))
    }
}

// ============================================================================
// Failing Instruction
// ============================================================================

/// An instruction that always fails with a fixed message.
#[derive(Clone)]
pub struct FailingInstruction {
    message: &'static str,
    count: Arc<AtomicUsize>,
}

impl FailingInstruction {
    /// Create a failing instruction.
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of invocations.
    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn fail(&self) -> BoxError {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.message.into()
    }
}

impl<A: Argument> Instruction<A> for FailingInstruction {
    fn apply(&self, _params: &[A]) -> Result<Outcome, BoxError> {
        Err(self.fail())
    }
}

impl<A: Argument> AsyncInstruction<A> for FailingInstruction {
    async fn apply(&self, _params: &[A]) -> Result<Outcome, BoxError> {
        Err(self.fail())
    }
}
