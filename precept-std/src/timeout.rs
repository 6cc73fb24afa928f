//! Timeout decorator for time-limited async instructions.

use precept_core::{Argument, AsyncInstruction, BoxError, InstructionError, Outcome};
use std::time::Duration;
use tokio::time::timeout;

/// An async instruction that fails if its inner instruction does not
/// resolve within `duration`.
///
/// A timed-out instruction aborts the firing like any other failing
/// instruction; the error is [`InstructionError::Timeout`].
pub struct Timeout<I> {
    inner: I,
    duration: Duration,
}

impl<I> Timeout<I> {
    /// Wrap `inner` with a time limit.
    pub fn new(inner: I, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// The configured time limit.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<A: Argument, I: AsyncInstruction<A>> AsyncInstruction<A> for Timeout<I> {
    async fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        match timeout(self.duration, self.inner.apply(params)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(InstructionError::Timeout(self.duration))),
        }
    }
}
