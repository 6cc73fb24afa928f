//! Asynchronous instructions.
//!
//! The asynchronous variant of [`Instruction`]: the short-circuit signal is
//! "resolve to [`Outcome::Applied`]" instead of "return it". Registries that
//! hold these await them one at a time, so registration order still decides
//! which instruction wins.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`AsyncInstruction`] uses native `async fn` for static dispatch. Registries
//! store [`DynAsyncInstruction`] trait objects, which every `AsyncInstruction`
//! implements automatically.

use crate::{
    argument::Argument,
    error::BoxError,
    instruction::Instruction,
    outcome::{IntoOutcome, Outcome},
};
use futures::future::BoxFuture;
use std::future::Future;

/// An instruction whose check or effect needs to await.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `AsyncInstruction` over `{A}`",
    label = "missing `AsyncInstruction` implementation",
    note = "Closures of the form `|params: &[{A}]| async move {{ .. }}` are async instructions."
)]
pub trait AsyncInstruction<A: Argument>: Send + Sync + 'static {
    /// Check the instruction's conditions and, if they hold, run its effect.
    fn apply(&self, params: &[A]) -> impl Future<Output = Result<Outcome, BoxError>> + Send;
}

/// Dynamic object-safe version of [`AsyncInstruction`].
pub trait DynAsyncInstruction<A: Argument>: Send + Sync + 'static {
    /// Apply the instruction (dynamic dispatch version).
    fn apply_dyn<'a>(&'a self, params: &'a [A]) -> BoxFuture<'a, Result<Outcome, BoxError>>;
}

impl<A: Argument, T: AsyncInstruction<A>> DynAsyncInstruction<A> for T {
    fn apply_dyn<'a>(&'a self, params: &'a [A]) -> BoxFuture<'a, Result<Outcome, BoxError>> {
        Box::pin(AsyncInstruction::apply(self, params))
    }
}

// Blanket impl for closures returning futures. The future cannot borrow the
// parameters; copy out what it needs before the `async move` block.
impl<A, F, Fut, R> AsyncInstruction<A> for F
where
    A: Argument,
    F: Fn(&[A]) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send,
    R: IntoOutcome,
{
    async fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        (self)(params).await.into_outcome()
    }
}

/// Adapts a synchronous [`Instruction`] for use where an [`AsyncInstruction`]
/// is expected. The returned future is ready on first poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate<I>(pub I);

impl<A: Argument, I: Instruction<A>> AsyncInstruction<A> for Immediate<I> {
    async fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        Instruction::apply(&self.0, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn async_closure_is_an_instruction() {
        let over_14 = |args: &[u32]| {
            let days = args.first().copied();
            async move { days.is_some_and(|d| d > 14) }
        };
        assert_eq!(
            block_on(AsyncInstruction::apply(&over_14, &[20])).unwrap(),
            Outcome::Applied
        );
        assert_eq!(
            block_on(AsyncInstruction::apply(&over_14, &[3])).unwrap(),
            Outcome::Skipped
        );
    }

    #[test]
    fn immediate_wraps_sync_instruction() {
        let boxed: Box<dyn DynAsyncInstruction<u32>> =
            Box::new(Immediate(|args: &[u32]| args.is_empty()));
        assert_eq!(block_on(boxed.apply_dyn(&[])).unwrap(), Outcome::Applied);
        assert_eq!(block_on(boxed.apply_dyn(&[1])).unwrap(), Outcome::Skipped);
    }
}
