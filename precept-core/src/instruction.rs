//! # Instructions
//!
//! An instruction is a unit of business logic attached to a named event: a
//! predicate and an effect in one callable. When the event fires, the
//! registry offers the firing's parameters to each instruction in
//! registration order. The first one whose conditions hold performs its
//! effect and reports [`Outcome::Applied`], which ends the firing.
//!
//! Instructions are opaque to the registry. Whether two instructions of the
//! same event are mutually exclusive is a usage convention the registry does
//! not check.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|args: &[u32]| args.first().is_some_and(|d| *d > 14)`
//! 2. **Function item**: `fn is_logged_out(args: &[Session]) -> bool`
//! 3. **Struct implementation**: `impl Instruction<Session> for ExpireSession`

use crate::{
    argument::Argument,
    error::BoxError,
    outcome::{IntoOutcome, Outcome},
};

/// A predicate-with-effect invoked when an event fires.
///
/// Returning `Ok(Outcome::Applied)` stops the firing; `Ok(Outcome::Skipped)`
/// lets the next instruction run. An `Err` aborts the firing and is returned
/// to whoever fired the event.
///
/// The trait is object-safe: registries store instructions as
/// `Box<dyn Instruction<A>>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Instruction` over `{A}`",
    label = "missing `Instruction` implementation",
    note = "Closures of the form `|params: &[{A}]| -> bool` are instructions."
)]
pub trait Instruction<A: Argument>: Send + Sync + 'static {
    /// Check the instruction's conditions and, if they hold, run its effect.
    fn apply(&self, params: &[A]) -> Result<Outcome, BoxError>;
}

// Blanket impl for closures and fn items
impl<A, F, R> Instruction<A> for F
where
    A: Argument,
    F: Fn(&[A]) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn apply(&self, params: &[A]) -> Result<Outcome, BoxError> {
        (self)(params).into_outcome()
    }
}
