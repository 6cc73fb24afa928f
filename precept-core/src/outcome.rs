//! Instruction outcomes and their conversions.

use crate::error::BoxError;

/// Result of an instruction indicating whether the firing should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The instruction's conditions held and its effect ran; stop the firing.
    Applied,
    /// The conditions did not hold; continue with the next instruction.
    Skipped,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Applied`].
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Skipped
        }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_applied()
    }
}

/// Trait for converting an instruction's return value into an [`Outcome`].
///
/// # Default Implementations
///
/// - `bool` → `true` = Applied, `false` = Skipped
/// - `Outcome` → As is
/// - `Option<T>` → `None` = Skipped, otherwise delegates to `T`
/// - `Result<T, E>` → Delegates to inner `T` or fails the instruction
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from an instruction",
    label = "missing `IntoOutcome` implementation",
    note = "Instructions return `bool`, `Outcome`, or a `Result` of either."
)]
pub trait IntoOutcome {
    /// Convert the value into an outcome or an instruction failure.
    fn into_outcome(self) -> Result<Outcome, BoxError>;
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::from(self))
    }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(self)
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(Outcome::Skipped),
        }
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}
