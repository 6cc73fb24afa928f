#![allow(dead_code)]

use precept::testing::{CallLog, RecordingInstruction};

// ============================================================================
// Test Arguments
// ============================================================================

/// What the route instructions in these tests are fired with.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Days(u32),
    LoggedIn(bool),
    Text(&'static str),
}

impl Arg {
    /// Loose truthiness: zero, `false` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Arg::Days(days) => *days != 0,
            Arg::LoggedIn(logged_in) => *logged_in,
            Arg::Text(text) => !text.is_empty(),
        }
    }
}

// ============================================================================
// Test Instructions
// ============================================================================

/// Applies when the first argument is more than 14 days.
pub fn is_over_14_days(args: &[Arg]) -> bool {
    matches!(args.first(), Some(Arg::Days(days)) if *days > 14)
}

/// Applies when the first argument is missing or falsy.
pub fn is_logged_out(args: &[Arg]) -> bool {
    args.first().is_none_or(|arg| !arg.is_truthy())
}

/// Recording instructions sharing one log, labelled in order.
pub fn recorders(
    log: &CallLog,
    outcomes: &[(&'static str, bool)],
) -> Vec<RecordingInstruction<Arg>> {
    outcomes
        .iter()
        .map(|&(label, applies)| {
            let instruction = if applies {
                RecordingInstruction::applying(label)
            } else {
                RecordingInstruction::skipping(label)
            };
            instruction.with_log(log)
        })
        .collect()
}
