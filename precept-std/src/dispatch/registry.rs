//! The dispatch registry.
//!
//! A [`Registry`] maps event names to ordered lists of instructions.
//! Registration appends; firing walks the list in registration order and
//! stops at the first instruction that applies.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = Registry::new();
//! registry.add_instruction_to_event(|args: &[u32]| args[0] > 14, "routeX");
//! registry.add_instruction_to_event(|args: &[u32]| args[0] == 0, "routeX");
//!
//! assert!(registry.do_event("routeX", &[20])?);
//! assert!(!registry.do_event("unregisteredX", &[3])?);
//! ```

use super::table::EventTable;
use precept_core::{Argument, DispatchError, Instruction, Outcome, Trigger};
use std::fmt;

/// What happened when an event was fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// No instruction is registered under the event name. Nothing ran.
    NotRegistered,
    /// Every instruction ran and none applied.
    Exhausted,
    /// The instruction at `position` applied; the ones after it did not run.
    Applied {
        /// Zero-based position in the event's instruction list.
        position: usize,
    },
}

impl Dispatch {
    /// Whether the event was recognized and its instructions processed.
    ///
    /// This is `true` for [`Dispatch::Exhausted`] too: it distinguishes
    /// "nothing to process" from "processed", not "some instruction applied".
    pub fn is_processed(self) -> bool {
        !matches!(self, Dispatch::NotRegistered)
    }

    /// Position of the instruction that applied, if any.
    pub fn applied_position(self) -> Option<usize> {
        match self {
            Dispatch::Applied { position } => Some(position),
            Dispatch::NotRegistered | Dispatch::Exhausted => None,
        }
    }
}

/// Runs `instructions` in order until one applies.
pub(crate) fn run_sequence<A: Argument>(
    event_name: &str,
    instructions: &[Box<dyn Instruction<A>>],
    params: &[A],
) -> Result<Dispatch, DispatchError> {
    if instructions.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(event = event_name, "event has no instructions");
        return Ok(Dispatch::NotRegistered);
    }

    for (position, instruction) in instructions.iter().enumerate() {
        let outcome = instruction.apply(params).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!(event = event_name, position, error = %source, "instruction failed");
            DispatchError::Instruction {
                event: event_name.to_string(),
                position,
                source,
            }
        })?;

        #[cfg(feature = "tracing")]
        tracing::trace!(event = event_name, position, ?outcome, "instruction evaluated");

        if outcome == Outcome::Applied {
            #[cfg(feature = "tracing")]
            tracing::debug!(event = event_name, position, "instruction applied");
            return Ok(Dispatch::Applied { position });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        event = event_name,
        evaluated = instructions.len(),
        "no instruction applied"
    );
    Ok(Dispatch::Exhausted)
}

/// A registry of named events and their ordered instructions.
///
/// The registry is plain owned state: construct one during application
/// wiring, register instructions into it, and hand it (or an `Arc` of it) to
/// whatever fires events. Registration needs `&mut self`; firing needs only
/// `&self`. For registration and firing from several threads at once, use
/// [`SharedRegistry`](super::SharedRegistry).
pub struct Registry<A: Argument> {
    table: EventTable<Box<dyn Instruction<A>>>,
}

impl<A: Argument> Registry<A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: EventTable::new(),
        }
    }

    /// Append an instruction to the end of an event's list.
    ///
    /// The event is registered by its first instruction. Registering under a
    /// known name never resets the list, and the same instruction value may
    /// be added any number of times.
    pub fn add_instruction_to_event<I: Instruction<A>>(
        &mut self,
        instruction: I,
        event_name: impl Into<String>,
    ) {
        self.add_boxed_instruction(Box::new(instruction), event_name);
    }

    /// Append an already boxed instruction to the end of an event's list.
    pub fn add_boxed_instruction(
        &mut self,
        instruction: Box<dyn Instruction<A>>,
        event_name: impl Into<String>,
    ) {
        let event_name = event_name.into();

        #[cfg(feature = "tracing")]
        let event = event_name.clone();

        let count = self.table.append(event_name, instruction);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            event = %event,
            created = count == 1,
            count,
            "instruction registered"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = count;
    }

    /// Append several instructions to an event, in iteration order.
    pub fn add_instructions_to_event<I, It>(
        &mut self,
        instructions: It,
        event_name: impl Into<String>,
    ) where
        I: Instruction<A>,
        It: IntoIterator<Item = I>,
    {
        let event_name = event_name.into();
        for instruction in instructions {
            self.add_instruction_to_event(instruction, event_name.clone());
        }
    }

    /// Fire an event.
    ///
    /// Returns `Ok(false)` when nothing is registered under `event_name`.
    /// Otherwise invokes the instructions in registration order with
    /// `params`, stops after the first one that applies, and returns
    /// `Ok(true)`, also when none of them applied.
    ///
    /// A failing instruction aborts the firing: the instructions after it do
    /// not run and its error is returned inside
    /// [`DispatchError::Instruction`]. Panics are not caught.
    pub fn do_event(&self, event_name: &str, params: &[A]) -> Result<bool, DispatchError> {
        self.dispatch(event_name, params).map(Dispatch::is_processed)
    }

    /// Fire the event described by `trigger`.
    pub fn fire(&self, trigger: &Trigger<A>) -> Result<bool, DispatchError> {
        self.do_event(trigger.name(), trigger.parameters())
    }

    /// Fire an event and report which instruction, if any, applied.
    pub fn dispatch(&self, event_name: &str, params: &[A]) -> Result<Dispatch, DispatchError> {
        match self.table.get(event_name) {
            Some(instructions) => run_sequence(event_name, instructions, params),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(event = event_name, "event not registered");
                Ok(Dispatch::NotRegistered)
            }
        }
    }

    /// Whether any instruction is registered under `event_name`.
    pub fn contains_event(&self, event_name: &str) -> bool {
        self.table.contains(event_name)
    }

    /// Number of instructions registered under `event_name`.
    pub fn instruction_count(&self, event_name: &str) -> usize {
        self.table.count(event_name)
    }

    /// Names of all registered events, in no particular order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no event has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<A: Argument> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Argument> fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.table.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RegistryBuilder - for wiring at startup
// ============================================================================

/// Builder for constructing a [`Registry`] in one expression.
///
/// Registration order is kept exactly; there is no priority sorting.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(is_over_14_days, "routeX")
///     .register(is_logged_out, "routeX")
///     .build();
/// ```
pub struct RegistryBuilder<A: Argument> {
    registry: Registry<A>,
}

impl<A: Argument> RegistryBuilder<A> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register an instruction under an event name.
    pub fn register<I: Instruction<A>>(
        mut self,
        instruction: I,
        event_name: impl Into<String>,
    ) -> Self {
        self.register_mut(instruction, event_name);
        self
    }

    /// Register an instruction under an event name (mutable version).
    pub fn register_mut<I: Instruction<A>>(
        &mut self,
        instruction: I,
        event_name: impl Into<String>,
    ) {
        self.registry.add_instruction_to_event(instruction, event_name);
    }

    /// Finish wiring and return the registry.
    pub fn build(self) -> Registry<A> {
        self.registry
    }
}

impl<A: Argument> Default for RegistryBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
