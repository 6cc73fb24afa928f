//! Registry for asynchronous instructions.

use super::{registry::Dispatch, table::EventTable};
use precept_core::{
    Argument, AsyncInstruction, DispatchError, DynAsyncInstruction, Outcome, Trigger,
};
use std::fmt;

/// Awaits `instructions` in order until one applies.
pub(crate) async fn run_sequence<A: Argument>(
    event_name: &str,
    instructions: &[Box<dyn DynAsyncInstruction<A>>],
    params: &[A],
) -> Result<Dispatch, DispatchError> {
    if instructions.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(event = event_name, "event has no instructions");
        return Ok(Dispatch::NotRegistered);
    }

    for (position, instruction) in instructions.iter().enumerate() {
        let outcome = instruction.apply_dyn(params).await.map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!(event = event_name, position, error = %source, "instruction failed");
            DispatchError::Instruction {
                event: event_name.to_string(),
                position,
                source,
            }
        })?;

        #[cfg(feature = "tracing")]
        tracing::trace!(event = event_name, position, ?outcome, "instruction resolved");

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

/// A registry whose instructions are awaited.
///
/// Semantics match [`Registry`](super::Registry): append-only registration,
/// firing in registration order, first applying instruction wins. Each
/// instruction is awaited to completion before the next one is polled, so no
/// two instructions of one firing ever run concurrently.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = AsyncRegistry::new();
/// registry.add_instruction_to_event(
///     |args: &[UserId]| {
///         let user = args[0];
///         async move { sessions.is_expired(user).await }
///     },
///     "routeX",
/// );
///
/// registry.do_event("routeX", &[user]).await?;
/// ```
pub struct AsyncRegistry<A: Argument> {
    table: EventTable<Box<dyn DynAsyncInstruction<A>>>,
}

impl<A: Argument> AsyncRegistry<A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: EventTable::new(),
        }
    }

    /// Append an instruction to the end of an event's list.
    ///
    /// Synchronous instructions can be added by wrapping them in
    /// [`Immediate`](precept_core::Immediate).
    pub fn add_instruction_to_event<I: AsyncInstruction<A>>(
        &mut self,
        instruction: I,
        event_name: impl Into<String>,
    ) {
        let event_name = event_name.into();

        #[cfg(feature = "tracing")]
        let event = event_name.clone();

        let count = self.table.append(event_name, Box::new(instruction));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            event = %event,
            created = count == 1,
            count,
            "async instruction registered"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = count;
    }

    /// Fire an event.
    ///
    /// Same contract as [`Registry::do_event`](super::Registry::do_event).
    pub async fn do_event(&self, event_name: &str, params: &[A]) -> Result<bool, DispatchError> {
        self.dispatch(event_name, params).await.map(Dispatch::is_processed)
    }

    /// Fire the event described by `trigger`.
    pub async fn fire(&self, trigger: &Trigger<A>) -> Result<bool, DispatchError> {
        self.do_event(trigger.name(), trigger.parameters()).await
    }

    /// Fire an event and report which instruction, if any, applied.
    pub async fn dispatch(
        &self,
        event_name: &str,
        params: &[A],
    ) -> Result<Dispatch, DispatchError> {
        match self.table.get(event_name) {
            Some(instructions) => run_sequence(event_name, instructions, params).await,
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

impl<A: Argument> Default for AsyncRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Argument> fmt::Debug for AsyncRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRegistry")
            .field("events", &self.table.len())
            .finish_non_exhaustive()
    }
}
