//! A registry handle that can be shared across threads.

use super::registry::{Dispatch, Registry};
use precept_core::{Argument, DispatchError, Instruction, Trigger};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable, thread-safe handle to one [`Registry`].
///
/// Every clone refers to the same registry. Each operation holds the
/// registry's lock for its whole duration, so a firing sees a fixed
/// instruction list and registrations made during a firing land after it.
///
/// # Reentrancy
///
/// Instructions run while the lock is held. An instruction must not register
/// into or fire through the same `SharedRegistry`; doing so deadlocks.
///
/// # Poisoning
///
/// Firing never mutates the registry, so a panicking instruction cannot leave
/// it half-updated. A poisoned lock is therefore recovered and used as is.
pub struct SharedRegistry<A: Argument> {
    inner: Arc<Mutex<Registry<A>>>,
}

impl<A: Argument> SharedRegistry<A> {
    /// Create a handle to a new, empty registry.
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Share an existing registry, e.g. one produced by a
    /// [`RegistryBuilder`](super::RegistryBuilder).
    pub fn from_registry(registry: Registry<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an instruction to the end of an event's list.
    ///
    /// See [`Registry::add_instruction_to_event`].
    pub fn add_instruction_to_event<I: Instruction<A>>(
        &self,
        instruction: I,
        event_name: impl Into<String>,
    ) {
        self.lock().add_instruction_to_event(instruction, event_name);
    }

    /// Fire an event. See [`Registry::do_event`].
    pub fn do_event(&self, event_name: &str, params: &[A]) -> Result<bool, DispatchError> {
        self.lock().do_event(event_name, params)
    }

    /// Fire the event described by `trigger`.
    pub fn fire(&self, trigger: &Trigger<A>) -> Result<bool, DispatchError> {
        self.lock().fire(trigger)
    }

    /// Fire an event and report which instruction, if any, applied.
    pub fn dispatch(&self, event_name: &str, params: &[A]) -> Result<Dispatch, DispatchError> {
        self.lock().dispatch(event_name, params)
    }

    /// Run `f` with the registry locked, for inspection.
    pub fn with<R>(&self, f: impl FnOnce(&Registry<A>) -> R) -> R {
        f(&self.lock())
    }

    /// Number of instructions registered under `event_name`.
    pub fn instruction_count(&self, event_name: &str) -> usize {
        self.lock().instruction_count(event_name)
    }

    /// Whether any instruction is registered under `event_name`.
    pub fn contains_event(&self, event_name: &str) -> bool {
        self.lock().contains_event(event_name)
    }
}

impl<A: Argument> Clone for SharedRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: Argument> Default for SharedRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Argument> From<Registry<A>> for SharedRegistry<A> {
    fn from(registry: Registry<A>) -> Self {
        Self::from_registry(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_registry() {
        let registry: SharedRegistry<u32> = SharedRegistry::new();
        let wiring = registry.clone();
        wiring.add_instruction_to_event(|args: &[u32]| args[0] > 14, "routeX");

        assert!(registry.contains_event("routeX"));
        assert_eq!(
            registry.dispatch("routeX", &[20]).unwrap(),
            Dispatch::Applied { position: 0 }
        );
    }

    #[test]
    fn concurrent_registration_creates_one_entry() {
        let registry: SharedRegistry<u32> = SharedRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry.add_instruction_to_event(|_: &[u32]| false, "routeX");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.with(|r| r.len()), 1);
        assert_eq!(registry.instruction_count("routeX"), 8);
        assert!(registry.do_event("routeX", &[]).unwrap());
    }

    #[test]
    fn survives_panicking_instruction() {
        let registry: SharedRegistry<u32> = SharedRegistry::new();
        registry.add_instruction_to_event(
            |args: &[u32]| -> bool { panic!("instruction panicked on {args:?}") },
            "routeX",
        );
        registry.add_instruction_to_event(|_: &[u32]| true, "routeY");

        let firing = registry.clone();
        let joined = thread::spawn(move || firing.do_event("routeX", &[1])).join();
        assert!(joined.is_err());

        assert!(registry.do_event("routeY", &[]).unwrap());
        assert_eq!(registry.instruction_count("routeX"), 1);
    }
}
