//! Name-keyed, append-only instruction lists shared by the registries.

use std::collections::HashMap;

/// Maps event names to the instructions registered under them.
///
/// Lists are created on first append and never shrink, reorder, or go away.
pub(crate) struct EventTable<T> {
    events: HashMap<String, Vec<T>>,
}

impl<T> EventTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Append `item` to the list for `name`, creating the list if needed.
    ///
    /// Returns the new length of the list.
    pub(crate) fn append(&mut self, name: String, item: T) -> usize {
        let list = self.events.entry(name).or_default();
        list.push(item);
        list.len()
    }

    /// The instructions registered under `name`, in registration order.
    pub(crate) fn get(&self, name: &str) -> Option<&[T]> {
        self.events.get(name).map(Vec::as_slice)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.events.get(name).map_or(0, Vec::len)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> Default for EventTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
