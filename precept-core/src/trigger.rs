//! Event descriptors.

use crate::argument::Argument;

/// A named event together with the parameters to fire it with.
///
/// Firing a `Trigger` is the same as firing its name with its parameters;
/// it exists for callers that build the event in one place and fire it in
/// another.
///
/// # Example
///
/// ```rust,ignore
/// let trigger = Trigger::new("routeX").with_parameter(20);
/// registry.fire(&trigger)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger<A> {
    name: String,
    parameters: Vec<A>,
}

impl<A: Argument> Trigger<A> {
    /// Create a trigger with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Create a trigger carrying the given parameters.
    pub fn with_parameters(name: impl Into<String>, parameters: Vec<A>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Append one parameter.
    pub fn with_parameter(mut self, parameter: A) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// The event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameters, in order.
    pub fn parameters(&self) -> &[A] {
        &self.parameters
    }

    /// Split into name and parameters.
    pub fn into_parts(self) -> (String, Vec<A>) {
        (self.name, self.parameters)
    }
}
