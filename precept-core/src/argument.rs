//! Argument trait for firing parameters.

/// A marker trait for the values passed to instructions when an event fires.
///
/// Arguments are opaque to the registry: it never inspects, clones or
/// reorders them. They only need to be shareable across threads so that a
/// registry can be held behind an `Arc`.
///
/// Every `Send + Sync + 'static` type is an argument.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// enum Session {
///     LoggedIn { days_since_login: u32 },
///     LoggedOut,
/// }
///
/// let registry: Registry<Session> = Registry::new();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an instruction argument",
    label = "must be `Send + Sync + 'static`",
    note = "Arguments are shared by every instruction of a firing and must be thread-safe."
)]
pub trait Argument: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Argument for T {}
