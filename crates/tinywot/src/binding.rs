//! Handler bindings: `(path, operation) -> handler` entries of a Thing.

use std::fmt;

use crate::error::Outcome;
use crate::operation::Operation;
use crate::scratchpad::{ScratchpadMut, ScratchpadRef};

/// Callable attached to a binding.
///
/// The handler receives the request input and the response output, either of
/// which may be absent. Anything the handler needs beyond that travels as
/// state captured by the closure.
pub type HandlerFn =
    dyn Fn(Option<&ScratchpadRef<'_>>, Option<&mut ScratchpadMut<'_>>) -> Outcome;

/// One entry of a Thing's binding table.
pub struct Binding {
    path: String,
    operation: Operation,
    handler: Option<Box<HandlerFn>>,
}

impl Binding {
    /// Binds `handler` to `path` for `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::{Binding, Operation, ThingError};
    ///
    /// let binding = Binding::new("/led", Operation::WriteProperty, |input, _| {
    ///     let payload = input.ok_or(ThingError::General)?;
    ///     if payload.content() == b"on" { Ok(()) } else { Err(ThingError::General) }
    /// });
    /// assert!(binding.has_handler());
    /// ```
    #[must_use]
    pub fn new<F>(path: impl Into<String>, operation: Operation, handler: F) -> Self
    where
        F: Fn(Option<&ScratchpadRef<'_>>, Option<&mut ScratchpadMut<'_>>) -> Outcome + 'static,
    {
        Self {
            path: path.into(),
            operation,
            handler: Some(Box::new(handler)),
        }
    }

    /// Declares `path` and `operation` without behaviour. Requests that
    /// resolve to a stub report "not implemented".
    #[must_use]
    pub fn stub(path: impl Into<String>, operation: Operation) -> Self {
        Self {
            path: path.into(),
            operation,
            handler: None,
        }
    }

    /// Path this binding answers on.
    #[must_use]
    pub const fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Operation this binding answers to.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// The attached handler, or `None` for a stub.
    #[must_use]
    pub fn handler(&self) -> Option<&HandlerFn> {
        self.handler.as_deref()
    }

    /// Returns `true` unless this binding is a stub.
    #[must_use]
    pub const fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Returns `true` when `path` and `operation` select this binding.
    /// [`Operation::Unknown`] never matches.
    #[must_use]
    pub fn matches(&self, path: &str, operation: Operation) -> bool {
        operation.is_known() && self.operation == operation && self.path == path
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("path", &self.path)
            .field("operation", &self.operation)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
