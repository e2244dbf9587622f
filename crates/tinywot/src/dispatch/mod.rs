//! Request resolution and handler invocation.
//!
//! ## Resolution
//!
//! Bindings are scanned in insertion order and compared by exact path
//! equality. The first binding whose path and operation both match wins and
//! the scan stops there. A binding whose path matches but whose operation does
//! not (or whose operation is [`Operation::Unknown`]) only records a
//! provisional "not allowed" and the scan carries on. When nothing wins, the
//! request fails with "not found" if no path ever matched and "not allowed"
//! otherwise.
//!
//! ## Invocation
//!
//! A winning stub binding reports "not implemented". Otherwise the handler
//! runs with the caller's input and output scratchpads and its outcome is
//! returned verbatim. [`Thing::process_request`] additionally classifies that
//! outcome into a [`crate::ResponseStatus`].
//!
//! Every call is a single synchronous attempt with no retries.

use tracing::debug;

use crate::binding::Binding;
use crate::error::{Outcome, ThingError, outcome_code};
use crate::message::{Request, Response, ResponseStatus};
use crate::operation::Operation;
use crate::scratchpad::{ScratchpadMut, ScratchpadRef};
use crate::thing::Thing;

pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Returns the binding that answers `path` for `operation`, with its index.
pub(crate) fn resolve<'a>(
    bindings: &'a [Binding],
    path: &str,
    operation: Operation,
) -> Result<(usize, &'a Binding), ThingError> {
    let mut failure = ThingError::NotFound;
    for (index, binding) in bindings.iter().enumerate() {
        if binding.path() != path {
            continue;
        }
        if !binding.matches(path, operation) {
            failure = ThingError::NotAllowed;
            continue;
        }
        return Ok((index, binding));
    }
    Err(failure)
}

impl Thing {
    /// Finds the binding that answers `path` for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotFound`] when no binding has `path`, and
    /// [`ThingError::NotAllowed`] when some do but none accepts `operation`.
    pub fn get_handler(&self, path: &str, operation: Operation) -> Result<&Binding, ThingError> {
        let found = resolve(self.bindings(), path, operation).map(|(_, binding)| binding);
        match &found {
            Ok(_) => debug!(target: DISPATCH_TARGET, path, %operation, "binding resolved"),
            Err(error) => {
                debug!(target: DISPATCH_TARGET, path, %operation, %error, "binding not resolved");
            }
        }
        found
    }

    /// Resolves `path` and `operation` and runs the bound handler.
    ///
    /// # Errors
    ///
    /// Resolution failures from [`Thing::get_handler`] propagate unchanged.
    /// A stub binding yields [`ThingError::NotImplemented`]. Any failure the
    /// handler reports is returned as is.
    pub fn dispatch(
        &self,
        path: &str,
        operation: Operation,
        input: Option<&ScratchpadRef<'_>>,
        output: Option<&mut ScratchpadMut<'_>>,
    ) -> Outcome {
        let binding = self.get_handler(path, operation)?;
        let Some(handler) = binding.handler() else {
            debug!(target: DISPATCH_TARGET, path, %operation, "binding has no handler");
            return Err(ThingError::NotImplemented);
        };
        let outcome = handler(input, output);
        debug!(
            target: DISPATCH_TARGET,
            path,
            %operation,
            status = outcome_code(&outcome),
            "handler returned"
        );
        outcome
    }

    /// Reads the property at `path` into `output`.
    ///
    /// # Errors
    ///
    /// See [`Thing::dispatch`].
    pub fn read_property(&self, path: &str, output: Option<&mut ScratchpadMut<'_>>) -> Outcome {
        self.dispatch(path, Operation::ReadProperty, None, output)
    }

    /// Writes `input` to the property at `path`.
    ///
    /// # Errors
    ///
    /// See [`Thing::dispatch`].
    pub fn write_property(&self, path: &str, input: Option<&ScratchpadRef<'_>>) -> Outcome {
        self.dispatch(path, Operation::WriteProperty, input, None)
    }

    /// Invokes the action at `path` with `input`.
    ///
    /// # Errors
    ///
    /// See [`Thing::dispatch`].
    pub fn invoke_action(&self, path: &str, input: Option<&ScratchpadRef<'_>>) -> Outcome {
        self.dispatch(path, Operation::InvokeAction, input, None)
    }

    /// Runs `request` and records the resulting status in `response`.
    ///
    /// The request content is the handler input and the response content is
    /// the handler output. The response status is always set, whatever the
    /// outcome, following [`ResponseStatus::from_outcome`].
    ///
    /// # Errors
    ///
    /// Returns the same failure as [`Thing::dispatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::{
    ///     Binding, Operation, Request, Response, ResponseStatus, ScratchpadMut, Thing,
    ///     ThingError, TypeHint,
    /// };
    ///
    /// let thing = Thing::new(vec![Binding::new(
    ///     "/temperature",
    ///     Operation::ReadProperty,
    ///     |_, output| {
    ///         let pad = output.ok_or(ThingError::General)?;
    ///         pad.append(b"21.5")?;
    ///         pad.set_type_hint(TypeHint::TextPlain);
    ///         Ok(())
    ///     },
    /// )]);
    ///
    /// let mut buffer = [0_u8; 16];
    /// let request = Request::new("/temperature", Operation::ReadProperty, None);
    /// let mut response = Response::new(Some(ScratchpadMut::with_empty_memory(&mut buffer)));
    /// thing.process_request(&request, &mut response).expect("handler succeeds");
    ///
    /// assert_eq!(response.status(), ResponseStatus::Ok);
    /// let content = response.content().expect("output present");
    /// assert_eq!(content.content(), b"21.5");
    /// ```
    pub fn process_request(&self, request: &Request<'_>, response: &mut Response<'_>) -> Outcome {
        let outcome = self.dispatch(
            request.path(),
            request.operation(),
            request.content(),
            response.content_mut(),
        );
        let status = ResponseStatus::from_outcome(&outcome);
        debug!(
            target: DISPATCH_TARGET,
            path = request.path(),
            status = %status,
            "request processed"
        );
        response.set_status(status);
        outcome
    }
}
