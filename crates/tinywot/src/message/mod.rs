//! Request and response envelopes exchanged with the transport layer.
//!
//! Both are transient: a transport builds one request and one response per
//! incoming message, hands them to [`crate::Thing::process_request`] and
//! drops them once the reply is on the wire. The scratchpads they carry
//! borrow transport-owned memory.

use strum::Display;

use crate::error::{Outcome, ThingError};
use crate::operation::Operation;
use crate::scratchpad::{ScratchpadMut, ScratchpadRef};

/// Protocol-level status of a processed request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseStatus {
    /// The handler succeeded.
    Ok,
    /// The path does not exist on this Thing.
    NotFound,
    /// The path exists but not for the requested operation.
    NotAllowed,
    /// The path and operation exist but no behaviour is wired up.
    NotSupported,
    /// Any other failure.
    #[default]
    Error,
}

impl ResponseStatus {
    /// Classifies an engine or handler outcome.
    ///
    /// The mapping is total: kinds without a dedicated status, including
    /// every custom handler code, become [`ResponseStatus::Error`].
    #[must_use]
    pub const fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Ok(()) => Self::Ok,
            Err(ThingError::NotFound) => Self::NotFound,
            Err(ThingError::NotAllowed) => Self::NotAllowed,
            Err(ThingError::NotImplemented) => Self::NotSupported,
            Err(
                ThingError::NotEnoughMemory | ThingError::General | ThingError::Custom(_),
            ) => Self::Error,
        }
    }

    /// Numeric status code for transports that carry one byte of status.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::NotAllowed => 1,
            Self::NotFound => 2,
            Self::Error => 5,
            Self::NotSupported => 14,
        }
    }

    /// Returns `true` for [`ResponseStatus::Ok`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ThingError> for ResponseStatus {
    fn from(error: ThingError) -> Self {
        Self::from_outcome(&Err(error))
    }
}

/// Incoming request addressed to one path of a Thing.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    path: &'a str,
    operation: Operation,
    content: Option<ScratchpadRef<'a>>,
}

impl<'a> Request<'a> {
    /// Creates a request for `operation` on `path` with optional input.
    #[must_use]
    pub const fn new(
        path: &'a str,
        operation: Operation,
        content: Option<ScratchpadRef<'a>>,
    ) -> Self {
        Self {
            path,
            operation,
            content,
        }
    }

    /// Target path.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// Requested operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Request payload, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&ScratchpadRef<'a>> {
        self.content.as_ref()
    }
}

/// Outgoing response filled in by [`crate::Thing::process_request`].
#[derive(Debug)]
pub struct Response<'a> {
    status: ResponseStatus,
    content: Option<ScratchpadMut<'a>>,
}

impl<'a> Response<'a> {
    /// Creates a response with an optional output buffer. The status starts
    /// as [`ResponseStatus::Error`] until a request is processed into it.
    #[must_use]
    pub const fn new(content: Option<ScratchpadMut<'a>>) -> Self {
        Self {
            status: ResponseStatus::Error,
            content,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Overrides the status.
    pub const fn set_status(&mut self, status: ResponseStatus) {
        self.status = status;
    }

    /// Response payload, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&ScratchpadMut<'a>> {
        self.content.as_ref()
    }

    /// Response payload for writing, if any.
    #[must_use]
    pub const fn content_mut(&mut self) -> Option<&mut ScratchpadMut<'a>> {
        self.content.as_mut()
    }

    /// Releases the output buffer.
    #[must_use]
    pub fn into_content(self) -> Option<ScratchpadMut<'a>> {
        self.content
    }
}
