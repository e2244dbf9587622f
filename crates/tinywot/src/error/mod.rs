//! Status taxonomy shared by the dispatch engine and handler functions.
//!
//! Every engine operation and every handler reports an [`Outcome`]. Success is
//! `Ok(())`; failures carry a [`ThingError`] kind. The taxonomy is flat: the
//! engine never wraps or nests a handler's error, it passes it through
//! verbatim so that `process_request` can classify it.
//!
//! Each kind also has a compact signed code for hosts that need to move a
//! status across an FFI or wire boundary. Negative codes are failures, zero
//! and positive codes are successes.

use std::fmt;

use thiserror::Error;

/// Result type returned by handlers and by the dispatch engine.
pub type Outcome = Result<(), ThingError>;

/// Failure kinds reported while resolving or running a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ThingError {
    /// No binding exists for the requested path.
    #[error("no binding exists for the requested path")]
    NotFound,

    /// The path exists but does not accept the requested operation.
    #[error("the path does not accept the requested operation")]
    NotAllowed,

    /// The binding exists but has no handler attached.
    #[error("the binding has no handler attached")]
    NotImplemented,

    /// A buffer or table has no room left for the requested write.
    #[error("not enough memory to complete the operation")]
    NotEnoughMemory,

    /// The handler failed without a more specific kind.
    #[error("the handler reported a general failure")]
    General,

    /// Handler-defined status code passed through unchanged.
    #[error("the handler reported status code {0}")]
    Custom(CustomCode),
}

/// A handler-defined failure code.
///
/// Custom codes are negative and never collide with the code of a named
/// [`ThingError`] kind, so encoding an error and decoding it again yields
/// the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomCode(i8);

impl CustomCode {
    /// Accepts `code` when it is negative and not reserved by a named kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::{CustomCode, ThingError};
    ///
    /// assert_eq!(CustomCode::new(-40).map(CustomCode::get), Some(-40));
    /// assert_eq!(CustomCode::new(ThingError::NOT_FOUND_CODE), None);
    /// assert_eq!(CustomCode::new(0), None);
    /// ```
    #[must_use]
    pub const fn new(code: i8) -> Option<Self> {
        if code >= 0 || ThingError::is_named_code(code) {
            return None;
        }
        Some(Self(code))
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }
}

impl fmt::Display for CustomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ThingError {
    /// Code reported for [`ThingError::NotAllowed`].
    pub const NOT_ALLOWED_CODE: i8 = -1;
    /// Code reported for [`ThingError::NotFound`].
    pub const NOT_FOUND_CODE: i8 = -2;
    /// Code reported for [`ThingError::General`].
    pub const GENERAL_CODE: i8 = -5;
    /// Code reported for [`ThingError::NotEnoughMemory`].
    pub const NOT_ENOUGH_MEMORY_CODE: i8 = -12;
    /// Code reported for [`ThingError::NotImplemented`].
    pub const NOT_IMPLEMENTED_CODE: i8 = -14;

    /// Returns the compact status code for this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::ThingError;
    ///
    /// assert_eq!(ThingError::NotFound.code(), -2);
    /// assert_eq!(ThingError::custom(-40).map(ThingError::code), Some(-40));
    /// ```
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::NotAllowed => Self::NOT_ALLOWED_CODE,
            Self::NotFound => Self::NOT_FOUND_CODE,
            Self::General => Self::GENERAL_CODE,
            Self::NotEnoughMemory => Self::NOT_ENOUGH_MEMORY_CODE,
            Self::NotImplemented => Self::NOT_IMPLEMENTED_CODE,
            Self::Custom(code) => code.get(),
        }
    }

    /// Builds a [`ThingError::Custom`] failure, or `None` when `code` is not
    /// a valid [`CustomCode`].
    #[must_use]
    pub const fn custom(code: i8) -> Option<Self> {
        match CustomCode::new(code) {
            Some(code) => Some(Self::Custom(code)),
            None => None,
        }
    }

    const fn is_named_code(code: i8) -> bool {
        matches!(
            code,
            Self::NOT_ALLOWED_CODE
                | Self::NOT_FOUND_CODE
                | Self::GENERAL_CODE
                | Self::NOT_ENOUGH_MEMORY_CODE
                | Self::NOT_IMPLEMENTED_CODE
        )
    }
}

/// Converts a compact status code back into an [`Outcome`].
///
/// Zero and positive codes are successes. Known negative codes map to their
/// named kind; any other negative code becomes [`ThingError::Custom`].
///
/// # Errors
///
/// Returns the [`ThingError`] encoded by a negative `code`.
pub const fn outcome_from_code(code: i8) -> Outcome {
    if code >= 0 {
        return Ok(());
    }
    Err(match code {
        ThingError::NOT_ALLOWED_CODE => ThingError::NotAllowed,
        ThingError::NOT_FOUND_CODE => ThingError::NotFound,
        ThingError::GENERAL_CODE => ThingError::General,
        ThingError::NOT_ENOUGH_MEMORY_CODE => ThingError::NotEnoughMemory,
        ThingError::NOT_IMPLEMENTED_CODE => ThingError::NotImplemented,
        other => ThingError::Custom(CustomCode(other)),
    })
}

/// Returns the compact status code of an [`Outcome`], `0` for success.
#[must_use]
pub const fn outcome_code(outcome: &Outcome) -> i8 {
    match outcome {
        Ok(()) => 0,
        Err(error) => error.code(),
    }
}
