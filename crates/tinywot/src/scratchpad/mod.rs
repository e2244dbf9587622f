//! Borrowed payload buffers.
//!
//! A [`Scratchpad`] is a view over memory owned by the caller, usually the
//! transport layer. It records how large the region is, how many leading
//! bytes are meaningful and what kind of payload those bytes hold. The view
//! never allocates and never outlives the borrow it was built from.
//!
//! Input travels as a [`ScratchpadRef`] and output as a [`ScratchpadMut`], so
//! a handler can only write into the buffer it was given for output.

mod type_hint;

pub use self::type_hint::TypeHint;

use crate::error::{Outcome, ThingError};

/// Non-owning view over a caller-supplied payload region.
#[derive(Debug, Clone)]
pub struct Scratchpad<B> {
    data: Option<B>,
    valid_length: usize,
    type_hint: TypeHint,
}

/// Read-only scratchpad used for request input.
pub type ScratchpadRef<'a> = Scratchpad<&'a [u8]>;

/// Exclusive scratchpad used for handler output.
pub type ScratchpadMut<'a> = Scratchpad<&'a mut [u8]>;

impl<B> Scratchpad<B> {
    /// Creates a scratchpad with no backing memory. Represents "no payload".
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            valid_length: 0,
            type_hint: TypeHint::Unknown,
        }
    }

    /// Wraps memory reserved for a producer. Nothing is valid yet.
    #[must_use]
    pub const fn with_empty_memory(memory: B) -> Self {
        Self {
            data: Some(memory),
            valid_length: 0,
            type_hint: TypeHint::Unknown,
        }
    }

    /// Wraps memory whose first `valid_length` bytes already hold a payload
    /// of kind `type_hint`.
    ///
    /// `valid_length` is not checked against the region size. Readers clamp
    /// it when slicing, see [`Scratchpad::content`] and
    /// [`Scratchpad::is_consistent`].
    #[must_use]
    pub const fn with_used_memory(memory: B, valid_length: usize, type_hint: TypeHint) -> Self {
        Self {
            data: Some(memory),
            valid_length,
            type_hint,
        }
    }

    /// Number of meaningful bytes at the start of the region.
    #[must_use]
    pub const fn valid_length(&self) -> usize {
        self.valid_length
    }

    /// Kind of the meaningful bytes.
    #[must_use]
    pub const fn type_hint(&self) -> TypeHint {
        self.type_hint
    }

    /// Returns `true` when the scratchpad wraps a memory region.
    #[must_use]
    pub const fn has_memory(&self) -> bool {
        self.data.is_some()
    }
}

impl<B: AsRef<[u8]>> Scratchpad<B> {
    /// Size of the backing region in bytes, `0` when there is none.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.memory().map_or(0, <[u8]>::len)
    }

    /// The whole backing region, including bytes past the valid length.
    #[must_use]
    pub fn memory(&self) -> Option<&[u8]> {
        self.data.as_ref().map(|memory| memory.as_ref())
    }

    /// The meaningful bytes, clamped to the region size.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        let memory = self.memory().unwrap_or_default();
        let end = self.valid_length.min(memory.len());
        memory.get(..end).unwrap_or_default()
    }

    /// Returns `true` when the valid length fits inside the region.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.valid_length <= self.capacity()
    }

    /// Bytes still available after the valid content.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.valid_length)
    }
}

impl<B> Default for Scratchpad<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Scratchpad<&'a mut [u8]> {
    /// The whole backing region for writing.
    #[must_use]
    pub fn memory_mut(&mut self) -> Option<&mut [u8]> {
        self.data.as_deref_mut()
    }

    /// Borrows this scratchpad as a read-only view.
    #[must_use]
    pub fn as_view(&self) -> ScratchpadRef<'_> {
        Scratchpad {
            data: self.data.as_deref(),
            valid_length: self.valid_length,
            type_hint: self.type_hint,
        }
    }

    /// Records the kind of the bytes a producer wrote.
    pub const fn set_type_hint(&mut self, type_hint: TypeHint) {
        self.type_hint = type_hint;
    }

    /// Records how many leading bytes a producer wrote directly through
    /// [`Scratchpad::memory_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when `valid_length` exceeds
    /// the region size.
    pub fn set_valid_length(&mut self, valid_length: usize) -> Outcome {
        if valid_length > self.capacity() {
            return Err(ThingError::NotEnoughMemory);
        }
        self.valid_length = valid_length;
        Ok(())
    }

    /// Forgets the content while keeping the region.
    pub const fn clear(&mut self) {
        self.valid_length = 0;
        self.type_hint = TypeHint::Unknown;
    }

    /// Copies `bytes` after the valid content.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when the bytes do not fit. The
    /// scratchpad is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::{ScratchpadMut, ThingError};
    ///
    /// let mut buffer = [0_u8; 4];
    /// let mut pad = ScratchpadMut::with_empty_memory(&mut buffer);
    /// pad.append(b"on").expect("fits");
    /// assert_eq!(pad.content(), b"on");
    /// assert_eq!(pad.append(b"off"), Err(ThingError::NotEnoughMemory));
    /// ```
    pub fn append(&mut self, bytes: &[u8]) -> Outcome {
        if bytes.is_empty() {
            return Ok(());
        }
        let start = self.valid_length;
        let end = start
            .checked_add(bytes.len())
            .ok_or(ThingError::NotEnoughMemory)?;
        let target = self
            .data
            .as_deref_mut()
            .and_then(|memory| memory.get_mut(start..end))
            .ok_or(ThingError::NotEnoughMemory)?;
        target.copy_from_slice(bytes);
        self.valid_length = end;
        Ok(())
    }

    /// Copies the UTF-8 bytes of `text` after the valid content. No
    /// terminator is written.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when the text does not fit.
    pub fn append_str(&mut self, text: &str) -> Outcome {
        self.append(text.as_bytes())
    }

    /// Moves the last `len` unused bytes of the region into a new, empty
    /// scratchpad.
    ///
    /// The valid content stays in `self`, whose capacity shrinks by `len`.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when fewer than `len` bytes are
    /// unused. Nothing changes in that case.
    pub fn split_off(&mut self, len: usize) -> Result<ScratchpadMut<'a>, ThingError> {
        if len > self.remaining() {
            return Err(ThingError::NotEnoughMemory);
        }
        let at = self.capacity() - len;
        match self.data.take() {
            Some(memory) => {
                let (head, tail) = memory.split_at_mut(at);
                self.data = Some(head);
                Ok(Scratchpad::with_empty_memory(tail))
            }
            None => Ok(Scratchpad::new()),
        }
    }
}
