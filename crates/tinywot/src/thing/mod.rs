//! The binding table of a Thing.
//!
//! A [`Thing`] keeps its bindings in insertion order; that order decides
//! which of several bindings for the same path and operation answers a
//! request. The table has a fixed capacity chosen at construction. Tables
//! built with [`Thing::new`] are exactly full, tables built with
//! [`Thing::with_capacity`] or [`Thing::from_bindings`] can grow up to their
//! capacity through [`Thing::add`].
//!
//! Mutation needs `&mut Thing` while dispatch needs `&Thing`, so a table can
//! never change underneath an in-flight request.

use tracing::debug;

use crate::binding::Binding;
use crate::dispatch::resolve;
use crate::error::{Outcome, ThingError};
use crate::operation::Operation;

pub(crate) const THING_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::thing");

/// Ordered `(path, operation) -> handler` table.
#[derive(Debug, Default)]
pub struct Thing {
    bindings: Vec<Binding>,
    capacity: usize,
}

impl Thing {
    /// Creates a fixed table holding exactly `bindings`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinywot::{Binding, Operation, Thing, ThingError};
    ///
    /// let thing = Thing::new(vec![Binding::stub("/reset", Operation::InvokeAction)]);
    /// assert_eq!(thing.invoke_action("/reset", None), Err(ThingError::NotImplemented));
    /// ```
    #[must_use]
    pub fn new(bindings: Vec<Binding>) -> Self {
        let capacity = bindings.len();
        Self { bindings, capacity }
    }

    /// Creates an empty table with room for `capacity` bindings.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a table with room for `capacity` bindings, pre-populated with
    /// `bindings`.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when `bindings` does not fit.
    pub fn from_bindings(bindings: Vec<Binding>, capacity: usize) -> Result<Self, ThingError> {
        if bindings.len() > capacity {
            return Err(ThingError::NotEnoughMemory);
        }
        let mut table = Self::with_capacity(capacity);
        table.bindings.extend(bindings);
        Ok(table)
    }

    /// Number of bindings in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when the table has no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Maximum number of bindings the table accepts.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The bindings in resolution order.
    #[must_use]
    pub const fn bindings(&self) -> &[Binding] {
        self.bindings.as_slice()
    }

    /// Appends `binding` after the existing ones.
    ///
    /// A later binding for a path and operation that is already bound is
    /// unreachable until the earlier one is changed or removed.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotEnoughMemory`] when the table is full.
    pub fn add(&mut self, binding: Binding) -> Outcome {
        if self.bindings.len() >= self.capacity {
            debug!(
                target: THING_TARGET,
                path = binding.path(),
                capacity = self.capacity,
                "binding table is full"
            );
            return Err(ThingError::NotEnoughMemory);
        }
        debug!(
            target: THING_TARGET,
            path = binding.path(),
            operation = %binding.operation(),
            "binding added"
        );
        self.bindings.push(binding);
        Ok(())
    }

    /// Replaces the binding that `path` and `operation` resolve to and
    /// returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotFound`] or [`ThingError::NotAllowed`] when no
    /// binding answers `path` for `operation`.
    pub fn change(
        &mut self,
        path: &str,
        operation: Operation,
        binding: Binding,
    ) -> Result<Binding, ThingError> {
        let (index, _) = resolve(&self.bindings, path, operation)?;
        let slot = self
            .bindings
            .get_mut(index)
            .ok_or(ThingError::NotFound)?;
        debug!(target: THING_TARGET, path, %operation, "binding changed");
        Ok(std::mem::replace(slot, binding))
    }

    /// Removes and returns the binding that `path` and `operation` resolve
    /// to. The remaining bindings keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`ThingError::NotFound`] or [`ThingError::NotAllowed`] when no
    /// binding answers `path` for `operation`.
    pub fn remove(&mut self, path: &str, operation: Operation) -> Result<Binding, ThingError> {
        let (index, _) = resolve(&self.bindings, path, operation)?;
        debug!(target: THING_TARGET, path, %operation, "binding removed");
        Ok(self.bindings.remove(index))
    }
}

impl FromIterator<Binding> for Thing {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
