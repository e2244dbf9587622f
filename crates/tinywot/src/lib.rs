//! Request dispatch core for Web of Things devices.
//!
//! A [`Thing`] is an ordered table of [`Binding`]s, each mapping a path and
//! an [`Operation`] to a handler. The dispatch engine resolves an incoming
//! request against that table, runs the handler with caller-supplied
//! [`Scratchpad`] buffers and classifies the outcome into a
//! [`ResponseStatus`] for the transport.
//!
//! The crate stops at the boundary of a structured request: receiving bytes
//! from a network, decoding payloads and driving a servient loop are left to
//! the host.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use tinywot::{Binding, Operation, ScratchpadRef, Thing, ThingError, TypeHint};
//!
//! let led = Rc::new(Cell::new(false));
//! let state = Rc::clone(&led);
//! let thing = Thing::new(vec![Binding::new(
//!     "/led",
//!     Operation::WriteProperty,
//!     move |input, _| {
//!         let payload = input.ok_or(ThingError::General)?;
//!         state.set(payload.content() == b"on");
//!         Ok(())
//!     },
//! )]);
//!
//! let body = *b"on";
//! let input = ScratchpadRef::with_used_memory(&body, 2, TypeHint::TextPlain);
//! thing.write_property("/led", Some(&input)).expect("handler succeeds");
//! assert!(led.get());
//! assert_eq!(thing.read_property("/led", None), Err(ThingError::NotAllowed));
//! ```
//!
//! # Concurrency
//!
//! Dispatch is synchronous and lock-free. Handlers are stored without `Send`
//! or `Sync` bounds and a table can only be changed through `&mut Thing`, so
//! the borrow checker rules out mutation during dispatch.

pub mod binding;
mod dispatch;
pub mod error;
pub mod message;
pub mod operation;
pub mod scratchpad;
pub mod thing;

#[cfg(test)]
mod tests;

pub use self::binding::{Binding, HandlerFn};
pub use self::error::{CustomCode, Outcome, ThingError, outcome_code, outcome_from_code};
pub use self::message::{Request, Response, ResponseStatus};
pub use self::operation::{Affordance, Operation};
pub use self::scratchpad::{Scratchpad, ScratchpadMut, ScratchpadRef, TypeHint};
pub use self::thing::Thing;
