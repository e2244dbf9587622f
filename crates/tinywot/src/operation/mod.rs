//! Web of Things operation vocabulary.
//!
//! Operation names follow Thing Description spelling (`readproperty`,
//! `invokeaction`, ...) and parse case-insensitively. Each operation also has
//! a one-byte code laid out as `0bSS_AA_KKKK`:
//!
//! - `SS`: scope. `01` targets one affordance, `10` several, `11` all.
//! - `AA`: affordance. `01` property, `10` action, `11` event.
//! - `KKKK`: the kind of interaction within that affordance.
//!
//! [`Operation::Unknown`] is code `0x00` and never matches a binding.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Interaction affordance an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Affordance {
    /// Readable, writable or observable state.
    Property,
    /// Invocable behaviour.
    Action,
    /// Subscribable notification source.
    Event,
}

/// Operation requested on a path of a Thing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    /// Unrecognised operation. Never satisfiable.
    #[default]
    Unknown,
    /// Read one property.
    ReadProperty,
    /// Write one property.
    WriteProperty,
    /// Observe one property for changes.
    ObserveProperty,
    /// Stop observing one property.
    UnobserveProperty,
    /// Invoke one action.
    InvokeAction,
    /// Query the state of a running action.
    QueryAction,
    /// Cancel a running action.
    CancelAction,
    /// Subscribe to one event.
    SubscribeEvent,
    /// Unsubscribe from one event.
    UnsubscribeEvent,
    /// Read several properties at once.
    ReadMultipleProperties,
    /// Write several properties at once.
    WriteMultipleProperties,
    /// Read every property.
    ReadAllProperties,
    /// Write every writable property.
    WriteAllProperties,
    /// Observe every observable property.
    ObserveAllProperties,
    /// Stop observing every property.
    UnobserveAllProperties,
    /// Query the state of every running action.
    QueryAllActions,
    /// Subscribe to every event.
    SubscribeAllEvents,
    /// Unsubscribe from every event.
    UnsubscribeAllEvents,
}

impl Operation {
    /// Every operation other than [`Operation::Unknown`], grouped by scope
    /// and affordance.
    pub const KNOWN: [Self; 18] = [
        Self::ReadProperty,
        Self::WriteProperty,
        Self::ObserveProperty,
        Self::UnobserveProperty,
        Self::InvokeAction,
        Self::QueryAction,
        Self::CancelAction,
        Self::SubscribeEvent,
        Self::UnsubscribeEvent,
        Self::ReadMultipleProperties,
        Self::WriteMultipleProperties,
        Self::ReadAllProperties,
        Self::WriteAllProperties,
        Self::ObserveAllProperties,
        Self::UnobserveAllProperties,
        Self::QueryAllActions,
        Self::SubscribeAllEvents,
        Self::UnsubscribeAllEvents,
    ];

    /// Returns the one-byte code of this operation.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0x00,
            Self::ReadProperty => 0x51,
            Self::WriteProperty => 0x52,
            Self::ObserveProperty => 0x54,
            Self::UnobserveProperty => 0x58,
            Self::QueryAction => 0x61,
            Self::InvokeAction => 0x64,
            Self::CancelAction => 0x68,
            Self::SubscribeEvent => 0x74,
            Self::UnsubscribeEvent => 0x78,
            Self::ReadMultipleProperties => 0x91,
            Self::WriteMultipleProperties => 0x92,
            Self::ReadAllProperties => 0xd1,
            Self::WriteAllProperties => 0xd2,
            Self::ObserveAllProperties => 0xd4,
            Self::UnobserveAllProperties => 0xd8,
            Self::QueryAllActions => 0xe1,
            Self::SubscribeAllEvents => 0xf4,
            Self::UnsubscribeAllEvents => 0xf8,
        }
    }

    /// Decodes a one-byte code. Unassigned codes decode to
    /// [`Operation::Unknown`].
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x51 => Self::ReadProperty,
            0x52 => Self::WriteProperty,
            0x54 => Self::ObserveProperty,
            0x58 => Self::UnobserveProperty,
            0x61 => Self::QueryAction,
            0x64 => Self::InvokeAction,
            0x68 => Self::CancelAction,
            0x74 => Self::SubscribeEvent,
            0x78 => Self::UnsubscribeEvent,
            0x91 => Self::ReadMultipleProperties,
            0x92 => Self::WriteMultipleProperties,
            0xd1 => Self::ReadAllProperties,
            0xd2 => Self::WriteAllProperties,
            0xd4 => Self::ObserveAllProperties,
            0xd8 => Self::UnobserveAllProperties,
            0xe1 => Self::QueryAllActions,
            0xf4 => Self::SubscribeAllEvents,
            0xf8 => Self::UnsubscribeAllEvents,
            _ => Self::Unknown,
        }
    }

    /// Returns the affordance encoded in bits 5..4 of the code, or `None`
    /// for [`Operation::Unknown`].
    #[must_use]
    pub const fn affordance(self) -> Option<Affordance> {
        match (self.code() >> 4) & 0b11 {
            0b01 => Some(Affordance::Property),
            0b10 => Some(Affordance::Action),
            0b11 => Some(Affordance::Event),
            _ => None,
        }
    }

    /// Returns `true` unless this is [`Operation::Unknown`].
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
