//! Payload kind tags carried alongside scratchpad bytes.

/// Kind of the bytes held in a scratchpad.
///
/// Named kinds use CoAP content-format numbers so a transport can copy the
/// value straight into a `Content-Format` option. Other registered formats
/// travel as [`TypeHint::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// Nothing is known about the bytes.
    #[default]
    Unknown,
    /// `text/plain; charset=utf-8`.
    TextPlain,
    /// `application/octet-stream`.
    OctetStream,
    /// `application/json`.
    Json,
    /// `application/cbor`.
    Cbor,
    /// Any other content-format number.
    Other(u16),
}

impl TypeHint {
    /// Returns the content-format number, or `None` when unknown.
    #[must_use]
    pub const fn content_format(self) -> Option<u16> {
        match self {
            Self::Unknown => None,
            Self::TextPlain => Some(0),
            Self::OctetStream => Some(42),
            Self::Json => Some(50),
            Self::Cbor => Some(60),
            Self::Other(number) => Some(number),
        }
    }

    /// Maps a content-format number onto a hint.
    #[must_use]
    pub const fn from_content_format(number: u16) -> Self {
        match number {
            0 => Self::TextPlain,
            42 => Self::OctetStream,
            50 => Self::Json,
            60 => Self::Cbor,
            other => Self::Other(other),
        }
    }

    /// Returns the media type of a named kind.
    #[must_use]
    pub const fn media_type(self) -> Option<&'static str> {
        match self {
            Self::TextPlain => Some("text/plain; charset=utf-8"),
            Self::OctetStream => Some("application/octet-stream"),
            Self::Json => Some("application/json"),
            Self::Cbor => Some("application/cbor"),
            Self::Unknown | Self::Other(_) => None,
        }
    }
}
