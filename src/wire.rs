//! Fixed-layout wire record definitions for the market-data event stream.
//!
//! The format is little-endian and tightly packed: every field listed below
//! sits at a fixed byte offset inside its record with no implicit alignment
//! padding, only the explicit `reserved` bytes shown. Decoding is direct
//! offset-based little-endian parsing rather than a zero-copy transmute,
//! since several fields do not fall on 4- or 8-byte-aligned offsets.

use std::fmt;

/// Number of raw bytes carried in the `symbol` field of every body record.
pub const SYMBOL_LEN: usize = 3;

/// A three-byte ticker symbol, forwarded verbatim and treated as opaque.
pub type Symbol = [u8; SYMBOL_LEN];

/// Byte length of the fixed [`Header`] record.
pub const HEADER_LEN: usize = 9;

/// Byte length of the ADD and UPDATE body records (they share a layout).
pub const ADD_UPDATE_BODY_LEN: usize = 31;

/// Byte length of the DELETE body record.
pub const DELETE_BODY_LEN: usize = 15;

/// Byte length of the TRADED body record.
pub const TRADED_BODY_LEN: usize = 23;

/// The fixed 9-byte record that precedes every event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Sequence number carried through to the emitted snapshot, unused for
    /// re-ordering or gap detection by the core (see design notes).
    pub seq_num: i32,
    /// Redundant body-size field; validated against the expected length for
    /// `msg_type` (see [`crate::decoder::DecodeError::SizeMismatch`]).
    pub msg_size: i32,
    /// Raw ASCII event tag: `'A'`, `'U'`, `'D'`, `'E'`, or unknown.
    pub msg_type: u8,
}

impl Header {
    /// Decodes a `Header` from its exact 9-byte little-endian wire layout.
    pub fn decode(buf: &[u8; HEADER_LEN]) -> Self {
        Header {
            seq_num: i32::from_le_bytes(buf[0..4].try_into().unwrap()),
            msg_size: i32::from_le_bytes(buf[4..8].try_into().unwrap()),
            msg_type: buf[8],
        }
    }
}

/// The ASCII event tags recognized in [`Header::msg_type`].
pub mod msg_type {
    pub const ADD: u8 = b'A';
    pub const UPDATE: u8 = b'U';
    pub const DELETE: u8 = b'D';
    pub const TRADED: u8 = b'E';
}

/// Side of the book an order rests on.
///
/// The wire carries this as a single ASCII byte (`'B'` or `'S'`); any other
/// value is not a valid side and is rejected by [`Side::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy side — the bid ladder, ordered best (highest price) first.
    Bid,
    /// Sell side — the ask ladder, ordered best (lowest price) first.
    Ask,
}

impl Side {
    /// Decodes a wire side byte, returning `None` for anything but `'B'`/`'S'`.
    pub fn decode(byte: u8) -> Option<Side> {
        match byte {
            b'B' => Some(Side::Bid),
            b'S' => Some(Side::Ask),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "B"),
            Side::Ask => write!(f, "S"),
        }
    }
}

/// Body shared by ADD and UPDATE events (identical 31-byte layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddUpdateBody {
    pub symbol: Symbol,
    pub order_id: u64,
    pub side: Side,
    pub size: u64,
    pub price: i32,
}

impl AddUpdateBody {
    /// Decodes the 31-byte ADD/UPDATE body. Returns `None` if the `side`
    /// byte is not a valid wire side.
    pub fn decode(buf: &[u8; ADD_UPDATE_BODY_LEN]) -> Option<Self> {
        Some(AddUpdateBody {
            symbol: buf[0..3].try_into().unwrap(),
            order_id: u64::from_le_bytes(buf[3..11].try_into().unwrap()),
            side: Side::decode(buf[11])?,
            // buf[12..15] reserved
            size: u64::from_le_bytes(buf[15..23].try_into().unwrap()),
            price: i32::from_le_bytes(buf[23..27].try_into().unwrap()),
            // buf[27..31] reserved
        })
    }
}

/// Body of a DELETE event (15 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBody {
    pub symbol: Symbol,
    pub order_id: u64,
    pub side: Side,
}

impl DeleteBody {
    /// Decodes the 15-byte DELETE body. Returns `None` if the `side` byte is
    /// not a valid wire side.
    pub fn decode(buf: &[u8; DELETE_BODY_LEN]) -> Option<Self> {
        Some(DeleteBody {
            symbol: buf[0..3].try_into().unwrap(),
            order_id: u64::from_le_bytes(buf[3..11].try_into().unwrap()),
            side: Side::decode(buf[11])?,
            // buf[12..15] reserved
        })
    }
}

/// Body of a TRADED (partial/full execution) event (23 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradedBody {
    pub symbol: Symbol,
    pub order_id: u64,
    pub side: Side,
    pub volume: u64,
}

impl TradedBody {
    /// Decodes the 23-byte TRADED body. Returns `None` if the `side` byte is
    /// not a valid wire side.
    pub fn decode(buf: &[u8; TRADED_BODY_LEN]) -> Option<Self> {
        Some(TradedBody {
            symbol: buf[0..3].try_into().unwrap(),
            order_id: u64::from_le_bytes(buf[3..11].try_into().unwrap()),
            side: Side::decode(buf[11])?,
            // buf[12..15] reserved
            volume: u64::from_le_bytes(buf[15..23].try_into().unwrap()),
        })
    }
}

/// A decoded event body, tagged by the record type named in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Add(AddUpdateBody),
    Update(AddUpdateBody),
    Delete(DeleteBody),
    Traded(TradedBody),
}

impl Body {
    /// The symbol carried by this event, forwarded verbatim to the renderer.
    pub fn symbol(&self) -> Symbol {
        match self {
            Body::Add(b) | Body::Update(b) => b.symbol,
            Body::Delete(b) => b.symbol,
            Body::Traded(b) => b.symbol,
        }
    }
}

/// One fully decoded framed record: header plus its typed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub header: Header,
    pub body: Body,
}

/// Returns the expected body length for a given `msg_type`, or `None` if the
/// type is not one of the four recognized event tags.
pub fn expected_body_len(msg_type: u8) -> Option<usize> {
    match msg_type {
        msg_type::ADD | msg_type::UPDATE => Some(ADD_UPDATE_BODY_LEN),
        msg_type::DELETE => Some(DELETE_BODY_LEN),
        msg_type::TRADED => Some(TRADED_BODY_LEN),
        _ => None,
    }
}
