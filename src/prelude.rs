//! Convenience re-exports of the crate's most commonly used types.
//!
//! ```
//! use orderbook_reader::prelude::*;
//! ```

pub use crate::config::{Cli, Config};
pub use crate::decoder::{Decoder, DecodeError};
pub use crate::orderbook::{Order, OrderBook, OrderBookError, Side, render_snapshot};
pub use crate::startup::StartupError;
pub use crate::wire::{Body, Event, Header, Symbol};
