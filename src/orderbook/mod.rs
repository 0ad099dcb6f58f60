//! The order-book engine: two price-ordered ladders, an order-id index, and
//! the depth snapshot renderer that reads them.

mod book;
mod error;
mod order;
mod snapshot;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use order::{Order, Side};
pub use snapshot::render as render_snapshot;
