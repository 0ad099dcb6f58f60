//! Order book error types

use std::fmt;

/// Errors that can occur within the [`super::OrderBook`].
///
/// Every variant here is non-fatal at the stream level: the event loop logs
/// it and continues, leaving the book unchanged (see spec §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// `add` was called with an `order_id` already present in the index.
    ///
    /// Unlike the source system this is rejected outright rather than
    /// silently overwriting the index while leaking the prior order.
    DuplicateOrderId(u64),

    /// `update`, `delete`, or `execute` referenced an `order_id` that is not
    /// currently resting in the book.
    OrderNotFound(u64),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrderId(id) => {
                write!(f, "duplicate order_id {id} rejected on add")
            }
            OrderBookError::OrderNotFound(id) => write!(f, "order_id {id} not found"),
        }
    }
}

impl std::error::Error for OrderBookError {}
