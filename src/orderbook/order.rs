//! The resting order, and the side it rests on.

pub use crate::wire::Side;

/// A single resting order.
///
/// `order_id` is unique for the lifetime of the stream (spec §3). `volume`
/// is the remaining resting quantity and is strictly positive for any order
/// actually present in a level — a `volume` reaching zero removes the order
/// rather than leaving a zero-volume entry behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub order_id: u64,
    pub volume: u64,
    pub price: i32,
}

impl Order {
    pub fn new(order_id: u64, volume: u64, price: i32) -> Self {
        Order {
            order_id,
            volume,
            price,
        }
    }
}
