//! Core [`OrderBook`]: two price-ordered ladders sharing one arena of
//! resting orders, plus an order-id index for O(1) average-case lookup.
//!
//! A price level is an intrusive doubly-linked list of arena handles rather
//! than a `Vec`: removing an order elsewhere in the level must never shift
//! the handle any other index entry points at (see spec §9, §4.3). The
//! arena is a [`slab::Slab`], the same structural shape — slab-backed
//! intrusive list under a sorted map of per-price head/tail handles — used
//! by order-book readers elsewhere in this codebase's lineage.

use std::collections::{BTreeMap, HashMap};

use slab::Slab;
use tracing::{trace, warn};

use super::error::OrderBookError;
use super::order::{Order, Side};

/// A stable index into the arena, valid until the node it names is removed.
type Handle = usize;

/// One node of a price level's intrusive doubly-linked FIFO list.
#[derive(Debug, Clone, Copy)]
struct Node {
    order: Order,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// All resting orders at a single price, oldest first.
#[derive(Debug, Clone, Copy, Default)]
struct Level {
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl Level {
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Where an order currently rests: which side, which price, which handle.
#[derive(Debug, Clone, Copy)]
struct IndexEntry {
    side: Side,
    price: i32,
    handle: Handle,
}

/// The full limit order book: two ladders, one arena, one index.
///
/// `OrderBook` is intentionally single-threaded (spec §5) — every method
/// takes `&mut self` and there is no internal synchronization.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<i32, Level>,
    asks: BTreeMap<i32, Level>,
    arena: Slab<Node>,
    index: HashMap<u64, IndexEntry>,
}

impl OrderBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        OrderBook::default()
    }

    /// Number of orders currently resting in the book.
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    fn ladder(&self, side: Side) -> &BTreeMap<i32, Level> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn ladder_mut(&mut self, side: Side) -> &mut BTreeMap<i32, Level> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Appends `order` to the tail of its `(side, price)` level.
    ///
    /// Rejects a duplicate `order_id` with a diagnostic rather than
    /// silently overwriting the index, which is a deliberate departure from
    /// the source's leak-on-re-add behavior (spec §9).
    pub fn add(&mut self, order: Order, side: Side) -> Result<(), OrderBookError> {
        if self.index.contains_key(&order.order_id) {
            warn!(order_id = order.order_id, "duplicate order_id on ADD, rejecting");
            return Err(OrderBookError::DuplicateOrderId(order.order_id));
        }

        let price = order.price;
        let handle = self.arena.insert(Node {
            order,
            prev: None,
            next: None,
        });
        self.append_to_level(side, price, handle);
        self.index.insert(
            order.order_id,
            IndexEntry {
                side,
                price,
                handle,
            },
        );
        trace!(order_id = order.order_id, ?side, price, volume = order.volume, "order added");
        Ok(())
    }

    /// Links `handle` onto the tail of the level at `(side, price)`,
    /// creating the level if this is its first order.
    fn append_to_level(&mut self, side: Side, price: i32, handle: Handle) {
        let prev_tail = self.ladder_mut(side).entry(price).or_default().tail;
        if let Some(tail) = prev_tail {
            self.arena[tail].next = Some(handle);
        }
        let node = &mut self.arena[handle];
        node.prev = prev_tail;
        node.next = None;

        let level = self.ladder_mut(side).entry(price).or_default();
        if prev_tail.is_none() {
            level.head = Some(handle);
        }
        level.tail = Some(handle);
    }

    /// Unlinks `handle` from the level at `(side, price)`, pruning the
    /// level if it becomes empty, and returns the order it held. Does not
    /// touch the order-id index.
    fn unlink(&mut self, side: Side, price: i32, handle: Handle) -> Order {
        let node = self.arena.remove(handle);
        let (prev, next) = (node.prev, node.next);
        if let Some(p) = prev {
            self.arena[p].next = next;
        }
        if let Some(n) = next {
            self.arena[n].prev = prev;
        }

        let ladder = self.ladder_mut(side);
        if let Some(level) = ladder.get_mut(&price) {
            if prev.is_none() {
                level.head = next;
            }
            if next.is_none() {
                level.tail = prev;
            }
            if level.is_empty() {
                ladder.remove(&price);
            }
        }
        node.order
    }

    /// Removes `order_id` entirely: unlinks it from its level and erases
    /// its index entry. Used by `delete` and by a full-fill `execute`.
    fn remove_order(&mut self, order_id: u64) -> Option<Order> {
        let entry = self.index.remove(&order_id)?;
        Some(self.unlink(entry.side, entry.price, entry.handle))
    }

    /// Removes a resting order. Logs and no-ops for an unknown `order_id`.
    pub fn delete(&mut self, order_id: u64) -> Result<(), OrderBookError> {
        if self.remove_order(order_id).is_some() {
            trace!(order_id, "order deleted");
            Ok(())
        } else {
            warn!(order_id, "DELETE for unknown order_id, ignoring");
            Err(OrderBookError::OrderNotFound(order_id))
        }
    }

    /// Mutates a resting order's size and, if the price is unchanged,
    /// leaves its time priority intact. A price change is modeled as
    /// remove-then-append at the tail of the new level (spec §4.3, §9),
    /// losing time priority but preserving `order_id`.
    ///
    /// The side used is always the one recorded in the index at insertion
    /// time, never a side byte carried by this event (spec §9).
    pub fn update(&mut self, order_id: u64, new_size: u64, new_price: i32) -> Result<(), OrderBookError> {
        let Some(entry) = self.index.get(&order_id).copied() else {
            warn!(order_id, "UPDATE for unknown order_id, ignoring");
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        if new_price == entry.price {
            self.arena[entry.handle].order.volume = new_size;
            trace!(order_id, volume = new_size, "order updated in place");
            return Ok(());
        }

        self.unlink(entry.side, entry.price, entry.handle);
        let new_handle = self.arena.insert(Node {
            order: Order::new(order_id, new_size, new_price),
            prev: None,
            next: None,
        });
        self.append_to_level(entry.side, new_price, new_handle);
        self.index.insert(
            order_id,
            IndexEntry {
                side: entry.side,
                price: new_price,
                handle: new_handle,
            },
        );
        trace!(order_id, new_price, "order repriced, time priority reset");
        Ok(())
    }

    /// Applies a partial or full execution. A full fill (`executed_volume`
    /// at or above the resting volume) removes the order outright,
    /// regardless of overfill (spec §4.3).
    pub fn execute(&mut self, order_id: u64, executed_volume: u64) -> Result<(), OrderBookError> {
        let Some(entry) = self.index.get(&order_id).copied() else {
            warn!(order_id, "TRADED for unknown order_id, ignoring");
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        let remaining_volume = self.arena[entry.handle].order.volume;
        if executed_volume < remaining_volume {
            self.arena[entry.handle].order.volume = remaining_volume - executed_volume;
            trace!(order_id, remaining = remaining_volume - executed_volume, "partial fill");
        } else {
            self.remove_order(order_id);
            trace!(order_id, "full fill, order removed");
        }
        Ok(())
    }

    /// Produces up to `levels` `(price, aggregated_volume)` pairs in the
    /// side's native order: bids descending, asks ascending (spec §4.3).
    pub fn snapshot(&self, side: Side, levels: usize) -> Vec<(i32, u64)> {
        let ladder = self.ladder(side);
        let entries: Box<dyn Iterator<Item = (&i32, &Level)>> = match side {
            Side::Bid => Box::new(ladder.iter().rev()),
            Side::Ask => Box::new(ladder.iter()),
        };
        entries
            .take(levels)
            .map(|(price, level)| (*price, self.level_volume(level)))
            .collect()
    }

    /// Linear scan summing every resting order's volume at one level
    /// (spec §4.3 — aggregation is not cached).
    fn level_volume(&self, level: &Level) -> u64 {
        let mut total = 0u64;
        let mut cur = level.head;
        while let Some(handle) = cur {
            let node = &self.arena[handle];
            total += node.order.volume;
            cur = node.next;
        }
        total
    }

    /// Order ids at `(side, price)` in FIFO (arrival) order. Used by tests
    /// to observe time priority, which the aggregated snapshot can't show.
    #[cfg(test)]
    fn order_ids_at(&self, side: Side, price: i32) -> Vec<u64> {
        let mut ids = Vec::new();
        let mut cur = self.ladder(side).get(&price).and_then(|l| l.head);
        while let Some(handle) = cur {
            let node = &self.arena[handle];
            ids.push(node.order.order_id);
            cur = node.next;
        }
        ids
    }
}
