//! # orderbook-reader
//!
//! Decodes a fixed-layout binary market-data event stream into a limit
//! order book and emits a textual top-of-book depth snapshot after every
//! applied event.
//!
//! The crate is split into the pieces the data flows through in order:
//!
//! - [`wire`] — fixed-layout record definitions for the header and the
//!   four event bodies.
//! - [`decoder`] — pulls one framed event at a time off a byte source.
//! - [`orderbook`] — the two-ladder, order-indexed book itself, plus the
//!   depth snapshot renderer.
//! - [`event_loop`] — drains a decoder against a book, writing one
//!   rendered snapshot per applied event.
//! - [`config`] / [`startup`] — the CLI surface and the ambient errors
//!   that can keep the binary from ever reaching the event loop.
//!
//! Matching incoming orders against the book, persistence, networking, and
//! any notion of concurrency are explicitly out of scope: this is a
//! single-threaded reader sitting at the edge of a market-data pipeline,
//! not a matching engine.

pub mod config;
pub mod decoder;
pub mod event_loop;
pub mod orderbook;
pub mod prelude;
pub mod startup;
pub mod wire;

/// Path the snapshot sink truncates and appends to at startup (spec §6).
pub const OUTPUT_LOG_PATH: &str = "output.log";

/// Path the diagnostic sink truncates and appends to at startup (spec §6).
pub const DEBUG_LOG_PATH: &str = "debug.log";
