//! Drains a [`Decoder`] against an [`OrderBook`], writing one snapshot line
//! per applied event (spec §4.5).
//!
//! The loop is parameterized over the snapshot sink and the diagnostic sink
//! as plain [`std::io::Write`] implementers rather than hardcoded to
//! stdout/a file, so the production pairing (stdout + `output.log`,
//! `debug.log` + stderr) and an in-memory `Vec<u8>` pairing in tests share
//! the same code path.

use std::io::{self, Read, Write};

use tracing::error;

use crate::decoder::Decoder;
use crate::orderbook::{Order, OrderBook, render_snapshot};
use crate::wire::Body;

/// Reads events from `reader` until clean end-of-stream or a decode
/// failure, applying each to `book` and writing a rendered snapshot of the
/// top `levels` price levels per side to `snapshot_out` after every applied
/// event. A decode failure is reported to `diag_out` (and via `tracing`)
/// and ends the loop; this is graceful termination, not a propagated error
/// (spec §6 — exit code 0 either way).
pub fn run<R, W1, W2>(
    reader: R,
    levels: usize,
    book: &mut OrderBook,
    snapshot_out: &mut W1,
    diag_out: &mut W2,
) -> io::Result<()>
where
    R: Read,
    W1: Write,
    W2: Write,
{
    let mut decoder = Decoder::new(reader);
    loop {
        let event = match decoder.next_event() {
            Ok(Some(event)) => event,
            Ok(None) => break,
            Err(err) => {
                error!(%err, "decoder terminated the stream");
                writeln!(diag_out, "decode error, stream terminated: {err}")?;
                break;
            }
        };

        let symbol = event.body.symbol();
        match event.body {
            Body::Add(b) => {
                let _ = book.add(Order::new(b.order_id, b.size, b.price), b.side);
            }
            Body::Update(b) => {
                let _ = book.update(b.order_id, b.size, b.price);
            }
            Body::Delete(b) => {
                let _ = book.delete(b.order_id);
            }
            Body::Traded(b) => {
                let _ = book.execute(b.order_id, b.volume);
            }
        }

        let bids = book.snapshot(crate::orderbook::Side::Bid, levels);
        let asks = book.snapshot(crate::orderbook::Side::Ask, levels);
        let line = render_snapshot(event.header.seq_num, &symbol, &bids, &asks);
        writeln!(snapshot_out, "{line}")?;
    }
    Ok(())
}
