//! Textual top-of-book depth snapshot renderer.
//!
//! The renderer is a pure function of `(seq_num, symbol, bid aggregates,
//! ask aggregates)` — it never borrows the [`super::OrderBook`] or performs
//! I/O, so it is unit-testable without a live book or byte source (spec
//! §4.4).

use std::fmt::Write as _;

use crate::wire::Symbol;

/// Renders one snapshot line per the grammar in spec §6:
/// `"<seq>, <symbol>, [<bid_list>], [<ask_list>]"`.
///
/// `symbol` is the raw three-byte wire field, reproduced literally via its
/// lossy UTF-8 rendering (the core treats it as opaque bytes, spec §4.1).
pub fn render(seq_num: i32, symbol: &Symbol, bids: &[(i32, u64)], asks: &[(i32, u64)]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{seq_num}, {}, [", symbol_display(symbol));
    write_levels(&mut out, bids);
    out.push_str("], [");
    write_levels(&mut out, asks);
    out.push(']');
    out
}

fn write_levels(out: &mut String, levels: &[(i32, u64)]) {
    for (i, (price, volume)) in levels.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "({price}, {volume})");
    }
}

fn symbol_display(symbol: &Symbol) -> String {
    String::from_utf8_lossy(symbol).into_owned()
}
