//! CLI surface and the resolved runtime configuration it produces.
//!
//! There is no file-based configuration: the single `levels` argument is
//! the entire runtime knob (spec §6). [`Config`] is kept distinct from the
//! `clap`-derived [`Cli`] so the core and its tests depend on a plain value
//! type, never on `clap` itself.

use clap::Parser;

/// `orderbook-reader <levels>` — decodes the event stream on stdin and
/// emits one depth snapshot per applied event.
#[derive(Debug, Parser)]
#[command(name = "orderbook-reader", about = "Binary market-data event reader and depth snapshot renderer")]
pub struct Cli {
    /// Maximum number of price levels per side in every emitted snapshot.
    pub levels: u32,
}

/// The fully resolved runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub levels: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            levels: cli.levels as usize,
        }
    }
}
