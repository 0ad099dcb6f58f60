//! Binary entry point: argument parsing, log-file lifecycle, and the
//! event loop wiring described in spec §6.
//!
//! This binary is intentionally thin — everything it does is assemble the
//! core components (`Decoder`, `OrderBook`, the snapshot renderer) behind
//! real I/O. See [`orderbook_reader::event_loop`] for the loop itself.

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;

use orderbook_reader::config::{Cli, Config};
use orderbook_reader::orderbook::OrderBook;
use orderbook_reader::startup::StartupError;
use orderbook_reader::{event_loop, OUTPUT_LOG_PATH, DEBUG_LOG_PATH};

/// Duplicates every write to two sinks, used to pair stdout with
/// `output.log` (spec §6's snapshot sink is "both").
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.a.write_all(buf)?;
        self.b.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from(cli);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("orderbook-reader: {err}");
            ExitCode::FAILURE
        }
    }
}

fn open_truncated(path: &str) -> Result<File, StartupError> {
    File::create(path).map_err(|source| StartupError::LogFileOpen {
        path: path.into(),
        source,
    })
}

fn run(config: Config) -> Result<(), StartupError> {
    let output_log = open_truncated(OUTPUT_LOG_PATH)?;
    let debug_log = open_truncated(DEBUG_LOG_PATH)?;

    let subscriber_log = debug_log.try_clone().map_err(|source| StartupError::LogFileOpen {
        path: DEBUG_LOG_PATH.into(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(subscriber_log))
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut snapshot_sink = Tee {
        a: io::stdout(),
        b: output_log,
    };
    let mut diag_sink = debug_log;

    let mut book = OrderBook::new();
    let stdin = io::stdin();
    event_loop::run(stdin.lock(), config.levels, &mut book, &mut snapshot_sink, &mut diag_sink)
        .map_err(StartupError::SinkWrite)
}
