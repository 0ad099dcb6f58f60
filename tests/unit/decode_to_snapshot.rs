//! Full decode → book → snapshot round trips, including the exact
//! six-step scenario from spec §8.

use std::io::Cursor;

use orderbook_reader::event_loop;
use orderbook_reader::orderbook::OrderBook;
use orderbook_reader::wire::{self, msg_type};

fn header(seq_num: i32, msg_size: i32, msg_type: u8) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&seq_num.to_le_bytes());
    bytes.extend_from_slice(&msg_size.to_le_bytes());
    bytes.push(msg_type);
    bytes
}

fn add_or_update(seq_num: i32, msg_type: u8, sym: &[u8; 3], order_id: u64, side: u8, size: u64, price: i32) -> Vec<u8> {
    let mut bytes = header(seq_num, wire::ADD_UPDATE_BODY_LEN as i32, msg_type);
    bytes.extend_from_slice(sym);
    bytes.extend_from_slice(&order_id.to_le_bytes());
    bytes.push(side);
    bytes.extend_from_slice(&[0u8; 3]);
    bytes.extend_from_slice(&size.to_le_bytes());
    bytes.extend_from_slice(&price.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 4]);
    bytes
}

fn delete(seq_num: i32, sym: &[u8; 3], order_id: u64, side: u8) -> Vec<u8> {
    let mut bytes = header(seq_num, wire::DELETE_BODY_LEN as i32, msg_type::DELETE);
    bytes.extend_from_slice(sym);
    bytes.extend_from_slice(&order_id.to_le_bytes());
    bytes.push(side);
    bytes.extend_from_slice(&[0u8; 3]);
    bytes
}

fn traded(seq_num: i32, sym: &[u8; 3], order_id: u64, side: u8, volume: u64) -> Vec<u8> {
    let mut bytes = header(seq_num, wire::TRADED_BODY_LEN as i32, msg_type::TRADED);
    bytes.extend_from_slice(sym);
    bytes.extend_from_slice(&order_id.to_le_bytes());
    bytes.push(side);
    bytes.extend_from_slice(&[0u8; 3]);
    bytes.extend_from_slice(&volume.to_le_bytes());
    bytes
}

fn run_stream(stream: Vec<u8>, levels: usize) -> Vec<String> {
    let mut book = OrderBook::new();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    event_loop::run(Cursor::new(stream), levels, &mut book, &mut out, &mut diag).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn spec_section_8_six_step_scenario() {
    let sym = b"AAA";
    let mut stream = Vec::new();
    stream.extend(add_or_update(1, msg_type::ADD, sym, 1, b'B', 100, 10050));
    stream.extend(add_or_update(2, msg_type::ADD, sym, 2, b'B', 50, 10050));
    stream.extend(add_or_update(3, msg_type::ADD, sym, 3, b'S', 80, 10060));
    stream.extend(traded(4, sym, 1, b'B', 40));
    stream.extend(add_or_update(5, msg_type::UPDATE, sym, 2, b'B', 200, 10049));
    stream.extend(delete(6, sym, 1, b'B'));

    let lines = run_stream(stream, 2);
    assert_eq!(
        lines,
        vec![
            "1, AAA, [(10050, 100)], []",
            "2, AAA, [(10050, 150)], []",
            "3, AAA, [(10050, 150)], [(10060, 80)]",
            "4, AAA, [(10050, 110)], [(10060, 80)]",
            "5, AAA, [(10050, 60), (10049, 200)], [(10060, 80)]",
            "6, AAA, [(10049, 200)], [(10060, 80)]",
        ]
    );
}

#[test]
fn duplicate_add_is_rejected_but_snapshot_still_emitted() {
    let sym = b"AAA";
    let mut stream = Vec::new();
    stream.extend(add_or_update(1, msg_type::ADD, sym, 1, b'B', 100, 10050));
    stream.extend(add_or_update(2, msg_type::ADD, sym, 1, b'B', 999, 999));

    let lines = run_stream(stream, 2);
    assert_eq!(lines[0], "1, AAA, [(10050, 100)], []");
    // The duplicate is rejected: the book is unchanged, but the event is
    // still consumed and a snapshot is still emitted (spec §7).
    assert_eq!(lines[1], "2, AAA, [(10050, 100)], []");
}

#[test]
fn unknown_order_id_no_ops_but_snapshot_still_emitted() {
    let sym = b"AAA";
    let mut stream = Vec::new();
    stream.extend(add_or_update(1, msg_type::ADD, sym, 1, b'B', 100, 10050));
    stream.extend(delete(2, sym, 999, b'B'));

    let lines = run_stream(stream, 2);
    assert_eq!(lines[0], "1, AAA, [(10050, 100)], []");
    assert_eq!(lines[1], "2, AAA, [(10050, 100)], []");
}

#[test]
fn zero_levels_renders_empty_lists_regardless_of_book_state() {
    let sym = b"AAA";
    let stream = add_or_update(1, msg_type::ADD, sym, 1, b'B', 100, 10050);
    let lines = run_stream(stream, 0);
    assert_eq!(lines, vec!["1, AAA, [], []"]);
}

#[test]
fn truncated_stream_terminates_cleanly_with_prior_snapshots_intact() {
    let sym = b"AAA";
    let mut stream = add_or_update(1, msg_type::ADD, sym, 1, b'B', 100, 10050);
    stream.extend_from_slice(&[9, 9, 9]); // a partial header, nothing more

    let mut book = OrderBook::new();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    event_loop::run(Cursor::new(stream), 2, &mut book, &mut out, &mut diag).unwrap();
    let lines: Vec<_> = String::from_utf8(out).unwrap().lines().map(str::to_owned).collect();
    assert_eq!(lines, vec!["1, AAA, [(10050, 100)], []"]);
    assert!(!diag.is_empty());
}

#[test]
fn unrecognized_msg_type_terminates_the_stream() {
    let stream = header(1, 0, b'Z');
    let mut book = OrderBook::new();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    event_loop::run(Cursor::new(stream), 2, &mut book, &mut out, &mut diag).unwrap();
    assert!(out.is_empty());
    assert!(!diag.is_empty());
}
