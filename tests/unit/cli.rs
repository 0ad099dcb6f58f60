//! Exercises the compiled binary: argument parsing, exit codes, and the
//! log-file lifecycle described in spec §6.

use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_orderbook-reader"))
}

#[test]
fn missing_levels_argument_exits_non_zero() {
    let output = bin().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn non_numeric_levels_argument_exits_non_zero() {
    let output = bin().arg("not-a-number").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn clean_stream_exits_zero_and_writes_both_log_files() {
    let dir = tempfile::tempdir().unwrap();

    let mut child = bin()
        .arg("2")
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut add_event = Vec::new();
    add_event.extend_from_slice(&1i32.to_le_bytes()); // seq_num
    add_event.extend_from_slice(&31i32.to_le_bytes()); // msg_size
    add_event.push(b'A');
    add_event.extend_from_slice(b"AAA");
    add_event.extend_from_slice(&1u64.to_le_bytes()); // order_id
    add_event.push(b'B');
    add_event.extend_from_slice(&[0u8; 3]);
    add_event.extend_from_slice(&100u64.to_le_bytes()); // size
    add_event.extend_from_slice(&10050i32.to_le_bytes()); // price
    add_event.extend_from_slice(&[0u8; 4]);

    child.stdin.take().unwrap().write_all(&add_event).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "1, AAA, [(10050, 100)], []\n");

    let logged = std::fs::read_to_string(dir.path().join("output.log")).unwrap();
    assert_eq!(logged, stdout);
    // debug.log is always created, even with nothing noteworthy to log.
    assert!(dir.path().join("debug.log").exists());
}
