//! Pulls one framed event at a time off a byte source.
//!
//! The decoder is generic over [`std::io::Read`] so the same decoding logic
//! drives standard input in production and an in-memory `Cursor<Vec<u8>>` in
//! tests.

use std::fmt;
use std::io::{self, Read};

use crate::wire::{self, Body, Event, Header, HEADER_LEN};

/// Failure modes that terminate the event stream.
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// A header or body read returned fewer bytes than required and the
    /// source had already produced at least one byte of the record.
    Truncated {
        /// What the record was expected to be (`"header"` or a body kind).
        what: &'static str,
        /// Bytes required to complete the record.
        expected: usize,
        /// Bytes actually available before the source was exhausted.
        got: usize,
    },
    /// `msg_type` was not one of `{'A','U','D','E'}`.
    UnknownMsgType(u8),
    /// The header's `msg_size` field did not match the body length implied
    /// by `msg_type`.
    SizeMismatch {
        msg_type: u8,
        declared: i32,
        expected: usize,
    },
    /// The underlying reader returned an I/O error.
    Io(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated {
                what,
                expected,
                got,
            } => write!(
                f,
                "truncated {what}: expected {expected} bytes, got {got}"
            ),
            DecodeError::UnknownMsgType(byte) => {
                write!(f, "unknown msg_type byte: {byte:#04x}")
            }
            DecodeError::SizeMismatch {
                msg_type,
                declared,
                expected,
            } => write!(
                f,
                "msg_size mismatch for msg_type {:#04x}: header declared {declared}, expected {expected}",
                msg_type
            ),
            DecodeError::Io(err) => write!(f, "i/o error while decoding: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Io(err)
    }
}

/// Reads a frame-at-a-time decoder over a byte source.
pub struct Decoder<R> {
    reader: R,
}

impl<R: Read> Decoder<R> {
    /// Wraps `reader` in a decoder.
    pub fn new(reader: R) -> Self {
        Decoder { reader }
    }

    /// Reads and decodes the next event.
    ///
    /// Returns `Ok(None)` on clean end-of-stream (zero bytes available where
    /// a new header was expected). Any other short read, or an unrecognized
    /// or mismatched `msg_type`/`msg_size`, is a [`DecodeError`] and the
    /// caller should stop calling this method afterward.
    pub fn next_event(&mut self) -> Result<Option<Event>, DecodeError> {
        let mut header_buf = [0u8; HEADER_LEN];
        let header_read = read_partial(&mut self.reader, &mut header_buf)?;
        if header_read == 0 {
            return Ok(None);
        }
        if header_read != HEADER_LEN {
            return Err(DecodeError::Truncated {
                what: "header",
                expected: HEADER_LEN,
                got: header_read,
            });
        }
        let header = Header::decode(&header_buf);

        let expected_len = wire::expected_body_len(header.msg_type)
            .ok_or(DecodeError::UnknownMsgType(header.msg_type))?;
        if header.msg_size as usize != expected_len {
            return Err(DecodeError::SizeMismatch {
                msg_type: header.msg_type,
                declared: header.msg_size,
                expected: expected_len,
            });
        }

        let body = self.decode_body(header.msg_type, expected_len)?;
        Ok(Some(Event { header, body }))
    }

    fn decode_body(&mut self, msg_type: u8, expected_len: usize) -> Result<Body, DecodeError> {
        let mut buf = vec![0u8; expected_len];
        let got = read_partial(&mut self.reader, &mut buf)?;
        if got != expected_len {
            return Err(DecodeError::Truncated {
                what: "body",
                expected: expected_len,
                got,
            });
        }

        let decoded = match msg_type {
            wire::msg_type::ADD => wire::AddUpdateBody::decode(buf.as_slice().try_into().unwrap())
                .map(Body::Add),
            wire::msg_type::UPDATE => {
                wire::AddUpdateBody::decode(buf.as_slice().try_into().unwrap()).map(Body::Update)
            }
            wire::msg_type::DELETE => {
                wire::DeleteBody::decode(buf.as_slice().try_into().unwrap()).map(Body::Delete)
            }
            wire::msg_type::TRADED => {
                wire::TradedBody::decode(buf.as_slice().try_into().unwrap()).map(Body::Traded)
            }
            other => return Err(DecodeError::UnknownMsgType(other)),
        };
        // msg_type was already validated by expected_body_len above; an
        // invalid side byte is the only way decode() can fail here.
        decoded.ok_or(DecodeError::UnknownMsgType(
            buf.first().copied().unwrap_or(0),
        ))
    }
}

/// Reads up to `buf.len()` bytes, stopping early only at end-of-stream.
///
/// Returns the number of bytes actually read. This lets the caller tell a
/// clean EOF (zero bytes read) apart from a truncated record (a positive
/// but incomplete read), which `Read::read_exact` cannot distinguish.
fn read_partial<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
