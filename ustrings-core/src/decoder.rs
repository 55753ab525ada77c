//! Pull-based UTF-8 decoding of a byte stream
//!
//! The decoder never fails. An undecodable byte becomes one
//! [`REPLACEMENT`](CodePoint::REPLACEMENT) code point of width 1 and decoding
//! resumes at the next byte. A read error ends the sequence the same way end
//! of stream does.
//!
//! UTF-8 sequence lengths by lead byte:
//! - 1 byte:  0xxxxxxx
//! - 2 bytes: 110xxxxx 10xxxxxx
//! - 3 bytes: 1110xxxx 10xxxxxx 10xxxxxx
//! - 4 bytes: 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx

use std::io::{ErrorKind, Read};

const MAX_SEQUENCE: usize = 4;

/// A decoded Unicode scalar value and the bytes it occupied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePoint {
    pub ch: char,
    pub width: usize,
}

impl CodePoint {
    /// Stand-in for an undecodable byte
    pub const REPLACEMENT: CodePoint = CodePoint {
        ch: char::REPLACEMENT_CHARACTER,
        width: 1,
    };

    pub fn new(ch: char, width: usize) -> Self {
        Self { ch, width }
    }
}

/// Lazy, finite, non-restartable sequence of [`CodePoint`]s read from `R`
///
/// Reads are issued in pieces of at most four bytes, so `R` should be
/// buffered (a `BufReader` or an in-memory slice).
pub struct Decoder<R> {
    reader: R,
    /// Bytes read but not yet decoded
    pending: [u8; MAX_SEQUENCE],
    pending_len: usize,
    /// Set on end of stream or read error; no further reads happen
    exhausted: bool,
    consumed: u64,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: [0u8; MAX_SEQUENCE],
            pending_len: 0,
            exhausted: false,
            consumed: 0,
        }
    }

    /// Total bytes covered by the code points yielded so far
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Get expected length of a UTF-8 sequence from its first byte
    #[inline]
    pub fn sequence_length(first_byte: u8) -> usize {
        match first_byte {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            // Continuation or invalid lead byte
            _ => 1,
        }
    }

    /// Read until `target` bytes are pending or the stream is exhausted
    fn fill(&mut self, target: usize) {
        while !self.exhausted && self.pending_len < target {
            match self.reader.read(&mut self.pending[self.pending_len..target]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => self.pending_len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!(
                        "read failed after {} bytes, ending stream: {e}",
                        self.consumed + self.pending_len as u64
                    );
                    self.exhausted = true;
                }
            }
        }
    }

    fn consume(&mut self, width: usize) {
        self.pending.copy_within(width..self.pending_len, 0);
        self.pending_len -= width;
        self.consumed += width as u64;
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        self.fill(1);
        if self.pending_len == 0 {
            return None;
        }

        let width = Self::sequence_length(self.pending[0]);
        self.fill(width);

        let decoded = if self.pending_len >= width {
            std::str::from_utf8(&self.pending[..width])
                .ok()
                .and_then(|s| s.chars().next())
        } else {
            // Truncated by end of stream
            None
        };

        let code_point = match decoded {
            Some(ch) => CodePoint::new(ch, width),
            None => CodePoint::REPLACEMENT,
        };
        self.consume(code_point.width);
        Some(code_point)
    }
}
