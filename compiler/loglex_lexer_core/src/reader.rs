//! Rune-at-a-time reader with one rune of pushback.
//!
//! Decodes UTF-8 from any [`BufRead`] without requiring the whole input in
//! memory. A malformed, overlong or truncated sequence consumes exactly one
//! byte and decodes as U+FFFD, which the scanner then reports as illegal.
//! Candidate sequences are validated before any of their bytes are taken,
//! so the bytes after a bad lead byte are decoded on their own.
//!
//! # I/O errors
//!
//! The reader never returns an error from [`read()`](RuneReader::read). A
//! failing source ends the stream (`read()` returns `None`) and the error is
//! retained for [`take_error()`](RuneReader::take_error). Interrupted reads
//! are retried.

use std::io::{self, BufRead};

/// U+FFFD, produced for bytes that do not start a valid UTF-8 sequence.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Rune reader over a buffered byte source.
///
/// The pushback slot holds at most one rune: [`unread()`](Self::unread)
/// returns the most recent rune to the stream, and a second `unread()`
/// without an intervening `read()` does nothing.
#[derive(Debug)]
pub struct RuneReader<R> {
    input: R,
    /// Rune returned by the last `read()`, available for `unread()`.
    last: Option<char>,
    /// Rune pushed back by `unread()`, returned by the next `read()`.
    pushed_back: Option<char>,
    /// Runes consumed so far (pushback excluded).
    offset: usize,
    /// First I/O error reported by `input`, until taken.
    error: Option<io::Error>,
    /// Set once `input` fails. The stream stays ended afterwards.
    failed: bool,
    /// Bytes taken from `input` but not yet decoded.
    window: [u8; 4],
    window_len: usize,
}

impl<R: BufRead> RuneReader<R> {
    pub fn new(input: R) -> Self {
        RuneReader {
            input,
            last: None,
            pushed_back: None,
            offset: 0,
            error: None,
            failed: false,
            window: [0; 4],
            window_len: 0,
        }
    }

    /// Read the next rune, or `None` at end of stream.
    pub fn read(&mut self) -> Option<char> {
        let next = match self.pushed_back.take() {
            Some(ch) => Some(ch),
            None => self.decode(),
        };
        if next.is_some() {
            self.offset += 1;
        }
        self.last = next;
        next
    }

    /// Push the most recently read rune back onto the stream.
    pub fn unread(&mut self) {
        if let Some(ch) = self.last.take() {
            debug_assert!(self.pushed_back.is_none(), "pushback holds one rune");
            self.pushed_back = Some(ch);
            self.offset -= 1;
        }
    }

    /// Number of runes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Take the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns `true` if the stream was ended by an I/O error.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn decode(&mut self) -> Option<char> {
        if self.failed {
            return None;
        }
        match self.decode_rune() {
            Ok(ch) => ch,
            Err(err) => {
                tracing::warn!(offset = self.offset, error = %err, "input stream failed");
                self.error = Some(err);
                self.failed = true;
                None
            }
        }
    }

    fn decode_rune(&mut self) -> io::Result<Option<char>> {
        if !self.fill_window(1)? {
            return Ok(None);
        }
        let lead = self.window[0];
        if lead.is_ascii() {
            self.shift_window(1);
            return Ok(Some(char::from(lead)));
        }
        let width = utf8_width(lead);
        if width > 0 && self.fill_window(width)? {
            let decoded = std::str::from_utf8(&self.window[..width])
                .ok()
                .and_then(|s| s.chars().next());
            if let Some(ch) = decoded {
                self.shift_window(width);
                return Ok(Some(ch));
            }
        }
        // Invalid, overlong or truncated: drop the lead byte only. The bytes
        // after it are decoded on their own.
        self.shift_window(1);
        Ok(Some(REPLACEMENT))
    }

    /// Top up the lookahead window to `n` bytes. Returns `false` if the
    /// input ends first.
    fn fill_window(&mut self, n: usize) -> io::Result<bool> {
        while self.window_len < n {
            match self.next_byte()? {
                Some(b) => {
                    self.window[self.window_len] = b;
                    self.window_len += 1;
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    fn shift_window(&mut self, n: usize) {
        self.window.copy_within(n..self.window_len, 0);
        self.window_len -= n;
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.input.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.input.consume(1);
        }
        Ok(byte)
    }
}

/// Encoded length implied by a non-ASCII lead byte, or 0 if `lead` cannot
/// start a sequence.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
