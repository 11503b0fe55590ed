//! Bounded line reader for ASCII STL.
//!
//! Any single `\n` or `\r` byte ends a line, so bare-CR files (classic Mac
//! line endings) read the same as LF or CRLF files. A CRLF pair yields an
//! extra empty line, which callers ignore.

use std::io::{self, BufRead};

use tracing::{debug, warn};

/// Default upper bound on line length in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// Reads logical lines from a byte stream without relying on `BufRead::lines`.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    max_len: usize,
    lines_read: usize,
    overflowed: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader with the default line bound.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_MAX_LINE_LENGTH)
    }

    /// Create a reader whose lines, terminator included, fit in `max_len` bytes.
    pub fn with_capacity(inner: R, max_len: usize) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(max_len.min(DEFAULT_MAX_LINE_LENGTH)),
            max_len,
            lines_read: 0,
            overflowed: false,
        }
    }

    /// Number of lines returned so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read the next line, without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream, and also when a line exceeds the
    /// bound; no further lines are produced after an overflow. Bytes after the
    /// last terminator are not a line and are dropped.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.overflowed {
            return Ok(None);
        }

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                if !self.buf.is_empty() {
                    debug!(
                        "Dropping {} trailing bytes with no line terminator",
                        self.buf.len()
                    );
                    self.buf.clear();
                }
                return Ok(None);
            }

            let terminator = available.iter().position(|&b| b == b'\n' || b == b'\r');
            let take = terminator.unwrap_or(available.len());

            // the terminator counts against the bound
            if self.buf.len() + take >= self.max_len {
                warn!(
                    "Line {} exceeds {} bytes, stopping",
                    self.lines_read + 1,
                    self.max_len
                );
                self.overflowed = true;
                self.buf.clear();
                return Ok(None);
            }

            self.buf.extend_from_slice(&available[..take]);

            match terminator {
                Some(pos) => {
                    self.inner.consume(pos + 1);
                    self.lines_read += 1;
                    return Ok(Some(self.buf.as_slice()));
                }
                None => self.inner.consume(take),
            }
        }
    }
}
