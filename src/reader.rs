//! Buffered line reader for the NNTP wire encoding
//!
//! Everything on the wire is treated as ISO-8859-1: each byte maps to exactly
//! one character, so no byte sequence can fail to decode and 8-bit article
//! bodies survive a round trip through `String` unchanged.
//!
//! Lines end with CRLF only. A lone CR or LF inside a line is data. The
//! CR/LF pair may straddle two reads from the underlying stream.

use crate::error::{NntpError, Result};
use std::borrow::Cow;
use std::io::{self, Read};

/// Default size of the byte input buffer
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Smallest input buffer the reader will allocate
pub const MIN_BUFFER_SIZE: usize = 512;

/// Line builders that grew past this are released instead of reused
const MAX_RETAINED_LINE_CAPACITY: usize = 32 * 1024;

const READER_CLOSED: &str = "reader is closed";

/// Decode wire bytes into text
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    encoding_rs::mem::decode_latin1(bytes)
}

/// Encode text for the wire
///
/// Characters outside ISO-8859-1 have no byte representation and are sent as `?`.
pub fn encode(text: &str) -> Cow<'_, [u8]> {
    if encoding_rs::mem::is_str_latin1(text) {
        encoding_rs::mem::encode_latin1_lossy(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| u8::try_from(c).unwrap_or(b'?'))
                .collect(),
        )
    }
}

/// Map an I/O error, turning socket timeouts into [`NntpError::Timeout`]
pub(crate) fn io_error(err: io::Error) -> NntpError {
    match err.kind() {
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => NntpError::Timeout,
        _ => NntpError::Io(err),
    }
}

/// Buffered, encoding-aware reader over a byte stream
///
/// Provides character and line level reads. The reader owns the stream; use
/// [`get_mut`](Self::get_mut) to reach it for writing on duplex connections.
pub struct NntpStreamReader<R> {
    inner: Option<R>,
    buffer: Box<[u8]>,
    pos: usize,
    filled: usize,
    /// Last refill returned fewer bytes than requested
    may_block: bool,
    /// A CR ended the previous chunk and may pair with an LF in the next one
    saw_cr: bool,
    line: Vec<u8>,
}

impl<R: Read> NntpStreamReader<R> {
    /// Wrap a stream with the default buffer size
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    /// Wrap a stream with a specific input buffer size
    ///
    /// Sizes below [`MIN_BUFFER_SIZE`] are rounded up.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner: Some(inner),
            buffer: vec![0; capacity.max(MIN_BUFFER_SIZE)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            may_block: false,
            saw_cr: false,
            line: Vec::new(),
        }
    }

    /// Mutable access to the underlying stream
    ///
    /// # Errors
    ///
    /// [`NntpError::InvalidState`] once the reader has been closed.
    pub fn get_mut(&mut self) -> Result<&mut R> {
        self.inner
            .as_mut()
            .ok_or(NntpError::InvalidState(READER_CLOSED))
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Whether the most recent refill was short, i.e. the source had no more
    /// data ready and a further read may block
    pub fn may_block(&self) -> bool {
        self.may_block
    }

    /// Bytes decoded but not yet consumed
    pub fn buffered(&self) -> usize {
        self.filled - self.pos
    }

    /// Release the stream and buffers
    ///
    /// Every later operation fails with [`NntpError::InvalidState`]. Returns
    /// the stream so the caller can shut it down, or `None` if the reader was
    /// already closed.
    pub fn close(&mut self) -> Option<R> {
        self.buffer = Box::default();
        self.line = Vec::new();
        self.pos = 0;
        self.filled = 0;
        self.saw_cr = false;
        self.inner.take()
    }

    fn fill(&mut self) -> Result<usize> {
        let inner = self
            .inner
            .as_mut()
            .ok_or(NntpError::InvalidState(READER_CLOSED))?;
        self.pos = 0;
        self.filled = 0;
        loop {
            match inner.read(&mut self.buffer) {
                Ok(n) => {
                    self.may_block = n < self.buffer.len();
                    self.filled = n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(io_error(e)),
            }
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.inner.is_none() {
            return Err(NntpError::InvalidState(READER_CLOSED));
        }
        Ok(())
    }

    /// Look at the next character without consuming it
    ///
    /// May block to refill the buffer. Returns `None` at end of stream.
    pub fn peek_char(&mut self) -> Result<Option<char>> {
        self.ensure_open()?;
        if self.pos >= self.filled && self.fill()? == 0 {
            return Ok(None);
        }
        Ok(Some(char::from(self.buffer[self.pos])))
    }

    /// Consume and return the next character, `None` at end of stream
    pub fn read_char(&mut self) -> Result<Option<char>> {
        let c = self.peek_char()?;
        if c.is_some() {
            self.pos += 1;
        }
        Ok(c)
    }

    /// Read one CRLF-terminated line, without the terminator
    ///
    /// Returns `None` only when the stream is exhausted and nothing was read.
    /// A final line without a terminator is returned as-is; a dangling CR at
    /// end of stream is dropped.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.ensure_open()?;
        self.line.clear();
        self.saw_cr = false;
        let mut consumed = false;

        loop {
            if self.pos >= self.filled && self.fill()? == 0 {
                self.saw_cr = false;
                return Ok(consumed.then(|| self.take_line()));
            }
            consumed = true;

            let start = self.pos;
            let chunk = &self.buffer[start..self.filled];

            if self.saw_cr {
                self.saw_cr = false;
                if chunk[0] == b'\n' {
                    self.pos += 1;
                    return Ok(Some(self.take_line()));
                }
                self.line.push(b'\r');
            }

            let terminator = memchr::memchr_iter(b'\n', chunk)
                .find(|&i| i > 0 && chunk[i - 1] == b'\r');

            match terminator {
                Some(lf) => {
                    let content = &chunk[..lf - 1];
                    self.pos = start + lf + 1;
                    if self.line.is_empty() {
                        return Ok(Some(decode(content).into_owned()));
                    }
                    self.line.extend_from_slice(content);
                    return Ok(Some(self.take_line()));
                }
                None => {
                    let keep = match chunk.last() {
                        Some(b'\r') => {
                            self.saw_cr = true;
                            chunk.len() - 1
                        }
                        _ => chunk.len(),
                    };
                    self.line.extend_from_slice(&chunk[..keep]);
                    self.pos = self.filled;
                }
            }
        }
    }

    /// Read everything up to end of stream
    pub fn read_to_end(&mut self) -> Result<String> {
        self.ensure_open()?;
        let mut bytes = self.buffer[self.pos..self.filled].to_vec();
        self.pos = self.filled;
        while self.fill()? > 0 {
            bytes.extend_from_slice(&self.buffer[..self.filled]);
            self.pos = self.filled;
        }
        Ok(decode(&bytes).into_owned())
    }

    fn take_line(&mut self) -> String {
        let line = decode(&self.line).into_owned();
        if self.line.capacity() > MAX_RETAINED_LINE_CAPACITY {
            self.line = Vec::new();
        } else {
            self.line.clear();
        }
        line
    }
}
