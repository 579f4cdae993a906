//! Line-oriented transport over a duplex NNTP connection
//!
//! Couples a [`NntpStreamReader`] with a CRLF line writer on the same stream,
//! remembers the last command and status line, and optionally mirrors all
//! traffic to a caller-supplied [`ProtocolLog`].

use crate::error::{NntpError, Result};
use crate::reader::{self, NntpStreamReader};
use crate::response::NntpResponse;
use crate::validation::validate_argument;
use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use tracing::{debug, trace, warn};

/// Line terminator used on the wire
pub const CRLF: &str = "\r\n";

/// Diagnostic sink receiving a verbatim transcript of the session
///
/// Outbound text is prefixed `"> "`, status lines `"< "` and data lines
/// `">> "`. Write failures on the sink are ignored.
pub type ProtocolLog = Box<dyn Write + Send>;

/// A duplex byte stream an NNTP session can run over
pub trait Connection: Read + Write {
    /// Tear down the underlying connection
    ///
    /// Called once when the transport is closed, after the writer has been
    /// flushed.
    fn shutdown(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Connection for TcpStream {
    fn shutdown(&mut self) -> io::Result<()> {
        TcpStream::shutdown(self, Shutdown::Both)
    }
}

/// Reader/writer pair for one connection
pub struct Transport<S: Connection> {
    reader: NntpStreamReader<S>,
    log: Option<ProtocolLog>,
    last_command: Option<String>,
    last_response: Option<String>,
    /// A multi-line block has started and its terminator has not been read yet
    block_open: bool,
    /// A read failed mid-response; the stream position is unknown
    broken: bool,
    /// An unterminated fragment has been mirrored to the log
    log_partial: bool,
    /// Encoded bytes of the line being assembled
    outbound: Vec<u8>,
}

impl<S: Connection> Transport<S> {
    /// Wrap a connected stream
    pub fn new(stream: S) -> Self {
        Self {
            reader: NntpStreamReader::new(stream),
            log: None,
            last_command: None,
            last_response: None,
            block_open: false,
            broken: false,
            log_partial: false,
            outbound: Vec::new(),
        }
    }

    /// Install or remove the diagnostic sink
    pub fn set_log(&mut self, log: Option<ProtocolLog>) {
        self.log = log;
    }

    /// Last command line written with [`write_command`](Self::write_command)
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Last status line read with [`read_response_line`](Self::read_response_line)
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Numeric code of the last status line
    ///
    /// # Errors
    ///
    /// - [`NntpError::InvalidState`] - No response read yet, or it is shorter
    ///   than three characters
    /// - [`NntpError::InvalidResponse`] - The first three characters are not a number
    pub fn last_response_code(&self) -> Result<u16> {
        let response = self
            .last_response
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or(NntpError::InvalidState("no response has been read"))?;
        let code = response
            .get(..3)
            .ok_or(NntpError::InvalidState("last response is too short"))?;
        code.parse()
            .map_err(|_| NntpError::InvalidResponse(response.to_string()))
    }

    /// Whether a read failed part way through a response
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Whether the transport has been closed
    pub fn is_closed(&self) -> bool {
        self.reader.is_closed()
    }

    /// Send a command line
    ///
    /// Any multi-line block left unread by a previous command is drained
    /// first so the next status line read belongs to this command.
    ///
    /// A line holding CR, LF or NUL is refused with
    /// [`NntpError::InvalidArgument`] before anything is read or written.
    pub fn write_command(&mut self, line: &str) -> Result<()> {
        validate_argument("Command", line)?;
        self.drain_pending()?;
        self.send_command_line(line)
    }

    /// Send a final command without draining an abandoned block
    ///
    /// Used on teardown, where nothing after this command is read.
    pub fn write_final_command(&mut self, line: &str) -> Result<()> {
        validate_argument("Command", line)?;
        self.block_open = false;
        self.send_command_line(line)
    }

    fn send_command_line(&mut self, line: &str) -> Result<()> {
        trace!("Sending command: {}", redact(line));
        self.mirror(format_args!("> {line}\n"));
        self.last_command = Some(line.to_string());
        self.send(line)?;
        self.send(CRLF)?;
        self.flush()
    }

    /// Send a line of data followed by CRLF
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if std::mem::take(&mut self.log_partial) {
            self.mirror(format_args!("{line}\n"));
        } else {
            self.mirror(format_args!("> {line}\n"));
        }
        self.send(line)?;
        self.send(CRLF)?;
        self.flush()
    }

    /// Send a fragment without a terminator
    ///
    /// The fragment is held back and goes out with the next
    /// [`write_line`](Self::write_line), so a line built from pieces is one
    /// write on the stream.
    pub fn write(&mut self, fragment: &str) -> Result<()> {
        if self.log_partial {
            self.mirror(format_args!("{fragment}"));
        } else {
            self.mirror(format_args!("> {fragment}"));
            self.log_partial = true;
        }
        self.send(fragment)
    }

    /// Read a status line and remember it as the last response
    pub fn read_response_line(&mut self) -> Result<String> {
        let line = self.next_line()?;
        trace!("Received: {}", line);
        self.mirror(format_args!("< {line}\n"));
        self.last_response = Some(line.clone());
        Ok(line)
    }

    /// Read and parse a status line
    pub fn read_response(&mut self) -> Result<NntpResponse> {
        let line = self.read_response_line()?;
        NntpResponse::parse(&line)
    }

    /// Read one raw data line
    pub fn read_line(&mut self) -> Result<String> {
        let line = self.next_line()?;
        self.mirror(format_args!(">> {line}\n"));
        Ok(line)
    }

    /// Mark the start of a multi-line block
    pub(crate) fn open_block(&mut self) {
        self.block_open = true;
    }

    /// Mark the block terminator as consumed
    pub(crate) fn close_block(&mut self) {
        self.block_open = false;
    }

    /// Record a failed read in the middle of a block
    pub(crate) fn mark_broken(&mut self) {
        self.block_open = false;
        self.broken = true;
    }

    /// Whether a multi-line block is still being read
    pub fn has_pending_block(&self) -> bool {
        self.block_open
    }

    /// Read and discard the rest of an abandoned multi-line block
    ///
    /// Returns the number of data lines skipped.
    pub fn drain_pending(&mut self) -> Result<usize> {
        if !self.block_open {
            return Ok(0);
        }
        let mut skipped = 0;
        loop {
            match self.read_line() {
                Ok(line) if line == "." => break,
                Ok(_) => skipped += 1,
                Err(e) => {
                    self.mark_broken();
                    return Err(e);
                }
            }
        }
        self.block_open = false;
        debug!("Drained {} unread lines of an abandoned response", skipped);
        Ok(skipped)
    }

    /// Close writer and reader, then release the connection
    ///
    /// Errors at each step are logged and swallowed so every step runs.
    /// Calling this more than once is harmless.
    pub fn close(&mut self) {
        if let Ok(stream) = self.reader.get_mut() {
            if let Err(e) = stream.flush() {
                warn!("Failed to flush connection during close: {}", e);
            }
        }
        if let Some(mut stream) = self.reader.close() {
            if let Err(e) = stream.shutdown() {
                warn!("Failed to shut down connection: {}", e);
            }
        }
        if let Some(log) = self.log.as_mut() {
            let _ = log.flush();
        }
        self.outbound.clear();
        self.block_open = false;
    }

    fn next_line(&mut self) -> Result<String> {
        self.reader.read_line()?.ok_or(NntpError::ConnectionClosed)
    }

    fn send(&mut self, text: &str) -> Result<()> {
        self.reader.get_mut()?;
        self.outbound.extend_from_slice(&reader::encode(text));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let stream = self.reader.get_mut()?;
        let result = stream
            .write_all(&self.outbound)
            .and_then(|()| stream.flush())
            .map_err(reader::io_error);
        self.outbound.clear();
        result
    }

    fn mirror(&mut self, args: std::fmt::Arguments<'_>) {
        if let Some(log) = self.log.as_mut() {
            let _ = log.write_fmt(args);
        }
    }
}

/// Hide the password argument of `AUTHINFO PASS` in trace output
fn redact(line: &str) -> &str {
    if line
        .get(..13)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("AUTHINFO PASS"))
    {
        "AUTHINFO PASS ****"
    } else {
        line
    }
}
