//! Command/response engine
//!
//! Every operation goes through one of two primitives:
//! - [`execute`](NntpClient::execute) sends a command and checks the status code
//! - [`issue`](NntpClient::issue) does the same and then hands out the
//!   multi-line payload as a lazy [`ResponseLines`]

use super::NntpClient;
use crate::commands::NewsgroupStatistics;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use crate::transport::{Connection, Transport};
use std::borrow::Cow;
use std::iter::FusedIterator;
use tracing::trace;

/// Strip NNTP dot-stuffing from a data line (leading ".." becomes ".")
pub fn dot_unstuff(line: &str) -> &str {
    if line.starts_with("..") {
        &line[1..]
    } else {
        line
    }
}

/// Apply NNTP dot-stuffing to an outgoing data line
pub fn dot_stuff(line: &str) -> Cow<'_, str> {
    if line.starts_with('.') {
        Cow::Owned(format!(".{line}"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Lazy view of a multi-line response body
///
/// Each call to `next` reads one line from the connection. The terminating
/// `"."` line ends the iteration and is not yielded; lines starting with `".."`
/// are yielded with one leading dot removed.
///
/// Dropping the iterator before the end is allowed: the unread remainder is
/// discarded before the session sends its next command.
pub struct ResponseLines<'a, S: Connection> {
    transport: &'a mut Transport<S>,
    done: bool,
}

impl<'a, S: Connection> ResponseLines<'a, S> {
    fn new(transport: &'a mut Transport<S>) -> Self {
        transport.open_block();
        Self {
            transport,
            done: false,
        }
    }

    /// Read and discard the rest of the block
    ///
    /// Returns the number of lines skipped.
    pub fn drain(mut self) -> Result<usize> {
        let mut skipped = 0;
        for line in self.by_ref() {
            line?;
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Whether the terminator has been read
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<S: Connection> Iterator for ResponseLines<'_, S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.transport.read_line() {
            Ok(line) if line == "." => {
                self.transport.close_block();
                self.done = true;
                None
            }
            Ok(mut line) => {
                if line.starts_with("..") {
                    line.remove(0);
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.transport.mark_broken();
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: Connection> FusedIterator for ResponseLines<'_, S> {}

impl<S: Connection> NntpClient<S> {
    /// The open transport
    pub(super) fn transport(&mut self) -> Result<&mut Transport<S>> {
        self.transport
            .as_mut()
            .ok_or(NntpError::InvalidState("not connected"))
    }

    /// Fail unless the session holds an open connection
    pub(super) fn require_connection(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(NntpError::InvalidState("not connected"))
        }
    }

    /// The selected group, or [`NntpError::NoGroupSelected`]
    pub(super) fn require_group(&self) -> Result<&NewsgroupStatistics> {
        self.require_connection()?;
        self.current_group.as_ref().ok_or(NntpError::NoGroupSelected)
    }

    /// Send a command line
    pub(super) fn send_command(&mut self, command: &str) -> Result<()> {
        self.transport()?.write_command(command)
    }

    /// Read a single status line
    pub(super) fn read_response(&mut self) -> Result<NntpResponse> {
        let transport = self.transport()?;
        let result = transport.read_response();
        // Garbage where a status line belongs means we lost sync
        if let Err(NntpError::InvalidResponse(_)) = &result {
            transport.mark_broken();
        }
        result
    }

    /// Send a command and require `expected` as the status code
    pub(super) fn execute(&mut self, command: &str, expected: u16) -> Result<NntpResponse> {
        self.send_command(command)?;
        let response = self.read_response()?;
        trace!("{} -> {}", command.split(' ').next().unwrap_or(command), response.code);
        response.expect(expected)
    }

    /// Send a command, require `expected`, and stream the multi-line payload
    pub(super) fn issue(&mut self, command: &str, expected: u16) -> Result<ResponseLines<'_, S>> {
        self.execute(command, expected)?;
        Ok(ResponseLines::new(self.transport()?))
    }
}
