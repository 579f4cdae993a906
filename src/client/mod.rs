//! Blocking NNTP session
//!
//! One [`NntpClient`] owns one connection. Every operation writes a command and
//! blocks until its status line arrives; multi-line replies are handed back as
//! lazy [`ResponseLines`] that read from the connection as they are consumed.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod metadata;
mod posting;
mod server;
mod state;

pub use articles::ArticleHeadersIter;
pub use io::{ResponseLines, dot_stuff, dot_unstuff};
pub use state::SessionState;

use crate::capabilities::Capabilities;
use crate::commands::NewsgroupStatistics;
use crate::transport::{Connection, ProtocolLog, Transport};
use std::net::TcpStream;

/// Synchronous NNTP client
///
/// Generic over the byte stream so sessions can run over anything that
/// implements [`Connection`]; [`connect`](NntpClient::connect) produces one
/// over TCP.
///
/// # Example
///
/// ```no_run
/// use nntp_client::{ArticleTarget, NntpClient, ServerConfig};
///
/// # fn example() -> nntp_client::Result<()> {
/// let config = ServerConfig::new("news.example.com");
/// let mut client = NntpClient::connect(&config)?;
///
/// let stats = client.select_group("comp.lang.rust")?;
/// println!("{} articles", stats.estimated_count);
///
/// let headers = client.retrieve_article_header(&ArticleTarget::Number(stats.first_article_id))?;
/// println!("{:?}", headers.first("Subject"));
///
/// for line in client.retrieve_article_body(&ArticleTarget::Current)? {
///     println!("{}", line?);
/// }
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient<S: Connection = TcpStream> {
    /// `None` once the session is closed
    transport: Option<Transport<S>>,
    host: String,
    port: u16,
    /// Currently selected newsgroup
    current_group: Option<NewsgroupStatistics>,
    posting_allowed: bool,
    capabilities: Capabilities,
}

impl<S: Connection> NntpClient<S> {
    /// Host name this session was opened for
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port this session was opened for
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the last greeting or MODE READER reply allowed posting
    pub fn posting_allowed(&self) -> bool {
        self.posting_allowed
    }

    /// Statistics of the selected group, if any
    pub fn current_group(&self) -> Option<&NewsgroupStatistics> {
        self.current_group.as_ref()
    }

    /// Extensions detected from the server's HELP text
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Whether the session still holds an open connection
    pub fn is_connected(&self) -> bool {
        self.transport.as_ref().is_some_and(|t| !t.is_closed())
    }

    /// Check if this connection is broken and should be discarded
    ///
    /// A connection breaks when a read fails part way through a response,
    /// leaving the stream position unknown.
    pub fn is_broken(&self) -> bool {
        self.transport.as_ref().is_some_and(Transport::is_broken)
    }

    /// Last command line sent
    pub fn last_command(&self) -> Option<&str> {
        self.transport.as_ref().and_then(Transport::last_command)
    }

    /// Last status line received
    pub fn last_response(&self) -> Option<&str> {
        self.transport.as_ref().and_then(Transport::last_response)
    }

    /// Code of the last status line received
    ///
    /// # Errors
    ///
    /// [`NntpError::InvalidState`](crate::NntpError::InvalidState) when the
    /// session is closed or no response has been read.
    pub fn last_response_code(&self) -> crate::Result<u16> {
        self.transport
            .as_ref()
            .ok_or(crate::NntpError::InvalidState("not connected"))?
            .last_response_code()
    }

    /// Mirror all traffic to `log`, or stop mirroring with `None`
    ///
    /// Has no effect on a closed session.
    pub fn set_protocol_log(&mut self, log: Option<ProtocolLog>) {
        if let Some(transport) = self.transport.as_mut() {
            transport.set_log(log);
        }
    }
}

impl<S: Connection> Drop for NntpClient<S> {
    fn drop(&mut self) {
        self.close();
    }
}
