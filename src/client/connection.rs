//! Connection management for NNTP client
//!
//! This module handles TCP connection establishment, socket tuning,
//! greeting validation and session teardown.

use super::NntpClient;
use crate::capabilities::Capabilities;
use crate::commands;
use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::reader;
use crate::response::codes;
use crate::transport::{Connection, ProtocolLog, Transport};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use tracing::{debug, warn};

impl NntpClient<TcpStream> {
    /// Connect to an NNTP server over TCP
    ///
    /// Reads the greeting, then runs the setup the config asks for
    /// (`MODE READER`, `AUTHINFO`) and finally probes `HELP` for extensions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::InvalidArgument`] - Empty host name
    /// - [`NntpError::Io`] - Name resolution or TCP connection fails
    /// - [`NntpError::Timeout`] - Connection or greeting exceeded the configured timeout
    /// - [`NntpError::Protocol`] - Greeting is neither 200 nor 201
    /// - [`NntpError::AuthFailed`] - Configured credentials were rejected
    pub fn connect(config: &ServerConfig) -> Result<Self> {
        Self::connect_with_log(config, None)
    }

    /// Like [`connect`](Self::connect), mirroring all traffic to `log` from the
    /// greeting on
    pub fn connect_with_log(config: &ServerConfig, log: Option<ProtocolLog>) -> Result<Self> {
        if config.host.is_empty() {
            return Err(NntpError::InvalidArgument(
                "Host name must not be empty".to_string(),
            ));
        }

        debug!("Connecting to NNTP server {}:{}", config.host, config.port);
        let stream = open_socket(config)?;
        Self::establish(stream, config, log)
    }
}

/// Resolve the configured host and connect to the first address that answers
fn open_socket(config: &ServerConfig) -> Result<TcpStream> {
    let addrs: Vec<SocketAddr> = (config.host.as_str(), config.port)
        .to_socket_addrs()
        .map_err(|e| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Failed to resolve address: {e}"),
            ))
        })?
        .collect();

    let mut last_error = None;
    for addr in addrs {
        match connect_socket(addr, config) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!("Connection to {} failed: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        NntpError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "No address resolved",
        ))
    }))
}

fn connect_socket(addr: SocketAddr, config: &ServerConfig) -> Result<TcpStream> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .map_err(NntpError::Io)?;

    // Request/response traffic; don't let Nagle hold back short command lines
    if let Err(e) = socket.set_nodelay(true) {
        warn!("Failed to set TCP_NODELAY: {}", e);
    }

    let target = SockAddr::from(addr);
    match config.timeout {
        Some(timeout) => socket.connect_timeout(&target, timeout),
        None => socket.connect(&target),
    }
    .map_err(reader::io_error)?;

    socket
        .set_read_timeout(config.timeout)
        .map_err(NntpError::Io)?;
    socket
        .set_write_timeout(config.timeout)
        .map_err(NntpError::Io)?;

    Ok(socket.into())
}

impl<S: Connection> NntpClient<S> {
    /// Run a session over an already connected stream
    ///
    /// Performs the same greeting and negotiation as
    /// [`connect`](NntpClient::connect). `config` supplies the host and port
    /// reported by the session and the optional setup steps.
    pub fn from_stream(stream: S, config: &ServerConfig) -> Result<Self> {
        Self::establish(stream, config, None)
    }

    /// Like [`from_stream`](Self::from_stream), mirroring all traffic to `log`
    pub fn from_stream_with_log(
        stream: S,
        config: &ServerConfig,
        log: Option<ProtocolLog>,
    ) -> Result<Self> {
        Self::establish(stream, config, log)
    }

    fn establish(stream: S, config: &ServerConfig, log: Option<ProtocolLog>) -> Result<Self> {
        let mut transport = Transport::new(stream);
        transport.set_log(log);

        let mut client = Self {
            transport: Some(transport),
            host: config.host.clone(),
            port: config.port,
            current_group: None,
            posting_allowed: false,
            capabilities: Capabilities::new(),
        };

        client.read_greeting()?;

        if config.mode_reader {
            client.send_mode_reader()?;
        }

        if let Some(credentials) = &config.credentials {
            client.authenticate_user(&credentials.username, &credentials.password)?;
        }

        client.probe_capabilities()?;
        Ok(client)
    }

    fn read_greeting(&mut self) -> Result<()> {
        let greeting = self.read_response()?;
        debug!("Server greeting: {} {}", greeting.code, greeting.message);

        self.posting_allowed = match greeting.code {
            codes::READY_POSTING_ALLOWED => true,
            codes::READY_NO_POSTING => false,
            code => return Err(NntpError::protocol(code, greeting.raw)),
        };
        Ok(())
    }

    /// Detect extensions from the HELP text
    ///
    /// A server that refuses HELP simply gets no extensions.
    fn probe_capabilities(&mut self) -> Result<()> {
        let help = match self.issue(commands::help(), codes::HELP_TEXT_FOLLOWS) {
            Ok(lines) => lines.collect::<Result<Vec<_>>>()?,
            Err(NntpError::Protocol { code, .. }) => {
                warn!("HELP refused with {}; assuming no extensions", code);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        self.capabilities = Capabilities::from_help(help);
        debug!("Detected extensions: {:?}", self.capabilities.list());
        Ok(())
    }

    /// Send QUIT and release the connection
    ///
    /// Does not wait for the server's reply, and does not read the rest of
    /// an abandoned multi-line reply first. Failures during teardown are
    /// logged and swallowed. Calling this on a closed session does nothing.
    pub fn close(&mut self) {
        let Some(mut transport) = self.transport.take() else {
            return;
        };

        if !transport.is_closed() && !transport.is_broken() {
            if let Err(e) = transport.write_final_command(commands::quit()) {
                warn!("Failed to send QUIT: {}", e);
            }
        }
        transport.close();
        self.current_group = None;
        debug!("Disconnected from {}:{}", self.host, self.port);
    }
}
