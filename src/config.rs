//! NNTP server configuration

use std::time::Duration;

/// Default NNTP port
pub const DEFAULT_PORT: u16 = 119;

/// NNTP server configuration
///
/// Contains all the information needed to open and negotiate a session.
///
/// # Example
///
/// ```
/// use nntp_client::{Credentials, ServerConfig};
/// use std::time::Duration;
///
/// let config = ServerConfig::new("news.example.com")
///     .timeout(Duration::from_secs(30))
///     .credentials(Credentials::new("user", "pass"))
///     .mode_reader(true);
/// assert_eq!(config.port, 119);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (119 unless the server says otherwise)
    #[cfg_attr(feature = "serde", serde(default = "default_port"))]
    pub port: u16,

    /// Connect, read and write timeout
    ///
    /// `None` blocks without limit. A read or write that exceeds the timeout
    /// fails with [`NntpError::Timeout`](crate::NntpError::Timeout).
    #[cfg_attr(feature = "serde", serde(default))]
    pub timeout: Option<Duration>,

    /// Authenticate with `AUTHINFO USER/PASS` right after the greeting
    #[cfg_attr(feature = "serde", serde(default))]
    pub credentials: Option<Credentials>,

    /// Send `MODE READER` before anything else
    ///
    /// Needed by servers that start in transit mode and refuse reader
    /// commands until told otherwise.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode_reader: bool,
}

/// `AUTHINFO` user name and password
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

#[cfg(feature = "serde")]
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    /// Configuration for `host` on the standard port
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_port(host, DEFAULT_PORT)
    }

    /// Configuration for `host` on an explicit port
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: None,
            credentials: None,
            mode_reader: false,
        }
    }

    /// Bound connect, read and write operations
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Authenticate during connection setup
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Send `MODE READER` during connection setup
    pub fn mode_reader(mut self, enabled: bool) -> Self {
        self.mode_reader = enabled;
        self
    }
}
