//! NNTP error types

use crate::response::codes;
use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Read or write exceeded the configured connection timeout
    #[error("Connection timeout")]
    Timeout,

    /// Server sent data that could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server answered with a status code other than the one the command expects
    #[error("Unexpected NNTP response {code}: {response}")]
    Protocol {
        /// 3-digit code parsed from the status line
        code: u16,
        /// Raw status line as received from the server
        response: String,
    },

    /// Authentication was rejected
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An article or group-relative command was issued with no group selected
    #[error("No newsgroup selected")]
    NoGroupSelected,

    /// The server did not advertise the extension this operation needs
    #[error("Not supported by server: {0}")]
    NotImplemented(&'static str),

    /// Malformed argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unparsable protocol date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Operation on a closed reader/transport, or before any response was read
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,
}

impl NntpError {
    /// Status code carried by a [`NntpError::Protocol`] error
    #[must_use]
    pub fn response_code(&self) -> Option<u16> {
        match self {
            NntpError::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the server reported that the requested article number does not exist
    #[must_use]
    pub fn is_no_such_article(&self) -> bool {
        self.response_code() == Some(codes::NO_SUCH_ARTICLE_NUMBER)
    }

    /// Build a protocol error from a raw status line and its parsed code
    pub(crate) fn protocol(code: u16, response: impl Into<String>) -> Self {
        NntpError::Protocol {
            code,
            response: response.into(),
        }
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
