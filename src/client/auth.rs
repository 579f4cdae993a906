//! NNTP authentication support (AUTHINFO USER/PASS)

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use crate::transport::Connection;
use crate::validation::validate_argument;
use tracing::debug;

impl<S: Connection> NntpClient<S> {
    /// Authenticate with username and password (AUTHINFO USER/PASS)
    ///
    /// Sends AUTHINFO USER; when the server asks for a password (381) sends
    /// AUTHINFO PASS and requires 281. Any other reply to either command,
    /// including an immediate 281 to AUTHINFO USER, is treated as a failure.
    ///
    /// Runs automatically during connection setup when the config carries
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::AuthFailed`] - Credentials rejected or unexpected reply
    /// - [`NntpError::InvalidArgument`] - Username or password holds a line
    ///   break; nothing is sent
    /// - [`NntpError::ConnectionClosed`] - Server closed the connection
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub fn authenticate_user(&mut self, username: &str, password: &str) -> Result<()> {
        validate_argument("Username", username)?;
        validate_argument("Password", password)?;
        debug!("Authenticating as {}", username);

        self.send_command(&commands::authinfo_user(username))?;
        let response = self.read_response()?;
        if response.code != codes::AUTH_CONTINUE {
            return Err(NntpError::AuthFailed(format!(
                "AUTHINFO USER not accepted: {}",
                response.raw
            )));
        }

        self.send_command(&commands::authinfo_pass(password))?;
        let response = self.read_response()?;
        if response.code != codes::AUTH_ACCEPTED {
            return Err(NntpError::AuthFailed(format!(
                "AUTHINFO PASS rejected: {}",
                response.raw
            )));
        }

        debug!("Authenticated as {}", username);
        Ok(())
    }
}
