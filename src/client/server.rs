//! Server-level commands: HELP, MODE READER, SLAVE

use super::NntpClient;
use super::io::ResponseLines;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use crate::transport::Connection;
use tracing::debug;

impl<S: Connection> NntpClient<S> {
    /// Stream the server's help text (HELP, 100)
    pub fn retrieve_help(&mut self) -> Result<ResponseLines<'_, S>> {
        self.require_connection()?;
        self.issue(commands::help(), codes::HELP_TEXT_FOLLOWS)
    }

    /// Switch a transit-mode server into reader mode (MODE READER)
    ///
    /// A 200 reply allows posting and 201 disallows it. Any other reply
    /// except 502 leaves the posting flag as it was.
    ///
    /// # Errors
    ///
    /// - [`NntpError::Protocol`] - Server refused with 502
    pub fn send_mode_reader(&mut self) -> Result<()> {
        self.require_connection()?;
        self.send_command(commands::mode_reader())?;
        let response = self.read_response()?;

        match response.code {
            codes::READY_POSTING_ALLOWED => self.posting_allowed = true,
            codes::READY_NO_POSTING => self.posting_allowed = false,
            codes::ACCESS_DENIED => return Err(NntpError::protocol(response.code, response.raw)),
            code => debug!("MODE READER answered {}; posting flag unchanged", code),
        }
        Ok(())
    }

    /// Tell the server this client is a slave server (SLAVE, 202)
    pub fn send_slave(&mut self) -> Result<()> {
        self.require_connection()?;
        self.execute(commands::slave(), codes::SLAVE_STATUS_NOTED)?;
        Ok(())
    }
}
