//! Session state for NNTP client

use super::NntpClient;
use crate::transport::Connection;

/// Where a session is in its lifecycle
///
/// ```text
/// Disconnected <- Connected <-> GroupSelected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Closed; every operation fails
    Disconnected,
    /// Greeting received, no group selected
    Connected,
    /// A GROUP command succeeded; article commands are allowed
    GroupSelected,
}

impl<S: Connection> NntpClient<S> {
    /// Current session state
    pub fn state(&self) -> SessionState {
        if !self.is_connected() {
            SessionState::Disconnected
        } else if self.current_group.is_some() {
            SessionState::GroupSelected
        } else {
            SessionState::Connected
        }
    }
}
