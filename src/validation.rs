//! Argument validation for command builders
//!
//! Checks run before any bytes are written, so a rejected argument never
//! reaches the server.

use crate::{NntpError, Result};

/// Validates a message-id argument
///
/// A message-id must be non-empty, enclosed in angle brackets, and contain at
/// least one character between them. Whitespace and control characters are
/// rejected since the id is written as a single command argument.
///
/// # Examples
///
/// ```
/// use nntp_client::validation::validate_message_id;
///
/// assert!(validate_message_id("<abc@example.com>").is_ok());
/// assert!(validate_message_id("abc@example.com").is_err());
/// assert!(validate_message_id("<>").is_err());
/// assert!(validate_message_id("<a>\r\nQUIT").is_err());
/// ```
pub fn validate_message_id(message_id: &str) -> Result<()> {
    if message_id.is_empty() {
        return Err(NntpError::InvalidArgument(
            "Message-ID must not be empty".to_string(),
        ));
    }

    if !message_id.starts_with('<') || !message_id.ends_with('>') {
        return Err(NntpError::InvalidArgument(format!(
            "Message-ID must be enclosed in angle brackets: {message_id}"
        )));
    }

    if message_id.len() < 3 {
        return Err(NntpError::InvalidArgument(format!(
            "Message-ID too short: {message_id}"
        )));
    }

    if message_id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(NntpError::InvalidArgument(format!(
            "Message-ID contains whitespace or control characters: {message_id:?}"
        )));
    }

    Ok(())
}

/// Validates a free-form command argument (username, password, header
/// name, pattern, wildmat)
///
/// CR, LF and NUL would end the command line early, so they are refused.
/// `what` names the argument in the error message.
pub fn validate_argument(what: &str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n', '\0']) {
        return Err(NntpError::InvalidArgument(format!(
            "{what} contains a line break or NUL: {value:?}"
        )));
    }
    Ok(())
}

/// Validates a newsgroup name argument
///
/// Names are sent verbatim after the command keyword, so they must be
/// non-empty and free of whitespace and control characters.
pub fn validate_newsgroup_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NntpError::InvalidArgument(
            "Newsgroup name must not be empty".to_string(),
        ));
    }

    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(NntpError::InvalidArgument(format!(
            "Newsgroup name contains whitespace or control characters: {name:?}"
        )));
    }

    Ok(())
}
