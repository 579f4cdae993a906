//! NNTP command builders and response parsers
//!
//! Builders return the bare command line; the transport appends CRLF.

pub mod article;
pub mod group;
pub mod hdr;
pub mod list;
pub mod over;

pub use article::*;
pub use group::*;
pub use hdr::*;
pub use list::*;
pub use over::*;

// Session management

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {username}")
}

/// Build AUTHINFO PASS command
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {password}")
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT"
}

/// Build HELP command
///
/// Response is multi-line, starting with 100.
pub fn help() -> &'static str {
    "HELP"
}

/// Build MODE READER command
pub fn mode_reader() -> &'static str {
    "MODE READER"
}

/// Build SLAVE command
///
/// Tells the server this client is a slave server. Response is 202.
pub fn slave() -> &'static str {
    "SLAVE"
}

/// Build POST command
///
/// Server responds with 340 if ready to accept the article.
pub fn post() -> &'static str {
    "POST"
}
