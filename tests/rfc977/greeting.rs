//! RFC 977 Section 2.4.3 - Connection greeting
//!
//! 200 means posting is allowed, 201 that it is not. Anything else ends the
//! session before it starts.

use crate::common::{GREETING, HELP_BASIC, ScriptedStream, config, session};
use nntp_client::{NntpClient, NntpError, SessionState};

#[test]
fn test_posting_allowed_greeting() {
    let (client, wire) = session("");
    assert!(client.posting_allowed());
    assert!(client.is_connected());
    assert_eq!(client.state(), SessionState::Connected);
    assert!(client.current_group().is_none());
    assert_eq!(wire.sent(), "HELP\r\n");
}

#[test]
fn test_no_posting_greeting() {
    let (stream, _wire) = ScriptedStream::new(&format!("201 read only\r\n{HELP_BASIC}"));
    let client = NntpClient::from_stream(stream, &config()).unwrap();
    assert!(!client.posting_allowed());
}

#[test]
fn test_unexpected_greeting_fails() {
    let (stream, wire) = ScriptedStream::new("400 service discontinued\r\n");
    let result = NntpClient::from_stream(stream, &config());
    assert!(matches!(
        result,
        Err(NntpError::Protocol { code: 400, .. })
    ));
    // The half-built session still says goodbye when dropped
    assert_eq!(wire.sent(), "QUIT\r\n");
}

#[test]
fn test_missing_greeting() {
    let (stream, _wire) = ScriptedStream::new("");
    let result = NntpClient::from_stream(stream, &config());
    assert!(matches!(result, Err(NntpError::ConnectionClosed)));
}

#[test]
fn test_garbage_greeting() {
    let (stream, wire) = ScriptedStream::new("hello there\r\n");
    let result = NntpClient::from_stream(stream, &config());
    assert!(matches!(result, Err(NntpError::InvalidResponse(_))));
    // Out of sync; no QUIT
    assert_eq!(wire.sent(), "");
}

#[test]
fn test_host_and_port_come_from_config() {
    let (stream, _wire) = ScriptedStream::new(&format!("{GREETING}{HELP_BASIC}"));
    let config = nntp_client::ServerConfig::with_port("news.example.org", 1119);
    let client = NntpClient::from_stream(stream, &config).unwrap();
    assert_eq!(client.host(), "news.example.org");
    assert_eq!(client.port(), 1119);
}

#[test]
fn test_mode_reader_during_setup() {
    let transcript = format!("{GREETING}201 reader mode, no posting\r\n{HELP_BASIC}");
    let (stream, wire) = ScriptedStream::new(&transcript);
    let client = NntpClient::from_stream(stream, &config().mode_reader(true)).unwrap();

    assert!(!client.posting_allowed());
    assert_eq!(wire.sent(), "MODE READER\r\nHELP\r\n");
}

#[test]
fn test_help_text_is_kept() {
    let (client, _wire) = session("");
    let help = client.capabilities().help_text();
    assert!(help.iter().any(|line| line.contains("article")));
    assert!(client.capabilities().list().is_empty());
}
