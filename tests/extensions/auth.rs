//! RFC 2980 Section 3.1.1 - AUTHINFO USER/PASS

use crate::common::{GREETING, HELP_BASIC, ScriptedStream, SharedLog, config, session};
use nntp_client::{Credentials, NntpClient, NntpError};

#[test]
fn test_authenticate() {
    let (mut client, wire) =
        session("381 more authentication information required\r\n281 authentication accepted\r\n");
    client.authenticate_user("alice", "s3cret").unwrap();
    assert_eq!(
        wire.since_mark(),
        "AUTHINFO USER alice\r\nAUTHINFO PASS s3cret\r\n"
    );
}

#[test]
fn test_wrong_password() {
    let (mut client, wire) = session("381 password required\r\n502 authentication rejected\r\n");
    let result = client.authenticate_user("alice", "wrong");
    assert!(matches!(result, Err(NntpError::AuthFailed(_))));
    assert!(wire.since_mark().ends_with("AUTHINFO PASS wrong\r\n"));
}

#[test]
fn test_user_rejected() {
    let (mut client, wire) = session("502 no such user\r\n");
    let result = client.authenticate_user("mallory", "x");
    assert!(matches!(result, Err(NntpError::AuthFailed(_))));
    // No password goes out after a refused user name
    assert_eq!(wire.since_mark(), "AUTHINFO USER mallory\r\n");
}

#[test]
fn test_immediate_acceptance_is_a_failure() {
    let (mut client, wire) = session("281 authentication accepted\r\n");
    let result = client.authenticate_user("alice", "s3cret");
    assert!(matches!(result, Err(NntpError::AuthFailed(_))));
    assert_eq!(wire.since_mark(), "AUTHINFO USER alice\r\n");
}

#[test]
fn test_credentials_from_config() {
    let transcript = format!("{GREETING}381 password\r\n281 ok\r\n{HELP_BASIC}");
    let (stream, wire) = ScriptedStream::new(&transcript);
    let config = config().credentials(Credentials::new("alice", "s3cret"));

    let client = NntpClient::from_stream(stream, &config).unwrap();
    assert!(client.is_connected());
    assert_eq!(
        wire.sent(),
        "AUTHINFO USER alice\r\nAUTHINFO PASS s3cret\r\nHELP\r\n"
    );
}

#[test]
fn test_rejected_credentials_fail_setup() {
    let transcript = format!("{GREETING}381 password\r\n481 rejected\r\n");
    let (stream, _wire) = ScriptedStream::new(&transcript);
    let config = config().credentials(Credentials::new("alice", "wrong"));
    assert!(matches!(
        NntpClient::from_stream(stream, &config),
        Err(NntpError::AuthFailed(_))
    ));
}

#[test]
fn test_mode_reader_precedes_authentication() {
    let transcript = format!("{GREETING}200 reader\r\n381 password\r\n281 ok\r\n{HELP_BASIC}");
    let (stream, wire) = ScriptedStream::new(&transcript);
    let config = config()
        .mode_reader(true)
        .credentials(Credentials::new("alice", "s3cret"));

    let _client = NntpClient::from_stream(stream, &config).unwrap();
    assert!(wire.sent().starts_with("MODE READER\r\nAUTHINFO USER alice\r\n"));
}

#[test]
fn test_log_records_exchange() {
    let transcript = format!("{GREETING}{HELP_BASIC}381 password\r\n281 ok\r\n");
    let (stream, _wire) = ScriptedStream::new(&transcript);
    let log = SharedLog::default();
    let mut client =
        NntpClient::from_stream_with_log(stream, &config(), Some(Box::new(log.clone()))).unwrap();

    client.authenticate_user("alice", "s3cret").unwrap();
    assert!(log.text().contains("> AUTHINFO USER alice\n< 381 password\n"));
    assert!(log.text().contains("< 281 ok\n"));
}

#[test]
fn test_credentials_with_line_breaks_are_not_sent() {
    let (mut client, wire) = session("");
    for (user, pass) in [("bob\r\nPOST", "pw"), ("bob", "pw\r\nQUIT"), ("bob\0", "pw")] {
        let result = client.authenticate_user(user, pass);
        assert!(
            matches!(result, Err(NntpError::InvalidArgument(_))),
            "accepted {user:?}/{pass:?}"
        );
    }
    assert_eq!(wire.since_mark(), "");
}
