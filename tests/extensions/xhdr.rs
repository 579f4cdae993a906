//! RFC 2980 Section 2.6 - XHDR

use crate::common::{extended_session, extended_session_in_group, session_in_group};
use nntp_client::{ArticleTarget, NntpError};

#[test]
fn test_xhdr_range() {
    let transcript = "221 Subject fields follow\r\n\
3000 first subject\r\n\
3001 (none)\r\n\
(none)\r\n\
3002 third subject\r\n\
.\r\n";
    let (mut client, wire) = extended_session_in_group(transcript, 3000, 3002);

    let lines: Vec<String> = client
        .retrieve_specific_article_headers("Subject", 3000, 3002)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(wire.since_mark(), "XHDR Subject 3000-3002\r\n");
    // Only lines that start with the marker are dropped
    assert_eq!(lines, ["3000 first subject", "3001 (none)", "3002 third subject"]);
}

#[test]
fn test_xhdr_single_article() {
    let transcript = "221 header follows\r\n<a@x> alice@example.com\r\n.\r\n";
    let (mut client, wire) = extended_session_in_group(transcript, 1, 10);
    let lines: Vec<String> = client
        .retrieve_specific_article_header("From", &ArticleTarget::message_id("<a@x>"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, ["<a@x> alice@example.com"]);
    assert_eq!(wire.since_mark(), "XHDR From <a@x>\r\n");
}

#[test]
fn test_xhdr_current_article() {
    let transcript = "221 header follows\r\n5 subject\r\n.\r\n";
    let (mut client, wire) = extended_session_in_group(transcript, 1, 10);
    let count = client
        .retrieve_specific_article_header("Subject", &ArticleTarget::Current)
        .unwrap()
        .count();
    assert_eq!(count, 1);
    assert_eq!(wire.since_mark(), "XHDR Subject\r\n");
}

#[test]
fn test_xhdr_not_supported() {
    let (mut client, wire) = session_in_group("", 1, 10);
    let result = client.retrieve_specific_article_headers("Subject", 1, 10);
    assert!(matches!(result, Err(NntpError::NotImplemented("XHDR"))));
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_xhdr_requires_group() {
    let (mut client, wire) = extended_session("");
    let result = client.retrieve_specific_article_header("From", &ArticleTarget::message_id("<a@x>"));
    assert!(matches!(result, Err(NntpError::NoGroupSelected)));
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_xhdr_bad_message_id() {
    let (mut client, wire) = extended_session_in_group("", 1, 10);
    let result = client.retrieve_specific_article_header("From", &ArticleTarget::message_id("a@x"));
    assert!(matches!(result, Err(NntpError::InvalidArgument(_))));
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_xhdr_lines_outlive_arguments() {
    let transcript = "221 header follows\r\n3 hello\r\n.\r\n";
    let (mut client, _wire) = extended_session_in_group(transcript, 1, 10);
    let mut lines = client
        .retrieve_specific_article_header(&format!("Sub{}", "ject"), &ArticleTarget::Number(3))
        .unwrap();
    assert_eq!(lines.next().unwrap().unwrap(), "3 hello");
    assert!(lines.next().is_none());
}

#[test]
fn test_xhdr_header_with_line_break() {
    let (mut client, wire) = extended_session_in_group("", 1, 10);
    let result = client.retrieve_specific_article_headers("Subject\r\nQUIT", 1, 10);
    assert!(matches!(result, Err(NntpError::InvalidArgument(_))));
    assert_eq!(wire.since_mark(), "");
}
