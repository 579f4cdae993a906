//! RFC 977 Section 3.2.1 - GROUP command
//!
//! 211 selects the group and reports `count first last name`; 411 means the
//! group does not exist and leaves no group selected.

use crate::common::{session, session_in_group};
use nntp_client::{ArticleTarget, NntpError, SessionState};

#[test]
fn test_select_group() {
    let (mut client, wire) = session("211 1234 3000 4233 comp.lang.rust\r\n");

    let stats = client.select_group("comp.lang.rust").unwrap();
    assert_eq!(stats.group_name, "comp.lang.rust");
    assert_eq!(stats.estimated_count, 1234);
    assert_eq!(stats.first_article_id, 3000);
    assert_eq!(stats.last_article_id, 4233);

    assert_eq!(client.current_group(), Some(&stats));
    assert_eq!(client.state(), SessionState::GroupSelected);
    assert_eq!(wire.since_mark(), "GROUP comp.lang.rust\r\n");
}

#[test]
fn test_group_name_taken_from_request() {
    let (mut client, _wire) = session("211 5 1 5\r\n");
    let stats = client.select_group("alt.test").unwrap();
    assert_eq!(stats.group_name, "alt.test");
}

#[test]
fn test_no_such_group_blocks_article_commands() {
    let (mut client, wire) = session("411 no such news group\r\n");

    let result = client.select_group("alt.missing");
    assert!(matches!(result, Err(NntpError::NoGroupSelected)));
    assert!(client.current_group().is_none());
    assert_eq!(client.state(), SessionState::Connected);

    let result = client.retrieve_article_header(&ArticleTarget::Number(1));
    assert!(matches!(result, Err(NntpError::NoGroupSelected)));
    assert_eq!(wire.since_mark(), "GROUP alt.missing\r\n");
}

#[test]
fn test_failed_selection_clears_previous_group() {
    let (mut client, _wire) = session_in_group("411 no such news group\r\n", 1, 10);
    assert!(client.current_group().is_some());

    assert!(client.select_group("alt.missing").is_err());
    assert!(client.current_group().is_none());
}

#[test]
fn test_rejected_name_clears_previous_group() {
    let (mut client, wire) = session_in_group("", 1, 10);
    let result = client.select_group("alt test");
    assert!(matches!(result, Err(NntpError::InvalidArgument(_))));
    assert!(client.current_group().is_none());
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_selection_replaces_previous_group() {
    let (mut client, _wire) = session_in_group("211 2 7 8 alt.other\r\n", 1, 10);
    client.select_group("alt.other").unwrap();
    assert_eq!(client.current_group().unwrap().group_name, "alt.other");
    assert_eq!(client.current_group().unwrap().first_article_id, 7);
}

#[test]
fn test_invalid_name_is_not_sent() {
    let (mut client, wire) = session("");
    for name in ["", "alt test", "alt.test\r\nQUIT"] {
        let result = client.select_group(name);
        assert!(
            matches!(result, Err(NntpError::InvalidArgument(_))),
            "accepted {name:?}"
        );
    }
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_malformed_statistics() {
    let (mut client, _wire) = session("211 lots of articles\r\n");
    let result = client.select_group("alt.test");
    assert!(matches!(result, Err(NntpError::InvalidResponse(_))));
    assert!(client.current_group().is_none());
}

#[test]
fn test_unexpected_code() {
    let (mut client, _wire) = session("502 access restriction or permission denied\r\n");
    let err = client.select_group("alt.private").unwrap_err();
    assert_eq!(err.response_code(), Some(502));
    assert!(client.current_group().is_none());
}
