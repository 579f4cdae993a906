//! RFC 977 Sections 3.5 and 3.8 - LAST and NEXT commands
//!
//! Both move the current article pointer and answer
//! `223 n <message-id>` like STAT.

use crate::common::{session, session_in_group};
use nntp_client::{CursorDirection, NntpError};

#[test]
fn test_next() {
    let (mut client, wire) = session_in_group(
        "223 3001 <b@example.com> article retrieved - request text separately\r\n",
        3000,
        3010,
    );

    let ids = client.advance_cursor(CursorDirection::Next).unwrap();
    assert_eq!(ids.article_id, 3001);
    assert_eq!(ids.message_id, "<b@example.com>");
    assert_eq!(wire.since_mark(), "NEXT\r\n");
}

#[test]
fn test_last() {
    let (mut client, wire) = session_in_group("223 2999 <a@example.com>\r\n", 2990, 3000);
    let ids = client.advance_cursor(CursorDirection::Last).unwrap();
    assert_eq!(ids.article_id, 2999);
    assert_eq!(wire.since_mark(), "LAST\r\n");
}

#[test]
fn test_no_next_article() {
    let (mut client, _wire) =
        session_in_group("421 no next article in this group\r\n", 1, 1);
    let err = client.advance_cursor(CursorDirection::Next).unwrap_err();
    assert_eq!(err.response_code(), Some(421));
    // The group stays selected
    assert!(client.current_group().is_some());
}

#[test]
fn test_requires_group() {
    let (mut client, wire) = session("");
    let result = client.advance_cursor(CursorDirection::Next);
    assert!(matches!(result, Err(NntpError::NoGroupSelected)));
    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_direction_from_str() {
    assert_eq!("next".parse::<CursorDirection>().unwrap(), CursorDirection::Next);
    assert_eq!("LAST".parse::<CursorDirection>().unwrap(), CursorDirection::Last);
    assert!(matches!(
        "previous".parse::<CursorDirection>(),
        Err(NntpError::InvalidArgument(_))
    ));
}
