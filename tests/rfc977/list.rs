//! RFC 977 Sections 3.6, 3.7 and 3.8 - LIST, NEWGROUPS and NEWNEWS
//!
//! Group list lines are `group last first p`; NEWNEWS answers with one
//! message-id per line.

use crate::common::session;
use chrono::NaiveDate;
use nntp_client::{NewsgroupHeader, TimeZoneOption};

const LIST: &str = "215 list of newsgroups follows\r\n\
alt.test 0000003000 0000002000 y\r\n\
comp.moderated 10 1 m\r\n\
misc.no-status 5 1\r\n\
.\r\n";

#[test]
fn test_list() {
    let (mut client, wire) = session(LIST);

    let groups: Vec<NewsgroupHeader> = client
        .retrieve_newsgroups()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(wire.since_mark(), "LIST\r\n");

    assert_eq!(groups.len(), 3);
    assert_eq!(
        groups[0],
        NewsgroupHeader {
            group_name: "alt.test".to_string(),
            first_article_id: 2000,
            last_article_id: 3000,
            status: 'y',
        }
    );
    assert!(groups[1].is_moderated());
    assert!(!groups[1].posting_allowed());
    assert_eq!(groups[2].status, 'y');
}

#[test]
fn test_list_malformed_line() {
    let (mut client, _wire) = session("215 list follows\r\nalt.test\r\nalt.ok 2 1 y\r\n.\r\n");
    let results: Vec<_> = client.retrieve_newsgroups().unwrap().collect();
    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap().group_name, "alt.ok");
}

#[test]
fn test_list_refused() {
    let (mut client, _wire) = session("502 access denied\r\n");
    let err = client.retrieve_newsgroups().err().unwrap();
    assert_eq!(err.response_code(), Some(502));
}

#[test]
fn test_newgroups() {
    let (mut client, wire) =
        session("231 list of new newsgroups follows\r\nalt.new 5 1 y\r\n.\r\n");
    let since = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap();

    let groups: Vec<_> = client
        .retrieve_new_newsgroups(&since, TimeZoneOption::Gmt, Some("<alt>"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_name, "alt.new");
    assert_eq!(wire.since_mark(), "NEWGROUPS 240102 150405 GMT <alt>\r\n");
}

#[test]
fn test_newnews() {
    let (mut client, wire) = session(
        "230 list of new articles by message-id follows\r\n<a@x>\r\n<b@x>\r\n.\r\n",
    );
    let since = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();

    let ids: Vec<String> = client
        .retrieve_new_news("comp.*", &since, TimeZoneOption::Local, None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, ["<a@x>", "<b@x>"]);
    assert_eq!(wire.since_mark(), "NEWNEWS comp.* 991231 230000\r\n");
}
