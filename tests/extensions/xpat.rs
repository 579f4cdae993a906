//! RFC 2980 Section 2.9 - XPAT

use crate::common::{extended_session, session};
use nntp_client::{ArticleRange, ArticleTarget, HeaderScope, NntpError};

#[test]
fn test_xpat_range() {
    let transcript = "221 Header follows\r\n12 Re: rust news\r\n19 rust release\r\n.\r\n";
    let (mut client, wire) = extended_session(transcript);

    let lines: Vec<String> = client
        .retrieve_specific_article_headers_using_pattern(
            "Subject",
            &ArticleRange::new(10, 20).into(),
            &["*rust*", "*Rust*"],
        )
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, ["12 Re: rust news", "19 rust release"]);
    assert_eq!(wire.since_mark(), "XPAT Subject 10-20 *rust* *Rust*\r\n");
}

#[test]
fn test_xpat_open_range_and_message_id() {
    let transcript = "221 Header follows\r\n.\r\n221 Header follows\r\n.\r\n";
    let (mut client, wire) = extended_session(transcript);

    let scope = HeaderScope::Range(ArticleRange::starting_at(100));
    assert_eq!(
        client
            .retrieve_specific_article_headers_using_pattern("From", &scope, &["*@example.com"])
            .unwrap()
            .count(),
        0
    );

    let scope = HeaderScope::from(ArticleTarget::message_id("<a@x>"));
    client
        .retrieve_specific_article_headers_using_pattern("From", &scope, &["*"])
        .unwrap()
        .drain()
        .unwrap();

    assert_eq!(
        wire.since_mark(),
        "XPAT From 100- *@example.com\r\nXPAT From <a@x> *\r\n"
    );
}

#[test]
fn test_xpat_argument_checks() {
    let (mut client, wire) = extended_session("");

    let current = HeaderScope::Article(ArticleTarget::Current);
    assert!(matches!(
        client.retrieve_specific_article_headers_using_pattern("Subject", &current, &["*"]),
        Err(NntpError::InvalidArgument(_))
    ));

    let range = HeaderScope::Range(ArticleRange::new(1, 2));
    assert!(matches!(
        client.retrieve_specific_article_headers_using_pattern("Subject", &range, &[]),
        Err(NntpError::InvalidArgument(_))
    ));

    let bad_id = HeaderScope::Article(ArticleTarget::message_id("nope"));
    assert!(matches!(
        client.retrieve_specific_article_headers_using_pattern("Subject", &bad_id, &["*"]),
        Err(NntpError::InvalidArgument(_))
    ));

    assert!(matches!(
        client.retrieve_specific_article_headers_using_pattern("Subject", &range, &["*\r\nPOST"]),
        Err(NntpError::InvalidArgument(_))
    ));

    assert_eq!(wire.since_mark(), "");
}

#[test]
fn test_xpat_not_supported() {
    let (mut client, wire) = session("");
    let range = HeaderScope::Range(ArticleRange::new(1, 2));
    let result = client.retrieve_specific_article_headers_using_pattern("Subject", &range, &["*"]);
    assert!(matches!(result, Err(NntpError::NotImplemented("XPAT"))));
    assert_eq!(wire.since_mark(), "");
}
