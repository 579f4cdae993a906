//! RFC 977 Section 3.1 - ARTICLE command
//!
//! Headers and body arrive in one block separated by the first blank line.

use crate::common::{session, session_in_group};
use nntp_client::{ArticleHeaders, ArticleTarget, BodyFn, NntpError};

const ARTICLE: &str = "220 3000 <article@example.com> article\r\n\
From: bob@example.com\r\n\
Newsgroups: alt.test\r\n\
Subject: greetings\r\n\
Date: Tue, 03 Jun 2008 11:05:30 -0500\r\n\
Message-ID: <article@example.com>\r\n\
\r\n\
Hello.\r\n\
\r\n\
..signature\r\n\
.\r\n";

#[test]
fn test_article_into_sinks() {
    let (mut client, wire) = session_in_group(ARTICLE, 3000, 3000);

    let mut headers = ArticleHeaders::new();
    let mut body = Vec::new();
    client
        .retrieve_article(&ArticleTarget::Number(3000), &mut headers, &mut body)
        .unwrap();

    assert_eq!(wire.since_mark(), "ARTICLE 3000\r\n");
    assert_eq!(headers.len(), 5);
    assert_eq!(headers.first("Subject"), Some("greetings"));
    // Blank lines inside the body are kept; only the separator is dropped
    assert_eq!(body, ["Hello.", "", ".signature"]);
}

#[test]
fn test_article_with_closure_sink() {
    let (mut client, _wire) = session_in_group(ARTICLE, 3000, 3000);

    let mut lengths = Vec::new();
    let mut headers = ArticleHeaders::new();
    client
        .retrieve_article(
            &ArticleTarget::Current,
            &mut headers,
            &mut BodyFn(|line: String| lengths.push(line.len())),
        )
        .unwrap();
    assert_eq!(lengths, [6, 0, 10]);
}

#[test]
fn test_fetch_article() {
    let (mut client, _wire) = session_in_group(ARTICLE, 3000, 3000);

    let article = client
        .fetch_article(&ArticleTarget::message_id("<article@example.com>"))
        .unwrap();
    assert_eq!(article.message_id(), Some("<article@example.com>"));
    assert_eq!(article.body.len(), 3);

    let date = article.date().unwrap();
    assert_eq!(date.offset().local_minus_utc(), -5 * 3600);
    assert_eq!(date.utc().to_rfc3339(), "2008-06-03T16:05:30+00:00");
}

#[test]
fn test_article_without_body() {
    let transcript = "220 1 <a@x> article\r\nSubject: empty\r\n\r\n.\r\n";
    let (mut client, _wire) = session_in_group(transcript, 1, 1);
    let article = client.fetch_article(&ArticleTarget::Number(1)).unwrap();
    assert_eq!(article.headers.first("Subject"), Some("empty"));
    assert!(article.body.is_empty());
    assert!(article.date().is_none());
}

#[test]
fn test_article_not_found() {
    let (mut client, _wire) =
        session_in_group("423 no such article number in this group\r\n", 1, 10);
    let err = client.fetch_article(&ArticleTarget::Number(9)).unwrap_err();
    assert!(err.is_no_such_article());
}

#[test]
fn test_requires_group() {
    let (mut client, wire) = session("");
    let result = client.fetch_article(&ArticleTarget::message_id("<a@x>"));
    assert!(matches!(result, Err(NntpError::NoGroupSelected)));
    assert_eq!(wire.since_mark(), "");
}
