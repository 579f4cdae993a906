//! Article retrieval commands (ARTICLE, HEAD, BODY) and ranged header retrieval

use super::NntpClient;
use super::io::ResponseLines;
use crate::article::{Article, ArticleHeaders, BodySink, HeaderSink};
use crate::capabilities::Extension;
use crate::commands::{self, ArticleRange, ArticleTarget, parse_overview_line};
use crate::error::Result;
use crate::response::codes;
use crate::transport::Connection;
use std::iter::FusedIterator;
use tracing::trace;

impl<S: Connection> NntpClient<S> {
    /// Retrieve an article's headers with HEAD
    ///
    /// Requires a selected group, even for message-id lookups.
    ///
    /// # Errors
    ///
    /// - [`NntpError::InvalidArgument`](crate::NntpError::InvalidArgument) - Malformed message-id
    /// - [`NntpError::NoGroupSelected`](crate::NntpError::NoGroupSelected) - No group selected
    /// - [`NntpError::Protocol`](crate::NntpError::Protocol) - Anything but 221, e.g. 423 or 430
    /// - [`NntpError::InvalidResponse`](crate::NntpError::InvalidResponse) - Malformed header line
    pub fn retrieve_article_header(&mut self, target: &ArticleTarget) -> Result<ArticleHeaders> {
        target.validate()?;
        self.require_group()?;

        let mut headers = ArticleHeaders::new();
        let mut lines = self.issue(&commands::head(target), codes::HEAD_FOLLOWS)?;
        for line in lines.by_ref() {
            let line = line?;
            if line.is_empty() {
                break;
            }
            headers.add_header_line(&line)?;
        }
        lines.drain()?;
        Ok(headers)
    }

    /// Retrieve headers for every article in `[first, last)`
    ///
    /// With XOVER support this is a single `XOVER first-last` request whose
    /// lines are decoded with [`parse_overview_line`]. Otherwise each number
    /// is fetched with HEAD, and numbers the server reports as missing (423)
    /// are skipped.
    ///
    /// The group check happens up front; everything else happens as the
    /// iterator is consumed.
    pub fn retrieve_article_headers(
        &mut self,
        first: u64,
        last: u64,
    ) -> Result<ArticleHeadersIter<'_, S>> {
        self.require_group()?;

        if self.capabilities.supports(Extension::Xover) {
            let range = ArticleRange::new(first, last);
            let lines = self.issue(&commands::xover(&range), codes::OVERVIEW_INFO_FOLLOWS)?;
            Ok(ArticleHeadersIter::Overview(lines))
        } else {
            Ok(ArticleHeadersIter::PerArticle {
                client: self,
                next: first,
                last,
            })
        }
    }

    /// [`retrieve_article_headers`](Self::retrieve_article_headers) over the
    /// selected group's advertised range
    pub fn retrieve_group_article_headers(&mut self) -> Result<ArticleHeadersIter<'_, S>> {
        let group = self.require_group()?;
        let (first, last) = (group.first_article_id, group.last_article_id);
        self.retrieve_article_headers(first, last)
    }

    /// Stream an article body with BODY
    ///
    /// Lines are dot-unstuffed but otherwise verbatim.
    pub fn retrieve_article_body(&mut self, target: &ArticleTarget) -> Result<ResponseLines<'_, S>> {
        target.validate()?;
        self.require_group()?;
        self.issue(&commands::body(target), codes::BODY_FOLLOWS)
    }

    /// Retrieve a whole article with ARTICLE in a single pass
    ///
    /// Lines up to the first blank line go to `headers`; everything after it
    /// goes to `body`. The blank separator itself goes to neither.
    pub fn retrieve_article(
        &mut self,
        target: &ArticleTarget,
        headers: &mut impl HeaderSink,
        body: &mut impl BodySink,
    ) -> Result<()> {
        target.validate()?;
        self.require_group()?;

        let mut in_headers = true;
        for line in self.issue(&commands::article(target), codes::ARTICLE_FOLLOWS)? {
            let line = line?;
            if in_headers {
                if line.is_empty() {
                    in_headers = false;
                } else {
                    headers.add_header_line(&line)?;
                }
            } else {
                body.add_body_line(line);
            }
        }
        Ok(())
    }

    /// Retrieve a whole article into memory
    pub fn fetch_article(&mut self, target: &ArticleTarget) -> Result<Article> {
        let mut article = Article::default();
        self.retrieve_article(target, &mut article.headers, &mut article.body)?;
        Ok(article)
    }

    /// Raw XOVER lines for `first-last`
    ///
    /// Yields nothing, without contacting the server, when XOVER is not
    /// supported.
    pub fn retrieve_overview_lines(
        &mut self,
        first: u64,
        last: u64,
    ) -> Result<impl Iterator<Item = Result<String>> + '_> {
        self.require_group()?;

        let lines = if self.capabilities.supports(Extension::Xover) {
            let range = ArticleRange::new(first, last);
            Some(self.issue(&commands::xover(&range), codes::OVERVIEW_INFO_FOLLOWS)?)
        } else {
            trace!("XOVER not supported; no overview lines");
            None
        };
        Ok(lines.into_iter().flatten())
    }
}

/// Lazy sequence of article headers over a range
///
/// Produced by [`NntpClient::retrieve_article_headers`].
pub enum ArticleHeadersIter<'a, S: Connection> {
    /// Decoding one XOVER response
    Overview(ResponseLines<'a, S>),
    /// One HEAD request per article number
    PerArticle {
        client: &'a mut NntpClient<S>,
        next: u64,
        last: u64,
    },
}

impl<S: Connection> Iterator for ArticleHeadersIter<'_, S> {
    type Item = Result<ArticleHeaders>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Overview(lines) => lines
                .next()
                .map(|line| line.and_then(|l| parse_overview_line(&l))),
            Self::PerArticle { client, next, last } => {
                while *next < *last {
                    let id = *next;
                    *next += 1;
                    match client.retrieve_article_header(&ArticleTarget::Number(id)) {
                        Ok(headers) => return Some(Ok(headers)),
                        Err(e) if e.is_no_such_article() => {
                            trace!("Article {} not available, skipping", id);
                        }
                        Err(e) => {
                            *next = *last;
                            return Some(Err(e));
                        }
                    }
                }
                None
            }
        }
    }
}

impl<S: Connection> FusedIterator for ArticleHeadersIter<'_, S> {}
