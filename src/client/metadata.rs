//! Header extension commands (XHDR, XPAT)
//!
//! Both fetch one header field across articles without downloading them.

use crate::capabilities::Extension;
use crate::commands::hdr::is_missing_header;
use crate::commands::{self, ArticleRange, ArticleTarget, HeaderScope};
use crate::error::Result;
use crate::response::codes;
use crate::transport::Connection;
use crate::validation::validate_argument;

use super::NntpClient;
use super::io::ResponseLines;

impl<S: Connection> NntpClient<S> {
    /// One header field of one article (XHDR, 221)
    ///
    /// Lines are returned as the server sends them, typically
    /// `number value`. Bare `(none)` lines are dropped.
    ///
    /// # Errors
    ///
    /// - [`NntpError::NotImplemented`](crate::NntpError::NotImplemented) - Server lacks XHDR
    /// - [`NntpError::InvalidArgument`](crate::NntpError::InvalidArgument) - Malformed
    ///   message-id, or a header name with a line break
    /// - [`NntpError::NoGroupSelected`](crate::NntpError::NoGroupSelected) - No group selected
    pub fn retrieve_specific_article_header(
        &mut self,
        header: &str,
        target: &ArticleTarget,
    ) -> Result<impl Iterator<Item = Result<String>> + use<'_, S>> {
        self.xhdr(header, &HeaderScope::Article(target.clone()))
    }

    /// One header field for every article in `first-last` (XHDR, 221)
    pub fn retrieve_specific_article_headers(
        &mut self,
        header: &str,
        first: u64,
        last: u64,
    ) -> Result<impl Iterator<Item = Result<String>> + use<'_, S>> {
        self.xhdr(header, &HeaderScope::Range(ArticleRange::new(first, last)))
    }

    fn xhdr(
        &mut self,
        header: &str,
        scope: &HeaderScope,
    ) -> Result<impl Iterator<Item = Result<String>> + use<'_, S>> {
        self.require_extension(Extension::Xhdr)?;
        validate_argument("Header name", header)?;
        scope.validate()?;
        self.require_group()?;

        let lines = self.issue(&commands::xhdr(header, scope), codes::HEAD_FOLLOWS)?;
        Ok(lines.filter(|line| !matches!(line, Ok(l) if is_missing_header(l))))
    }

    /// Header lines matching any of `patterns` (XPAT, 221)
    ///
    /// `scope` is a single article or a range; a range without an upper
    /// bound covers everything from its first article on.
    ///
    /// # Errors
    ///
    /// - [`NntpError::NotImplemented`](crate::NntpError::NotImplemented) - Server lacks XPAT
    /// - [`NntpError::InvalidArgument`](crate::NntpError::InvalidArgument) - Malformed
    ///   message-id, current-article scope, or no patterns
    pub fn retrieve_specific_article_headers_using_pattern(
        &mut self,
        header: &str,
        scope: &HeaderScope,
        patterns: &[&str],
    ) -> Result<ResponseLines<'_, S>> {
        self.require_extension(Extension::Xpat)?;
        scope.validate()?;
        let command = commands::xpat(header, scope, patterns)?;
        self.require_connection()?;
        self.issue(&command, codes::HEAD_FOLLOWS)
    }
}
