//! Group listing commands: LIST, LIST ACTIVE, NEWGROUPS, NEWNEWS, XGTITLE

use super::NntpClient;
use super::io::ResponseLines;
use crate::capabilities::Extension;
use crate::commands::{self, NewsgroupHeader, TimeZoneOption};
use crate::error::{NntpError, Result};
use crate::response::codes;
use crate::transport::Connection;
use crate::validation::validate_argument;
use chrono::NaiveDateTime;

impl<S: Connection> NntpClient<S> {
    /// List all newsgroups
    ///
    /// Uses `LIST ACTIVE` when the server advertises it, plain `LIST`
    /// otherwise. Each line is parsed as it is read.
    pub fn retrieve_newsgroups(
        &mut self,
    ) -> Result<impl Iterator<Item = Result<NewsgroupHeader>> + '_> {
        self.require_connection()?;
        let command = if self.capabilities.supports(Extension::ListActive) {
            commands::list_active(None)
        } else {
            commands::list().to_string()
        };
        let lines = self.issue(&command, codes::LIST_INFORMATION_FOLLOWS)?;
        Ok(parse_group_lines(lines))
    }

    /// List newsgroups matching a wildmat (`LIST ACTIVE wildmat`)
    ///
    /// # Errors
    ///
    /// - [`NntpError::NotImplemented`] - Server lacks LIST ACTIVE; nothing is sent
    pub fn retrieve_newsgroups_matching(
        &mut self,
        wildmat: &str,
    ) -> Result<impl Iterator<Item = Result<NewsgroupHeader>> + use<'_, S>> {
        self.require_extension(Extension::ListActive)?;
        validate_argument("Wildmat", wildmat)?;
        self.require_connection()?;
        let lines = self.issue(
            &commands::list_active(Some(wildmat)),
            codes::LIST_INFORMATION_FOLLOWS,
        )?;
        Ok(parse_group_lines(lines))
    }

    /// Newsgroups created since `since` (NEWGROUPS, 231)
    pub fn retrieve_new_newsgroups(
        &mut self,
        since: &NaiveDateTime,
        zone: TimeZoneOption,
        distributions: Option<&str>,
    ) -> Result<impl Iterator<Item = Result<NewsgroupHeader>> + use<'_, S>> {
        validate_distributions(distributions)?;
        self.require_connection()?;
        let command = commands::newgroups(since, zone, distributions);
        let lines = self.issue(&command, codes::NEW_NEWSGROUPS_FOLLOW)?;
        Ok(parse_group_lines(lines))
    }

    /// Message-ids of articles posted since `since` to groups matching
    /// `wildmat` (NEWNEWS, 230)
    pub fn retrieve_new_news(
        &mut self,
        wildmat: &str,
        since: &NaiveDateTime,
        zone: TimeZoneOption,
        distributions: Option<&str>,
    ) -> Result<ResponseLines<'_, S>> {
        validate_argument("Wildmat", wildmat)?;
        validate_distributions(distributions)?;
        self.require_connection()?;
        let command = commands::newnews(wildmat, since, zone, distributions);
        self.issue(&command, codes::NEW_ARTICLE_LIST_FOLLOWS)
    }

    /// Group descriptions (XGTITLE, 282)
    ///
    /// Each line is `group description` as sent by the server.
    ///
    /// # Errors
    ///
    /// - [`NntpError::NotImplemented`] - Server lacks XGTITLE; nothing is sent
    pub fn retrieve_group_descriptions(
        &mut self,
        wildmat: Option<&str>,
    ) -> Result<ResponseLines<'_, S>> {
        self.require_extension(Extension::Xgtitle)?;
        if let Some(wildmat) = wildmat {
            validate_argument("Wildmat", wildmat)?;
        }
        self.require_connection()?;
        self.issue(&commands::xgtitle(wildmat), codes::GROUP_TITLES_FOLLOW)
    }

    /// Fail with [`NntpError::NotImplemented`] unless `extension` was detected
    pub(super) fn require_extension(&self, extension: Extension) -> Result<()> {
        if self.capabilities.supports(extension) {
            Ok(())
        } else {
            Err(NntpError::NotImplemented(extension.command()))
        }
    }
}

fn validate_distributions(distributions: Option<&str>) -> Result<()> {
    distributions.map_or(Ok(()), |d| validate_argument("Distributions", d))
}

fn parse_group_lines<S: Connection>(
    lines: ResponseLines<'_, S>,
) -> impl Iterator<Item = Result<NewsgroupHeader>> + '_ {
    lines.map(|line| line.and_then(|l| NewsgroupHeader::parse(&l)))
}
