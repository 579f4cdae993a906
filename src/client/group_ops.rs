use crate::commands::{
    self, ArticleResponseIds, ArticleTarget, CursorDirection, NewsgroupStatistics,
};
use crate::error::NntpError;
use crate::transport::Connection;
use crate::validation::validate_newsgroup_name;
use crate::{NntpClient, Result, codes};
use tracing::debug;

impl<S: Connection> NntpClient<S> {
    /// Select a newsgroup
    ///
    /// On success the group becomes current and article commands are allowed.
    /// On any failure no group is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::InvalidArgument`] - Empty name, or one containing whitespace
    /// - [`NntpError::NoGroupSelected`] - The newsgroup does not exist (411)
    /// - [`NntpError::Protocol`] - Server returned any other unexpected code
    /// - [`NntpError::InvalidResponse`] - Could not parse the server response
    pub fn select_group(&mut self, newsgroup: &str) -> Result<NewsgroupStatistics> {
        self.current_group = None;
        validate_newsgroup_name(newsgroup)?;
        self.require_connection()?;
        debug!("Selecting newsgroup: {}", newsgroup);

        self.send_command(&commands::group(newsgroup))?;
        let response = self.read_response()?;

        match response.code {
            codes::GROUP_SELECTED => {
                let stats = NewsgroupStatistics::parse(newsgroup, &response.raw)?;
                debug!(
                    "Group {} selected: {} articles ({}-{})",
                    newsgroup, stats.estimated_count, stats.first_article_id, stats.last_article_id
                );
                self.current_group = Some(stats.clone());
                Ok(stats)
            }
            codes::NO_SUCH_GROUP => Err(NntpError::NoGroupSelected),
            code => Err(NntpError::protocol(code, response.raw)),
        }
    }

    /// Move the current article pointer with NEXT or LAST
    ///
    /// # Errors
    ///
    /// - [`NntpError::NoGroupSelected`] - No group selected; nothing is sent
    /// - [`NntpError::Protocol`] - Anything but 223, e.g. 421/422 at either end
    pub fn advance_cursor(&mut self, direction: CursorDirection) -> Result<ArticleResponseIds> {
        self.require_group()?;
        let response = self.execute(direction.command(), codes::ARTICLE_STAT)?;
        ArticleResponseIds::parse(&response.raw)
    }

    /// Look up an article's number and message-id with STAT
    ///
    /// # Errors
    ///
    /// - [`NntpError::InvalidArgument`] - Malformed message-id; nothing is sent
    /// - [`NntpError::NoGroupSelected`] - No group selected; nothing is sent
    /// - [`NntpError::Protocol`] - Anything but 223
    pub fn retrieve_statistics(&mut self, target: &ArticleTarget) -> Result<ArticleResponseIds> {
        target.validate()?;
        self.require_group()?;
        let response = self.execute(&commands::stat(target), codes::ARTICLE_STAT)?;
        ArticleResponseIds::parse(&response.raw)
    }
}
