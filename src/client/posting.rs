use crate::article::ArticleHeaders;
use crate::commands;
use crate::response::codes;
use crate::transport::Connection;
use crate::Result;
use tracing::debug;

use super::NntpClient;
use super::io::dot_stuff;

impl<S: Connection> NntpClient<S> {
    /// Post a new article to the server
    ///
    /// # Two-Phase Protocol
    ///
    /// 1. Client sends POST, server must answer 340
    /// 2. Client sends the headers in collection order, a blank line, the
    ///    dot-stuffed body, and a lone `.`
    /// 3. Server must answer 240
    ///
    /// A header with several values is written as `Name: first` followed by
    /// one tab-indented continuation line per further value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_client::{ArticleHeaders, NntpClient, ServerConfig};
    /// # fn example() -> nntp_client::Result<()> {
    /// # let mut client = NntpClient::connect(&ServerConfig::new("news.example.com"))?;
    /// let mut headers = ArticleHeaders::new();
    /// headers.add_header("From", "user@example.com")?;
    /// headers.add_header("Newsgroups", "alt.test")?;
    /// headers.add_header("Subject", "Test Article")?;
    ///
    /// client.post_article(&headers, ["This is a test article."])?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Protocol`](crate::NntpError::Protocol) - POST not answered
    ///   with 340 (e.g. 440), or the article not accepted with 240 (e.g. 441)
    /// - [`NntpError::Timeout`](crate::NntpError::Timeout) - Server did not respond in time
    pub fn post_article<I>(&mut self, headers: &ArticleHeaders, body: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        debug!("Posting article");
        self.require_connection()?;
        self.execute(commands::post(), codes::SEND_ARTICLE)?;

        let transport = self.transport()?;
        for (name, values) in headers.iter() {
            for (i, value) in values.iter().enumerate() {
                if i == 0 {
                    transport.write(name)?;
                    transport.write(": ")?;
                } else {
                    transport.write("\t")?;
                }
                transport.write_line(value)?;
            }
        }

        transport.write_line("")?;
        let mut lines = 0usize;
        for line in body {
            transport.write_line(&dot_stuff(line.as_ref()))?;
            lines += 1;
        }
        transport.write_line(".")?;

        self.read_response()?.expect(codes::ARTICLE_POSTED)?;
        debug!("Article posted ({} body lines)", lines);
        Ok(())
    }
}
