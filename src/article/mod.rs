//! Article data model
//!
//! - `headers`: ordered, multi-valued header collection
//! - `sink`: destinations for streamed header and body lines
//! - `date`: `Date:` header values with their original offset

mod date;
mod headers;
mod sink;

pub use self::date::ProtocolDateTime;
pub use self::headers::ArticleHeaders;
pub use self::sink::{BodyFn, BodySink, HeaderSink};

/// A complete article collected in memory
///
/// Produced by [`NntpClient::fetch_article`](crate::NntpClient::fetch_article).
/// For large articles prefer the streaming sinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub headers: ArticleHeaders,
    /// Body lines, dot-unstuffed, without terminators
    pub body: Vec<String>,
}

impl Article {
    /// Parsed `Date:` header, if present and well formed
    pub fn date(&self) -> Option<ProtocolDateTime> {
        self.headers
            .first("Date")
            .and_then(|value| ProtocolDateTime::parse(value).ok())
    }

    /// `Message-ID:` header value
    pub fn message_id(&self) -> Option<&str> {
        self.headers.first("Message-ID")
    }
}
