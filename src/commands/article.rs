//! Article retrieval and navigation commands

use crate::error::{NntpError, Result};
use crate::validation::validate_message_id;
use std::fmt;
use std::str::FromStr;

/// Which article a retrieval command addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleTarget {
    /// The current article pointer of the selected group
    Current,
    /// Article number within the selected group
    Number(u64),
    /// Globally unique message-id, including the angle brackets
    MessageId(String),
}

impl ArticleTarget {
    /// Shorthand for [`ArticleTarget::MessageId`]
    pub fn message_id(id: impl Into<String>) -> Self {
        Self::MessageId(id.into())
    }

    /// Reject malformed message-ids before anything is sent
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::MessageId(id) => validate_message_id(id),
            Self::Current | Self::Number(_) => Ok(()),
        }
    }

    /// Append the argument, if any, to a command keyword
    fn command(&self, keyword: &str) -> String {
        match self {
            Self::Current => keyword.to_string(),
            Self::Number(n) => format!("{keyword} {n}"),
            Self::MessageId(id) => format!("{keyword} {id}"),
        }
    }
}

impl From<u64> for ArticleTarget {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

/// Inclusive range of article numbers, open-ended when `last` is `None`
///
/// Renders as `first-last` or `first-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleRange {
    pub first: u64,
    pub last: Option<u64>,
}

impl ArticleRange {
    /// `first-last`
    pub fn new(first: u64, last: u64) -> Self {
        Self {
            first,
            last: Some(last),
        }
    }

    /// `first-`, everything from `first` on
    pub fn starting_at(first: u64) -> Self {
        Self { first, last: None }
    }
}

impl fmt::Display for ArticleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(last) => write!(f, "{}-{}", self.first, last),
            None => write!(f, "{}-", self.first),
        }
    }
}

/// Build ARTICLE command
pub fn article(target: &ArticleTarget) -> String {
    target.command("ARTICLE")
}

/// Build HEAD command
pub fn head(target: &ArticleTarget) -> String {
    target.command("HEAD")
}

/// Build BODY command
pub fn body(target: &ArticleTarget) -> String {
    target.command("BODY")
}

/// Build STAT command
///
/// Gets article status without retrieving content.
pub fn stat(target: &ArticleTarget) -> String {
    target.command("STAT")
}

/// Direction to move the current article pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    /// `NEXT`: towards higher article numbers
    Next,
    /// `LAST`: towards lower article numbers
    Last,
}

impl CursorDirection {
    /// Build the NEXT or LAST command
    pub fn command(&self) -> &'static str {
        match self {
            Self::Next => "NEXT",
            Self::Last => "LAST",
        }
    }
}

impl fmt::Display for CursorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for CursorDirection {
    type Err = NntpError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("NEXT") {
            Ok(Self::Next)
        } else if s.eq_ignore_ascii_case("LAST") {
            Ok(Self::Last)
        } else {
            Err(NntpError::InvalidArgument(format!(
                "Cursor direction must be NEXT or LAST, got {s:?}"
            )))
        }
    }
}

/// Article number and message-id returned by STAT, NEXT and LAST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResponseIds {
    /// Article number (0 when STAT addressed a message-id on some servers)
    pub article_id: u64,
    /// Message identifier (e.g., "<abc@example.com>")
    pub message_id: String,
}

impl ArticleResponseIds {
    /// Parse a `223` status line
    ///
    /// Accepts both `"<n> <message-id>"` and the full status line
    /// `"223 <n> <message-id> [text]"`: with three or more fields the leading
    /// one is skipped.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (number, message_id) = match fields.as_slice() {
            [number, message_id] => (*number, *message_id),
            [_, number, message_id, ..] => (*number, *message_id),
            _ => return Err(NntpError::InvalidResponse(line.to_string())),
        };

        let article_id = number
            .parse()
            .map_err(|_| NntpError::InvalidResponse(line.to_string()))?;

        Ok(Self {
            article_id,
            message_id: message_id.to_string(),
        })
    }
}

impl fmt::Display for ArticleResponseIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article_id, self.message_id)
    }
}
