//! Destinations for streamed article content
//!
//! Header and body lines are pushed into sinks as they are read off the wire,
//! so a caller can process a large article without collecting it first.

use super::ArticleHeaders;
use crate::error::Result;

/// Receives raw header lines, one per call
pub trait HeaderSink {
    /// Accept one header line, without its line terminator
    fn add_header_line(&mut self, line: &str) -> Result<()>;
}

impl HeaderSink for ArticleHeaders {
    fn add_header_line(&mut self, line: &str) -> Result<()> {
        ArticleHeaders::add_header_line(self, line)
    }
}

/// Receives dot-unstuffed body lines, one per call
pub trait BodySink {
    fn add_body_line(&mut self, line: String);
}

impl BodySink for Vec<String> {
    fn add_body_line(&mut self, line: String) {
        self.push(line);
    }
}

/// Adapts a closure into a [`BodySink`]
///
/// # Examples
///
/// ```
/// use nntp_client::{BodyFn, BodySink};
///
/// let mut bytes = 0;
/// let mut sink = BodyFn(|line: String| bytes += line.len());
/// sink.add_body_line("hello".to_string());
/// assert_eq!(bytes, 5);
/// ```
pub struct BodyFn<F>(pub F);

impl<F: FnMut(String)> BodySink for BodyFn<F> {
    fn add_body_line(&mut self, line: String) {
        (self.0)(line)
    }
}
