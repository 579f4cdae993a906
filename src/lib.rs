#![doc = include_str!("../README.md")]

/// Article data model: headers, sinks and protocol dates
pub mod article;
mod capabilities;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
mod error;
/// Buffered line decoder over a byte stream
pub mod reader;
mod response;
/// Line-oriented transport over a duplex connection
pub mod transport;
/// Argument validation
pub mod validation;

pub use article::{Article, ArticleHeaders, BodyFn, BodySink, HeaderSink, ProtocolDateTime};
pub use capabilities::{Capabilities, Extension};
pub use client::{
    ArticleHeadersIter, NntpClient, ResponseLines, SessionState, dot_stuff, dot_unstuff,
};
pub use commands::{
    ArticleRange, ArticleResponseIds, ArticleTarget, CursorDirection, HeaderScope,
    NewsgroupHeader, NewsgroupStatistics, TimeZoneOption,
};
pub use config::{Credentials, DEFAULT_PORT, ServerConfig};
pub use error::{NntpError, Result};
pub use reader::NntpStreamReader;
pub use response::{NntpResponse, codes};
pub use transport::{Connection, ProtocolLog};
pub use validation::{validate_argument, validate_message_id, validate_newsgroup_name};
