//! XOVER overview retrieval

use super::article::ArticleRange;
use crate::article::ArticleHeaders;
use crate::error::{NntpError, Result};

/// Header names given to the tab-separated overview fields, in wire order
pub const OVERVIEW_FIELDS: [&str; 8] = [
    "Article-ID",
    "Subject",
    "From",
    "Date",
    "Message-ID",
    "Xref",
    "Bytes",
    "Lines",
];

/// Build XOVER command
pub fn xover(range: &ArticleRange) -> String {
    format!("XOVER {range}")
}

/// Decode one overview line into headers named by [`OVERVIEW_FIELDS`]
///
/// Fields past the eighth are ignored.
pub fn parse_overview_line(line: &str) -> Result<ArticleHeaders> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < OVERVIEW_FIELDS.len() {
        return Err(NntpError::InvalidResponse(format!(
            "Overview line has {} fields, expected {}: {line:?}",
            fields.len(),
            OVERVIEW_FIELDS.len()
        )));
    }

    let mut headers = ArticleHeaders::new();
    for (name, value) in OVERVIEW_FIELDS.iter().zip(fields) {
        headers.add_header(name, value)?;
    }
    Ok(headers)
}
