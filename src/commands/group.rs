//! Group selection and newsgroup list entries

use crate::error::{NntpError, Result};

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {newsgroup}")
}

/// Statistics for the selected group, from a `211` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsgroupStatistics {
    /// Group name as passed to GROUP
    pub group_name: String,
    /// Estimated number of articles
    pub estimated_count: u64,
    /// Number of the first article
    pub first_article_id: u64,
    /// Number of the last article
    pub last_article_id: u64,
}

impl NewsgroupStatistics {
    /// Parse `211 count first last [name]`
    ///
    /// The group name is taken from the request, not the response.
    pub fn parse(group_name: &str, line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(NntpError::InvalidResponse(line.to_string()));
        }

        let number = |field: &str| -> Result<u64> {
            field
                .parse()
                .map_err(|_| NntpError::InvalidResponse(line.to_string()))
        };

        Ok(Self {
            group_name: group_name.to_string(),
            estimated_count: number(fields[1])?,
            first_article_id: number(fields[2])?,
            last_article_id: number(fields[3])?,
        })
    }
}

/// One entry of a LIST, LIST ACTIVE or NEWGROUPS response
///
/// Field order follows the wire: `name high low [status]`, so the second field
/// becomes `last_article_id` and the third `first_article_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsgroupHeader {
    pub group_name: String,
    pub first_article_id: u64,
    pub last_article_id: u64,
    /// Posting status: `'y'`, `'n'`, `'m'`, or whatever the server sent
    pub status: char,
}

impl NewsgroupHeader {
    /// Parse one list line; a missing status defaults to `'y'`
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(NntpError::InvalidResponse(line.to_string()));
        }

        let number = |field: &str| -> Result<u64> {
            field
                .parse()
                .map_err(|_| NntpError::InvalidResponse(line.to_string()))
        };

        Ok(Self {
            group_name: fields[0].to_string(),
            last_article_id: number(fields[1])?,
            first_article_id: number(fields[2])?,
            status: fields.get(3).and_then(|s| s.chars().next()).unwrap_or('y'),
        })
    }

    /// Whether posting is allowed (`'y'`)
    pub fn posting_allowed(&self) -> bool {
        self.status == 'y'
    }

    /// Whether the group is moderated (`'m'`)
    pub fn is_moderated(&self) -> bool {
        self.status == 'm'
    }
}
