//! Ordered, multi-valued article header collection

use crate::error::{NntpError, Result};

/// Article headers in the order they were received
///
/// Each name maps to every value seen for it. A header repeated in the
/// article, or continued on a folded line, yields more than one value.
///
/// Name lookups are exact; the collection never merges names that differ only
/// in case.
#[derive(Debug, Clone, Default)]
pub struct ArticleHeaders {
    entries: Vec<(String, Vec<String>)>,
    /// Index of the header a folded line continues
    last: Option<usize>,
}

impl ArticleHeaders {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw header line
    ///
    /// `Name: value` starts or extends the named header. A line beginning with
    /// a space or tab continues the most recently added header and is stored
    /// with its leading whitespace removed.
    ///
    /// # Errors
    ///
    /// [`NntpError::InvalidResponse`] for a continuation line with no
    /// preceding header, or a line that has no `": "` separator.
    pub fn add_header_line(&mut self, line: &str) -> Result<()> {
        if line.starts_with([' ', '\t']) {
            let index = self.last.ok_or_else(|| {
                NntpError::InvalidResponse(format!("Continuation line without a header: {line:?}"))
            })?;
            self.entries[index].1.push(line.trim_start().to_string());
            return Ok(());
        }

        match line.split_once(": ") {
            Some((name, value)) => self.add_header(name, value),
            None => Err(NntpError::InvalidResponse(format!(
                "Header line without separator: {line:?}"
            ))),
        }
    }

    /// Append a value to the named header
    ///
    /// # Errors
    ///
    /// [`NntpError::InvalidArgument`] if `name` is empty.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            return Err(NntpError::InvalidArgument(
                "Header name must not be empty".to_string(),
            ));
        }

        let index = match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.entries.push((name.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        self.entries[index].1.push(value.to_string());
        self.last = Some(index);
        Ok(())
    }

    /// All values for a header
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// First value for a header
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether the header is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Header names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, values)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct header names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no header has been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for ArticleHeaders {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ArticleHeaders {}
