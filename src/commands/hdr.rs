//! Header and description extension commands: XHDR, XPAT, XGTITLE

use super::article::{ArticleRange, ArticleTarget};
use crate::error::{NntpError, Result};
use crate::validation::validate_argument;

/// Articles an XHDR or XPAT command applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderScope {
    /// A single article, or the current one
    Article(ArticleTarget),
    /// A range of article numbers in the selected group
    Range(ArticleRange),
}

impl HeaderScope {
    fn argument(&self) -> Option<String> {
        match self {
            Self::Article(ArticleTarget::Current) => None,
            Self::Article(ArticleTarget::Number(n)) => Some(n.to_string()),
            Self::Article(ArticleTarget::MessageId(id)) => Some(id.clone()),
            Self::Range(range) => Some(range.to_string()),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Article(target) => target.validate(),
            Self::Range(_) => Ok(()),
        }
    }
}

impl From<ArticleTarget> for HeaderScope {
    fn from(target: ArticleTarget) -> Self {
        Self::Article(target)
    }
}

impl From<ArticleRange> for HeaderScope {
    fn from(range: ArticleRange) -> Self {
        Self::Range(range)
    }
}

/// Build XHDR command
pub fn xhdr(header: &str, scope: &HeaderScope) -> String {
    match scope.argument() {
        Some(arg) => format!("XHDR {header} {arg}"),
        None => format!("XHDR {header}"),
    }
}

/// Build XPAT command
///
/// XPAT always needs an explicit article or range and at least one pattern.
pub fn xpat(header: &str, scope: &HeaderScope, patterns: &[&str]) -> Result<String> {
    let arg = scope.argument().ok_or_else(|| {
        NntpError::InvalidArgument("XPAT requires an article number, message-id or range".into())
    })?;
    if patterns.is_empty() {
        return Err(NntpError::InvalidArgument(
            "XPAT requires at least one pattern".into(),
        ));
    }
    validate_argument("Header name", header)?;
    for pattern in patterns {
        validate_argument("Pattern", pattern)?;
    }
    Ok(format!("XPAT {header} {arg} {}", patterns.join(" ")))
}

/// Build XGTITLE command
pub fn xgtitle(wildmat: Option<&str>) -> String {
    match wildmat {
        Some(pattern) => format!("XGTITLE {pattern}"),
        None => "XGTITLE".to_string(),
    }
}

/// Whether an XHDR line is a bare `(none)` marker
pub(crate) fn is_missing_header(line: &str) -> bool {
    line.starts_with("(none)")
}
