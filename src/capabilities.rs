//! Extension detection from `HELP` output
//!
//! Servers of this vintage advertise optional commands only in their help
//! text. Each help line is lower-cased and scanned for the command names; the
//! checks are independent, so one line mentioning several extensions enables
//! all of them.

/// An optional command the session may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// `XOVER` overview retrieval
    Xover,
    /// `LIST ACTIVE [wildmat]`
    ListActive,
    /// `XHDR` single-header retrieval
    Xhdr,
    /// `XGTITLE` group descriptions
    Xgtitle,
    /// `XPAT` header pattern search
    Xpat,
}

impl Extension {
    /// Command keyword as sent on the wire
    pub fn command(&self) -> &'static str {
        match self {
            Self::Xover => "XOVER",
            Self::ListActive => "LIST ACTIVE",
            Self::Xhdr => "XHDR",
            Self::Xgtitle => "XGTITLE",
            Self::Xpat => "XPAT",
        }
    }
}

/// Extensions detected for a session, plus the help text they came from
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    xover: bool,
    list_active: bool,
    xhdr: bool,
    xgtitle: bool,
    xpat: bool,
    help: Vec<String>,
}

impl Capabilities {
    /// No extensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect extensions from `HELP` response lines
    ///
    /// # Example
    /// ```
    /// use nntp_client::{Capabilities, Extension};
    ///
    /// let help = vec![
    ///     "  xover [range]".to_string(),
    ///     "  list [active|newsgroups] [wildmat]".to_string(),
    /// ];
    /// let caps = Capabilities::from_help(help);
    /// assert!(caps.supports(Extension::Xover));
    /// assert!(caps.supports(Extension::ListActive));
    /// assert!(!caps.supports(Extension::Xpat));
    /// ```
    pub fn from_help(lines: Vec<String>) -> Self {
        let mut caps = Self::default();
        for line in &lines {
            let lower = line.to_lowercase();
            if lower.contains("xover") {
                caps.xover = true;
            }
            if lower.contains("list") && lower.contains("active") {
                caps.list_active = true;
            }
            if lower.contains("xhdr") {
                caps.xhdr = true;
            }
            if lower.contains("xgtitle") {
                caps.xgtitle = true;
            }
            if lower.contains("xpat") {
                caps.xpat = true;
            }
        }
        caps.help = lines;
        caps
    }

    /// Whether the server advertised `extension`
    #[must_use]
    pub fn supports(&self, extension: Extension) -> bool {
        match extension {
            Extension::Xover => self.xover,
            Extension::ListActive => self.list_active,
            Extension::Xhdr => self.xhdr,
            Extension::Xgtitle => self.xgtitle,
            Extension::Xpat => self.xpat,
        }
    }

    /// Every detected extension
    pub fn list(&self) -> Vec<Extension> {
        [
            Extension::Xover,
            Extension::ListActive,
            Extension::Xhdr,
            Extension::Xgtitle,
            Extension::Xpat,
        ]
        .into_iter()
        .filter(|ext| self.supports(*ext))
        .collect()
    }

    /// The help lines the flags were derived from
    pub fn help_text(&self) -> &[String] {
        &self.help
    }
}
