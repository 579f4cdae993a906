//! Group listing and new-item commands: LIST, LIST ACTIVE, NEWGROUPS, NEWNEWS

use chrono::NaiveDateTime;

/// How the server should interpret the time of a NEWGROUPS/NEWNEWS request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZoneOption {
    /// Server-local time
    #[default]
    Local,
    /// Coordinated universal time; appends `GMT`
    Gmt,
}

/// Build LIST command
pub fn list() -> &'static str {
    "LIST"
}

/// Build LIST ACTIVE command
pub fn list_active(wildmat: Option<&str>) -> String {
    match wildmat {
        Some(pattern) => format!("LIST ACTIVE {pattern}"),
        None => "LIST ACTIVE".to_string(),
    }
}

/// Build NEWGROUPS command
///
/// Format: `NEWGROUPS yymmdd hhmmss [GMT] [distributions]`
pub fn newgroups(
    since: &NaiveDateTime,
    zone: TimeZoneOption,
    distributions: Option<&str>,
) -> String {
    with_date("NEWGROUPS".to_string(), since, zone, distributions)
}

/// Build NEWNEWS command
///
/// Format: `NEWNEWS newsgroups yymmdd hhmmss [GMT] [distributions]`
pub fn newnews(
    wildmat: &str,
    since: &NaiveDateTime,
    zone: TimeZoneOption,
    distributions: Option<&str>,
) -> String {
    with_date(format!("NEWNEWS {wildmat}"), since, zone, distributions)
}

fn with_date(
    mut command: String,
    since: &NaiveDateTime,
    zone: TimeZoneOption,
    distributions: Option<&str>,
) -> String {
    command.push(' ');
    command.push_str(&since.format("%y%m%d %H%M%S").to_string());
    if zone == TimeZoneOption::Gmt {
        command.push_str(" GMT");
    }
    if let Some(distributions) = distributions.filter(|d| !d.is_empty()) {
        command.push(' ');
        command.push_str(distributions);
    }
    command
}
