//! Article dates as written in `Date:` headers
//!
//! Accepts the RFC 822 family used on Usenet:
//!
//! ```text
//! [Www,] d[d] Mon yy[yy] HH:MM[:SS] (+HHMM | -HHMM | UT | GMT | EST | ...) [(comment)]
//! ```
//!
//! and renders `Www, dd Mon yyyy HH:MM:SS +HHMM (UTC)`.

use crate::error::{NntpError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// An instant together with the UTC offset it was written in
///
/// Two values naming the same moment with different offsets are not equal.
///
/// # Examples
///
/// ```
/// use nntp_client::ProtocolDateTime;
///
/// let date: ProtocolDateTime = "Tue, 03 Jun 2008 11:05:30 -0500".parse().unwrap();
/// assert_eq!(date.offset().local_minus_utc(), -5 * 3600);
/// assert_eq!(date.to_string(), "Tue, 03 Jun 2008 11:05:30 -0500 (UTC)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolDateTime {
    utc: DateTime<Utc>,
    offset: FixedOffset,
}

impl ProtocolDateTime {
    /// Pair an instant with the offset to present it in
    pub fn new(utc: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { utc, offset }
    }

    /// Parse a `Date:` header value
    ///
    /// # Errors
    ///
    /// [`NntpError::InvalidDate`] if the text does not match the accepted
    /// grammar or names an impossible calendar date.
    pub fn parse(text: &str) -> Result<Self> {
        parse_date(text).ok_or_else(|| NntpError::InvalidDate(text.to_string()))
    }

    /// The absolute instant
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// The offset the date was written in
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The instant as wall-clock time in its own offset
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.utc.with_timezone(&self.offset)
    }
}

impl From<DateTime<FixedOffset>> for ProtocolDateTime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self {
            utc: dt.with_timezone(&Utc),
            offset: *dt.offset(),
        }
    }
}

impl From<DateTime<Utc>> for ProtocolDateTime {
    fn from(utc: DateTime<Utc>) -> Self {
        Self {
            utc,
            offset: Utc.fix(),
        }
    }
}

impl fmt::Display for ProtocolDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.local().format("%a, %d %b %Y %H:%M:%S %z (UTC)")
        )
    }
}

impl FromStr for ProtocolDateTime {
    type Err = NntpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_date(text: &str) -> Option<ProtocolDateTime> {
    let mut rest = text.trim();

    if let Some((weekday, after)) = rest.split_once(',') {
        if !WEEKDAYS.contains(&weekday.trim().to_ascii_lowercase().as_str()) {
            return None;
        }
        rest = after;
    }

    // Trailing comment such as "(UTC)" or "(PST)"
    if let Some(open) = rest.find('(') {
        if !rest.trim_end().ends_with(')') {
            return None;
        }
        rest = &rest[..open];
    }

    let mut fields = rest.split_whitespace();
    let day = digits(fields.next()?, 1, 2)?;
    let month = month_number(fields.next()?)?;
    let year = year(fields.next()?)?;
    let (hour, minute, second) = time_of_day(fields.next()?)?;
    let offset = zone(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(ProtocolDateTime::from(local))
}

/// Parse an unsigned decimal of `min..=max` ASCII digits
fn digits(field: &str, min: usize, max: usize) -> Option<u32> {
    if field.len() < min || field.len() > max || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn month_number(field: &str) -> Option<u32> {
    let lower = field.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|index| index as u32 + 1)
}

/// Two-digit years below 50 land in this century, the rest shift by 1999
fn year(field: &str) -> Option<i32> {
    let year = digits(field, 2, 4)? as i32;
    Some(match year {
        0..=49 => year + 2000,
        50..=999 => year + 1999,
        _ => year,
    })
}

fn time_of_day(field: &str) -> Option<(u32, u32, u32)> {
    let mut parts = field.split(':');
    let hour = digits(parts.next()?, 2, 2)?;
    let minute = digits(parts.next()?, 2, 2)?;
    let second = match parts.next() {
        Some(s) => digits(s, 2, 2)?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((hour, minute, second))
}

fn zone(field: &str) -> Option<FixedOffset> {
    let hours = match field.to_ascii_lowercase().as_str() {
        "ut" | "gmt" => 0,
        "edt" => -4,
        "est" | "cdt" => -5,
        "cst" | "mdt" => -6,
        "mst" | "pdt" => -7,
        "pst" => -8,
        _ => return numeric_zone(field),
    };
    FixedOffset::east_opt(hours * 3600)
}

fn numeric_zone(field: &str) -> Option<FixedOffset> {
    let (sign, number) = match field.as_bytes().first()? {
        b'+' => (1, &field[1..]),
        b'-' => (-1, &field[1..]),
        _ => (1, field),
    };
    if number.len() != 4 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours = digits(&number[..2], 2, 2)? as i32;
    let minutes = digits(&number[2..], 2, 2)? as i32;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
