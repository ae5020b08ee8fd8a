//! Canonical ISO-8601 formatting and parsing of temporal column values.
//!
//! Formatting keeps every available fractional digit (0, 3, 6 or 9 digits) and renders
//! offsets as `±HH:MM`, or `±HH:MM:SS` for historical offsets with a seconds part. Dates
//! before year 1 are written with the era year and a trailing ` BC`; years past 9999 carry
//! a leading `+`. Both forms parse back.
//!
//! Parsing of cursor literals goes through an ordered list of attempts: the first one
//! that succeeds wins, and when all fail the error of the last attempt is returned.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseResult,
    format::{Parsed, StrftimeItems, parse},
};
use std::fmt;

/// A time of day carrying a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTime {
    pub time: NaiveTime,
    pub offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_time(self.time), format_offset(self.offset))
    }
}

/// Temporal value handed to the driver as a generic object parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date(NaiveDate),
    Time(NaiveTime),
    OffsetTime(OffsetTime),
    Timestamp(NaiveDateTime),
    OffsetTimestamp(DateTime<FixedOffset>),
}

type Attempt<T> = fn(&str) -> ParseResult<T>;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
const OFFSET_TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f%:z", "%H:%M%:z"];
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const BC_SUFFIX: &str = " BC";

pub fn format_date(date: NaiveDate) -> String {
    let mut out = date_part(date);
    push_era(&mut out, date.year());
    out
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S%.f").to_string()
}

pub fn format_time_tz(time: OffsetTime) -> String {
    time.to_string()
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    let mut out = format!(
        "{}T{}",
        date_part(timestamp.date()),
        timestamp.format("%H:%M:%S%.f")
    );
    push_era(&mut out, timestamp.year());
    out
}

pub fn format_timestamp_tz(timestamp: DateTime<FixedOffset>) -> String {
    let mut out = format!(
        "{}T{}{}",
        date_part(timestamp.date_naive()),
        timestamp.format("%H:%M:%S%.f"),
        format_offset(*timestamp.offset())
    );
    push_era(&mut out, timestamp.year());
    out
}

fn date_part(date: NaiveDate) -> String {
    let year = if date.year() < 1 {
        1 - date.year()
    } else {
        date.year()
    };
    let sign = if year > 9999 { "+" } else { "" };
    format!("{sign}{:04}-{:02}-{:02}", year, date.month(), date.day())
}

fn push_era(out: &mut String, year: i32) {
    if year < 1 {
        out.push_str(BC_SUFFIX);
    }
}

fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    let (hours, minutes) = (seconds / 3600, seconds / 60 % 60);
    match seconds % 60 {
        0 => format!("{sign}{hours:02}:{minutes:02}"),
        rest => format!("{sign}{hours:02}:{minutes:02}:{rest:02}"),
    }
}

/// Splits a trailing `±HH:MM:SS` offset off `literal`, returning it in seconds.
fn split_seconds_offset(literal: &str) -> Option<(&str, i32)> {
    let (head, offset) = literal.split_at_checked(literal.len().checked_sub(9)?)?;
    let sign = match offset.as_bytes() {
        [b'+', _, _, b':', _, _, b':', _, _] => 1,
        [b'-', _, _, b':', _, _, b':', _, _] => -1,
        _ => return None,
    };
    let field = |range: std::ops::Range<usize>| offset.get(range)?.parse::<i32>().ok();
    let seconds = field(1..3)? * 3600 + field(4..6)? * 60 + field(7..9)?;
    Some((head, sign * seconds))
}

/// Parses `literal` with `format` after moving a `±HH:MM:SS` offset into `parsed`.
fn parse_with_seconds_offset(literal: &str, format: &str) -> ParseResult<Parsed> {
    let mut parsed = Parsed::new();
    match split_seconds_offset(literal) {
        Some((head, offset)) => {
            parsed.set_offset(i64::from(offset))?;
            parse(&mut parsed, head, StrftimeItems::new(format))?;
        }
        None => parse(&mut parsed, literal, StrftimeItems::new(format))?,
    }
    Ok(parsed)
}

/// Replaces a trailing `Z` designator with the equivalent numeric offset.
fn expand_zulu(literal: &str) -> String {
    match literal.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => literal.to_string(),
    }
}

/// Runs each attempt in order; returns the first success or the last failure.
fn parse_first<T>(literal: &str, first: Attempt<T>, rest: &[Attempt<T>]) -> ParseResult<T> {
    rest.iter()
        .fold(first(literal), |result, attempt| result.or_else(|_| attempt(literal)))
}

/// Strict `YYYY-MM-DD`, optionally followed by ` BC`.
pub fn parse_date(literal: &str) -> ParseResult<NaiveDate> {
    let Some(date) = literal.strip_suffix(BC_SUFFIX) else {
        return NaiveDate::parse_from_str(literal, DATE_FORMAT);
    };

    let mut era = Parsed::new();
    parse(&mut era, date, StrftimeItems::new(DATE_FORMAT))?;

    let mut parsed = Parsed::new();
    if let (Some(year), Some(month), Some(day)) = (era.year(), era.month(), era.day()) {
        parsed.set_year(i64::from(1 - year))?;
        parsed.set_month(i64::from(month))?;
        parsed.set_day(i64::from(day))?;
    }
    parsed.to_naive_date()
}

pub fn parse_time(literal: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(literal, TIME_FORMATS[0])
        .or_else(|_| NaiveTime::parse_from_str(literal, TIME_FORMATS[1]))
}

pub fn parse_offset_time(literal: &str) -> ParseResult<OffsetTime> {
    let literal = expand_zulu(literal);
    parse_offset_time_with(&literal, OFFSET_TIME_FORMATS[0])
        .or_else(|_| parse_offset_time_with(&literal, OFFSET_TIME_FORMATS[1]))
        .or_else(|_| {
            let parsed = parse_with_seconds_offset(&literal, TIME_FORMATS[0])?;
            Ok(OffsetTime::new(parsed.to_naive_time()?, parsed.to_fixed_offset()?))
        })
}

fn parse_offset_time_with(literal: &str, format: &str) -> ParseResult<OffsetTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, literal, StrftimeItems::new(format))?;
    Ok(OffsetTime::new(parsed.to_naive_time()?, parsed.to_fixed_offset()?))
}

pub fn parse_timestamp(literal: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(literal, TIMESTAMP_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(literal, TIMESTAMP_FORMATS[1]))
}

pub fn parse_offset_timestamp(literal: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(literal)
        .or_else(|_| DateTime::parse_from_str(&expand_zulu(literal), "%Y-%m-%dT%H:%M%:z"))
        .or_else(|_| parse_with_seconds_offset(literal, TIMESTAMP_FORMATS[0])?.to_datetime())
}

/// Parses an offset-qualified time, falling back to a naive local time for values
/// written before offsets were recorded.
pub fn parse_offset_or_naive_time(literal: &str) -> ParseResult<TemporalValue> {
    let fallbacks: [Attempt<TemporalValue>; 1] = [naive_time_value];
    parse_first(literal, offset_time_value, &fallbacks)
}

/// Same fallback as [`parse_offset_or_naive_time`] for full timestamps.
pub fn parse_offset_or_naive_timestamp(literal: &str) -> ParseResult<TemporalValue> {
    let fallbacks: [Attempt<TemporalValue>; 1] = [naive_timestamp_value];
    parse_first(literal, offset_timestamp_value, &fallbacks)
}

fn offset_time_value(literal: &str) -> ParseResult<TemporalValue> {
    parse_offset_time(literal).map(TemporalValue::OffsetTime)
}

fn naive_time_value(literal: &str) -> ParseResult<TemporalValue> {
    parse_time(literal).map(TemporalValue::Time)
}

fn offset_timestamp_value(literal: &str) -> ParseResult<TemporalValue> {
    parse_offset_timestamp(literal).map(TemporalValue::OffsetTimestamp)
}

fn naive_timestamp_value(literal: &str) -> ParseResult<TemporalValue> {
    parse_timestamp(literal).map(TemporalValue::Timestamp)
}
