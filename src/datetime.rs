//! Timestamp with a fixed ISO 8601 style text form.
//!
//! `DateTime` wraps a zoned instant. The text form always carries a numeric
//! offset without colon, `YYYY-MM-DDTHH:MM:SS±HHMM`, and is used for
//! `Display`, JSON and SQL text values alike. Parsing accepts the same layout
//! and normalizes the result to UTC.
//!
//! Equality compares instants, so the same moment expressed in two zones is
//! equal.
//!
//! ```
//! use plain_types::DateTime;
//! let dt = DateTime::parse("2017-09-07T23:18:42-0700").unwrap();
//! assert_eq!(dt.to_string(), "2017-09-08T06:18:42+0000");
//! assert_eq!(dt.hour(), 6);
//! ```

use std::{fmt, str::FromStr};

use chrono::{Datelike, FixedOffset, Local, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    Result, TypesError,
    sql::{FromSqlValue, SqlValue, ToSqlValue},
};

/// chrono format string of the text form.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Human readable layout used in error messages.
pub const DATETIME_LAYOUT: &str = "YYYY-MM-DDTHH:MM:SS±HHMM";

const DATETIME_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl Default for DateTime {
    /// The zero value, `0001-01-01T00:00:00+0000`.
    fn default() -> Self {
        DateTime(zero_instant())
    }
}

fn zero_instant() -> chrono::DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
        .and_utc()
        .fixed_offset()
}

impl DateTime {
    /// The current instant in the local zone of the environment.
    pub fn now() -> Self {
        DateTime(Local::now().fixed_offset())
    }

    /// Parse the fixed layout, returning the instant in UTC.
    ///
    /// Every field must be zero padded to its full width and the offset
    /// must be `+HHMM` or `-HHMM`.
    ///
    /// ```
    /// use plain_types::DateTime;
    /// assert!(DateTime::parse("2017-09-07T23:18:42+0000").is_ok());
    /// assert!(DateTime::parse("2017-9-7T23:18:42+0000").is_err());
    /// assert!(DateTime::parse("2017-09-07T23:18:42+00:00").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if !has_fixed_shape(input.as_bytes()) {
            return Err(TypesError::invalid_format(input, DATETIME_LAYOUT));
        }
        chrono::DateTime::parse_from_str(input, DATETIME_FORMAT)
            .map(|dt| DateTime(dt.with_timezone(&Utc).fixed_offset()))
            .map_err(|_| TypesError::invalid_format(input, DATETIME_LAYOUT))
    }

    /// Instant equality, independent of the zones the values are in.
    pub fn equal(&self, other: &DateTime) -> bool {
        self.0 == other.0
    }

    /// Offset the calendar date by whole years, months and days.
    ///
    /// The time of day and the zone offset are kept. Overflowing months
    /// and days roll over into the following month, so October 31 plus
    /// one month is December 1. Returns `None` if the result cannot be
    /// represented.
    ///
    /// ```
    /// use plain_types::DateTime;
    /// let dt = DateTime::parse("2017-10-31T08:00:00+0000").unwrap();
    /// let later = dt.add_date(0, 1, 0).unwrap();
    /// assert_eq!(later.to_string(), "2017-12-01T08:00:00+0000");
    /// ```
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Option<Self> {
        let local = self.0.naive_local();

        let total_months = i64::from(local.year()) * 12
            + i64::from(local.month0())
            + i64::from(years) * 12
            + i64::from(months);
        let year = i32::try_from(total_months.div_euclid(12)).ok()?;
        let month = total_months.rem_euclid(12) as u32 + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset_days = i64::from(local.day()) - 1 + i64::from(days);
        let date = first.checked_add_signed(TimeDelta::try_days(offset_days)?)?;

        date.and_time(local.time())
            .and_local_timezone(*self.0.offset())
            .single()
            .map(DateTime)
    }

    pub fn to_utc(&self) -> chrono::DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    pub fn as_chrono(&self) -> &chrono::DateTime<FixedOffset> {
        &self.0
    }

    /// True for the zero value produced by `Default` and by JSON `null`.
    pub fn is_zero(&self) -> bool {
        self.0 == zero_instant()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

/// `DDDD-DD-DDTDD:DD:DD±DDDD`, with no leap second.
fn has_fixed_shape(bytes: &[u8]) -> bool {
    if bytes.len() != DATETIME_LEN {
        return false;
    }
    let separators_ok = bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
        && matches!(bytes[19], b'+' | b'-');
    let digits_ok = [0..4, 5..7, 8..10, 11..13, 14..16, 17..19, 20..24]
        .into_iter()
        .all(|range| bytes[range].iter().all(u8::is_ascii_digit));

    // chrono reads second 60 as a leap second
    separators_ok && digits_ok && &bytes[17..19] != b"60"
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        DateTime(dt.fixed_offset())
    }
}

impl FromStr for DateTime {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        DateTime::parse(s)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(DateTime::default()),
            Some(text) => DateTime::parse(&text).map_err(de::Error::custom),
        }
    }
}

impl ToSqlValue for DateTime {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl FromSqlValue for DateTime {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Null => Ok(DateTime::default()),
            SqlValue::Timestamp(ts) => Ok(DateTime::from(ts)),
            SqlValue::Text(text) => DateTime::parse(&text),
        }
    }
}
