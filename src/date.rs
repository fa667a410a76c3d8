//! Calendar day representation.
//!
//! `Date` models a day of the calendar without any time of day or zone. Two
//! dates are compared on `(year, month, day)` only.
//!
//! # Text Format
//!
//! The canonical text form is `YYYY-MM-DD`. Parsing also accepts the short
//! `YYYY-MM` form, which is normalized to the first day of the month.
//!
//! - `Display` and JSON both emit `YYYY-MM-DD`; JSON decoding requires it.
//! - JSON `null` decodes to the zero value (`0001-01-01`).
//! - SQL values are written as text and read from native timestamps.
//!
//! # Examples
//!
//! ```
//! use plain_types::Date;
//! let d = Date::parse("2017-09").unwrap();
//! assert_eq!(d.day(), 1);
//! assert_eq!(d.to_string(), "2017-09-01");
//! assert!(d.equal(&Date::parse("2017-09-01").unwrap()));
//! ```
//!
//! JSON only accepts the full `YYYY-MM-DD` form:
//! ```
//! use plain_types::Date;
//! let d: Date = serde_json::from_str(r#""2017-09-07""#).unwrap();
//! assert_eq!(serde_json::to_string(&d).unwrap(), r#""2017-09-07""#);
//!
//! let zero: Date = serde_json::from_str("null").unwrap();
//! assert!(zero.is_zero());
//! assert!(serde_json::from_str::<Date>(r#""2017-09""#).is_err());
//! ```

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    Result, TypesError,
    sql::{FromSqlValue, SqlValue, ToSqlValue},
};

/// Human readable layout used in error messages.
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

const DATE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Default for Date {
    /// The zero value, `0001-01-01`.
    fn default() -> Self {
        Date(zero_day())
    }
}

fn zero_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Date {
    /// The current UTC calendar day.
    pub fn today() -> Self {
        Date(Utc::now().date_naive())
    }

    /// Construct a date from its components, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Parse `YYYY-MM-DD` or `YYYY-MM`.
    ///
    /// The two field form gets day `01`. Anything else, including out of
    /// range months or days, fails with [`TypesError::InvalidFormat`].
    ///
    /// ```
    /// use plain_types::Date;
    /// assert!(Date::parse("2013-01-31").is_ok());
    /// assert!(Date::parse("2013-01-32").is_err());
    /// assert!(Date::parse("03-25-1989").is_err());
    /// assert!(Date::parse("").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let parsed = if input.matches('-').count() == 1 {
            parse_canonical(&format!("{input}-01"))
        } else {
            parse_canonical(input)
        };
        parsed
            .map(Date)
            .ok_or_else(|| TypesError::invalid_format(input, DATE_LAYOUT))
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

    /// True for the zero value produced by `Default` and by JSON `null`.
    pub fn is_zero(&self) -> bool {
        self.0 == zero_day()
    }

    pub fn equal(&self, other: &Date) -> bool {
        self.fields() == other.fields()
    }

    pub fn is_before(&self, other: &Date) -> bool {
        self.fields() < other.fields()
    }

    pub fn is_after(&self, other: &Date) -> bool {
        self.fields() > other.fields()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    // Year first, then month, then day.
    fn fields(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }
}

/// Strict `YYYY-MM-DD`: exactly ten bytes, digits everywhere but the dashes.
fn parse_canonical(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let number = |digits: &[u8]| -> Option<u32> {
        digits.iter().try_fold(0u32, |acc, &b| {
            b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
        })
    };

    let year = number(&bytes[0..4])?;
    let month = number(&bytes[5..7])?;
    let day = number(&bytes[8..10])?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

impl FromStr for Date {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if (0..10_000).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month(), self.day())
        } else {
            write!(f, "{}-{:02}-{:02}", year, self.month(), self.day())
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for Date {
    /// Keeps the calendar day as seen in the timestamp's own zone.
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        Date(dt.date_naive())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Date::default()),
            // The wire form is always the full date, no short form here
            Some(text) => parse_canonical(&text)
                .map(Date)
                .ok_or_else(|| de::Error::custom(TypesError::invalid_format(text, DATE_LAYOUT))),
        }
    }
}

impl ToSqlValue for Date {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl FromSqlValue for Date {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Null => Ok(Date::default()),
            SqlValue::Timestamp(ts) => Ok(Date::from(ts)),
            SqlValue::Text(text) => Date::parse(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_shape() {
        assert_eq!(
            parse_canonical("2017-09-08"),
            NaiveDate::from_ymd_opt(2017, 9, 8)
        );
        assert_eq!(parse_canonical("2017-9-08"), None);
        assert_eq!(parse_canonical("2017/09/08"), None);
        assert_eq!(parse_canonical("2017-09-0a"), None);
        assert_eq!(parse_canonical("+017-09-08"), None);
        assert_eq!(parse_canonical("2017-02-29"), None);
    }

    #[test]
    fn test_short_form_gets_first_day() {
        let d = Date::parse("2013-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2013, 1, 1));
    }

    #[test]
    fn test_parse_error_keeps_input() {
        match Date::parse("2013-13") {
            Err(TypesError::InvalidFormat { input, expected }) => {
                assert_eq!(input, "2013-13");
                assert_eq!(expected, DATE_LAYOUT);
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_default_is_zero() {
        let d = Date::default();
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "0001-01-01");
        assert!(!Date::today().is_zero());
    }
}
