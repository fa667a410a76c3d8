//! Conversion between the value types of this crate and database driver values.
//!
//! Drivers hand over and accept a small set of native values. Instead of
//! inspecting dynamic types, each value type implements both directions
//! explicitly:
//!
//! - [`ToSqlValue`] produces the value written to the driver.
//! - [`FromSqlValue`] consumes the value read from the driver.
//!
//! `Option<T>` maps `None` to [`SqlValue::Null`] and back.
//!
//! ```
//! use plain_types::{Date, sql::{FromSqlValue, SqlValue, ToSqlValue}};
//!
//! let d = Date::parse("2017-09-09").unwrap();
//! assert_eq!(d.to_sql_value(), SqlValue::Text("2017-09-09".into()));
//!
//! let missing: Option<Date> = None;
//! assert_eq!(missing.to_sql_value(), SqlValue::Null);
//! assert_eq!(Option::<Date>::from_sql_value(SqlValue::Null).unwrap(), None);
//! ```
//!
//! With the `sqlx` feature, `Date` and `DateTime` also implement sqlx's
//! `Type`, `Encode` and `Decode` for Postgres.

use chrono::Utc;

use crate::Result;

/// A value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    /// Native timestamp as decoded by the driver.
    Timestamp(chrono::DateTime<Utc>),
}

pub trait ToSqlValue {
    fn to_sql_value(&self) -> SqlValue;
}

pub trait FromSqlValue: Sized {
    fn from_sql_value(value: SqlValue) -> Result<Self>;
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> SqlValue {
        match self {
            Some(inner) => inner.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

#[cfg(feature = "sqlx")]
mod postgres {
    use chrono::{NaiveDate, Utc};
    use sqlx::{
        Decode, Encode, Postgres, Type,
        encode::IsNull,
        error::BoxDynError,
        postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
    };

    use crate::{Date, DateTime};

    impl Type<Postgres> for Date {
        fn type_info() -> PgTypeInfo {
            <NaiveDate as Type<Postgres>>::type_info()
        }
    }

    impl Encode<'_, Postgres> for Date {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <NaiveDate as Encode<Postgres>>::encode_by_ref(&self.as_naive_date(), buf)
        }
    }

    impl<'r> Decode<'r, Postgres> for Date {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            Ok(Date::from(<NaiveDate as Decode<Postgres>>::decode(value)?))
        }
    }

    impl Type<Postgres> for DateTime {
        fn type_info() -> PgTypeInfo {
            <chrono::DateTime<Utc> as Type<Postgres>>::type_info()
        }
    }

    impl Encode<'_, Postgres> for DateTime {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <chrono::DateTime<Utc> as Encode<Postgres>>::encode_by_ref(&self.to_utc(), buf)
        }
    }

    impl<'r> Decode<'r, Postgres> for DateTime {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            Ok(DateTime::from(<chrono::DateTime<Utc> as Decode<Postgres>>::decode(value)?))
        }
    }
}
