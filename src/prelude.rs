//! Crate prelude: re-exports of the commonly used types and traits.
//!
//! ```
//! use plain_types::prelude::*;
//!
//! let d = Date::parse("2017-09")?;
//! assert_eq!(d.to_sql_value(), SqlValue::Text("2017-09-01".into()));
//! assert!(validators::is_valid_slug("release-2017-09"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Module level functions (sniffing, validators, slice helpers) stay behind
//! their module names; the modules themselves are re-exported.

pub use crate::{
    Date, DateTime, ImageKind, Result, TypesError, filetype, octets, slices,
    sql::{FromSqlValue, SqlValue, ToSqlValue},
    validators,
};
