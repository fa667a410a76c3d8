//! Small, independent value types and helpers.
//!
//! - [`Date`] – calendar day with `YYYY-MM-DD` text, JSON and SQL codecs
//! - [`DateTime`] – instant with a fixed `YYYY-MM-DDTHH:MM:SS±HHMM` text form
//! - [`filetype`] – MIME sniffing, image validation and SHA-256 over seekable streams
//! - [`octets`] – byte size units
//! - [`slices`] – membership checks
//! - [`validators`] – URL, email, UUID and slug predicates
//!
//! None of the modules depend on each other beyond the shared error type.

pub mod date;
pub mod datetime;
pub mod errors;
pub mod filetype;
pub mod octets;
pub mod prelude;
pub mod slices;
pub mod sql;
pub mod validators;

pub use date::Date;
pub use datetime::DateTime;
pub use errors::TypesError;
pub use filetype::ImageKind;

pub type Result<T> = std::result::Result<T, TypesError>;
