//! Byte size units.
//!
//! All units use binary prefixes: every step is a factor of 1024, not 1000.
//! The French "octet" names are aliases of the byte names.
//!
//! ```
//! use plain_types::octets::{KB, MEGA_BYTE, MO};
//! assert_eq!(KB, 1024);
//! assert_eq!(MEGA_BYTE, 1024 * 1024);
//! assert_eq!(MO, MEGA_BYTE);
//! ```

pub const BYTE: u64 = 1;
pub const KILO_BYTE: u64 = BYTE << 10;
pub const MEGA_BYTE: u64 = KILO_BYTE << 10;
pub const GIGA_BYTE: u64 = MEGA_BYTE << 10;
pub const TERA_BYTE: u64 = GIGA_BYTE << 10;
pub const PETA_BYTE: u64 = TERA_BYTE << 10;
pub const EXA_BYTE: u64 = PETA_BYTE << 10;

pub const B: u64 = BYTE;
pub const KB: u64 = KILO_BYTE;
pub const MB: u64 = MEGA_BYTE;
pub const GB: u64 = GIGA_BYTE;
pub const TB: u64 = TERA_BYTE;
pub const PB: u64 = PETA_BYTE;
pub const EB: u64 = EXA_BYTE;

pub const OCTET: u64 = BYTE;
pub const KILO_OCTET: u64 = KILO_BYTE;
pub const MEGA_OCTET: u64 = MEGA_BYTE;
pub const GIGA_OCTET: u64 = GIGA_BYTE;
pub const TERA_OCTET: u64 = TERA_BYTE;
pub const PETA_OCTET: u64 = PETA_BYTE;
pub const EXA_OCTET: u64 = EXA_BYTE;

pub const O: u64 = OCTET;
pub const KO: u64 = KILO_OCTET;
pub const MO: u64 = MEGA_OCTET;
pub const GO: u64 = GIGA_OCTET;
pub const TO: u64 = TERA_OCTET;
pub const PO: u64 = PETA_OCTET;
pub const EO: u64 = EXA_OCTET;
