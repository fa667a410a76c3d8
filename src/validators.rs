//! String validators.
//!
//! Pure predicates, each backed by a fixed pattern compiled once.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Absolute `http` or `https` URL with a host.
///
/// ```
/// use plain_types::validators::is_valid_url;
/// assert!(is_valid_url("https://google.com"));
/// assert!(!is_valid_url("ftp://google.com"));
/// assert!(!is_valid_url("/dev/random"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// One `@`, a non-empty local part and a dotted domain without empty labels.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Canonical hyphenated `8-4-4-4-12` hexadecimal form.
pub fn is_valid_uuid(input: &str) -> bool {
    UUID_PATTERN.is_match(input)
}

/// Lowercase ASCII letters and digits, separated by single dashes.
pub fn is_valid_slug(input: &str) -> bool {
    SLUG_PATTERN.is_match(input)
}
