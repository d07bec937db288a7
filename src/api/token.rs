//! Fabricated identifiers and timings for response headers.
//!
//! Values are drawn from the thread-local RNG on every call; two requests may
//! in theory receive the same correlation id, nothing relies on uniqueness.

use rand::seq::SliceRandom;

pub const UPPER_ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DIGITS: &str = "0123456789";
pub const CORRELATION_ID_LEN: usize = 26;

/// Build a string of `length` characters picked uniformly from `charset`.
///
/// An empty `charset` yields an empty string.
#[must_use]
pub fn random_string(length: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    let mut rng = rand::thread_rng();

    (0..length)
        .filter_map(|_| chars.choose(&mut rng).copied())
        .collect()
}

/// Correlation id used for `X-Request-Id` and `X-Gitlab-Meta`.
#[must_use]
pub fn correlation_id() -> String {
    random_string(CORRELATION_ID_LEN, UPPER_ALPHANUMERIC)
}

/// Fake `X-Runtime` value, `0.8` followed by five random digits.
#[must_use]
pub fn runtime() -> String {
    format!("0.8{}", random_string(5, DIGITS))
}
