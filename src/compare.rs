//! Comparison entry points.
//!
//! Each operation comes in two forms. The `try_` form reports malformed input
//! as [`InvalidEncoding`]; the plain form panics instead, for callers whose
//! input is already known to be valid UTF-8 (any `&str`, for example).

use std::cmp::Ordering;

use crate::domain::{InvalidEncoding, decompose};

/// Compares two version strings.
///
/// # Errors
///
/// Returns [`InvalidEncoding`] if either version is not valid UTF-8 before
/// its appendix.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(flexver::try_compare("10.0.0", "1.0.1"), Ok(Ordering::Greater));
/// assert!(flexver::try_compare(b"\xc3\x28", "").is_err());
/// ```
pub fn try_compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<Ordering, InvalidEncoding> {
    let a = decompose(a.as_ref())?;
    let b = decompose(b.as_ref())?;
    Ok(a.cmp(&b))
}

/// Returns `true` if version `a` orders before version `b`.
///
/// # Errors
///
/// Returns [`InvalidEncoding`] if either version is not valid UTF-8 before
/// its appendix.
pub fn try_less_than(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<bool, InvalidEncoding> {
    try_compare(a, b).map(Ordering::is_lt)
}

/// Returns `true` if versions `a` and `b` are equal, meaning they differ at
/// most in their appendix or in leading zeros.
///
/// # Errors
///
/// Returns [`InvalidEncoding`] if either version is not valid UTF-8 before
/// its appendix.
pub fn try_equal(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<bool, InvalidEncoding> {
    try_compare(a, b).map(Ordering::is_eq)
}

/// Compares two version strings.
///
/// # Panics
///
/// Panics if either version is not valid UTF-8 before its appendix. See
/// [`try_compare`] for a non-panicking variant.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(flexver::compare("0.17.1-beta.1", "0.17.1"), Ordering::Less);
/// assert_eq!(
///     flexver::compare("36893488147419103232", "36893488147419103233"),
///     Ordering::Less
/// );
/// ```
#[must_use]
pub fn compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    try_compare(a, b).unwrap_or_else(|e| panic!("{e}"))
}

/// Returns `true` if version `a` orders before version `b`.
///
/// # Panics
///
/// Panics if either version is not valid UTF-8 before its appendix. See
/// [`try_less_than`] for a non-panicking variant.
#[must_use]
pub fn less_than(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    compare(a, b).is_lt()
}

/// Returns `true` if versions `a` and `b` are equal.
///
/// # Panics
///
/// Panics if either version is not valid UTF-8 before its appendix. See
/// [`try_equal`] for a non-panicking variant.
#[must_use]
pub fn equal(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    compare(a, b).is_eq()
}
