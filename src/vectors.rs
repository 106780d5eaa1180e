//! Test vectors are plain text, one comparison per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! 1.0.0-beta < 1.0.0
//! 1.0.0+build = 1.0.0
//! 10.0.0 > 1.0.1
//! ```
//!
//! Each case is exactly three fields separated by single spaces: two versions
//! and one of the operators `<`, `=` or `>`.

use std::{cmp::Ordering, fmt};

use crate::domain::Decomposition;

/// Errors that can occur while parsing test vectors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The line did not consist of exactly three space-separated fields.
    #[error("line {line}: expected `<version> <op> <version>`, found {fields} fields")]
    Fields {
        /// The 1-based line number.
        line: usize,
        /// The number of fields found.
        fields: usize,
    },

    /// The operator was not one of `<`, `=` or `>`.
    #[error("line {line}: unknown operator '{op}', expected one of '<', '=', '>'")]
    Operator {
        /// The 1-based line number.
        line: usize,
        /// The operator as written.
        op: String,
    },
}

/// A single expected comparison between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector<'a> {
    /// The 1-based line number the case was read from.
    pub line: usize,
    /// The left-hand version.
    pub left: &'a str,
    /// The expected ordering of `left` relative to `right`.
    pub expected: Ordering,
    /// The right-hand version.
    pub right: &'a str,
}

impl TestVector<'_> {
    /// Compares the two versions in both directions.
    ///
    /// Both sides are already valid text, so this cannot fail; a vector that
    /// does not hold is reported through the returned [`Outcome`].
    #[must_use]
    pub fn check(&self) -> Outcome {
        let left = Decomposition::of(self.left);
        let right = Decomposition::of(self.right);
        let outcome = Outcome {
            expected: self.expected,
            forward: left.cmp(&right),
            reverse: right.cmp(&left),
        };
        if !outcome.passed() {
            tracing::debug!(
                line = self.line,
                vector = %self,
                forward = symbol(outcome.forward),
                reverse = symbol(outcome.reverse),
                "test vector does not hold"
            );
        }
        outcome
    }
}

impl fmt::Display for TestVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.left, symbol(self.expected), self.right)
    }
}

/// The result of checking a [`TestVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The ordering the vector expects.
    pub expected: Ordering,
    /// The ordering of left against right.
    pub forward: Ordering,
    /// The ordering of right against left.
    pub reverse: Ordering,
}

impl Outcome {
    /// Returns `true` if the forward ordering matched and the reverse
    /// ordering was its mirror image.
    #[must_use]
    pub fn passed(self) -> bool {
        self.forward == self.expected && self.reverse == self.expected.reverse()
    }
}

/// Returns the operator symbol for an ordering.
#[must_use]
pub const fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn parse_operator(line: usize, op: &str) -> Result<Ordering, Error> {
    match op {
        "<" => Ok(Ordering::Less),
        "=" => Ok(Ordering::Equal),
        ">" => Ok(Ordering::Greater),
        _ => Err(Error::Operator {
            line,
            op: op.to_string(),
        }),
    }
}

/// Parses test vectors from text.
///
/// # Errors
///
/// Returns an [`Error`] for the first malformed line.
///
/// ```
/// use std::cmp::Ordering;
///
/// let vectors = flexver::vectors::parse("# semver\n\n1.0.0-rc.1 < 1.0.0\n").unwrap();
/// assert_eq!(vectors.len(), 1);
/// assert_eq!(vectors[0].line, 3);
/// assert_eq!(vectors[0].expected, Ordering::Less);
/// assert!(vectors[0].check().passed());
/// ```
pub fn parse(text: &str) -> Result<Vec<TestVector<'_>>, Error> {
    text.lines()
        .enumerate()
        .map(|(index, content)| (index + 1, content))
        .filter(|(_, content)| !content.starts_with('#') && !content.trim().is_empty())
        .map(|(line, content)| {
            let fields: Vec<&str> = content.split(' ').collect();
            let [left, op, right] = fields[..] else {
                return Err(Error::Fields {
                    line,
                    fields: fields.len(),
                });
            };
            Ok(TestVector {
                line,
                left,
                expected: parse_operator(line, op)?,
                right,
            })
        })
        .collect()
}
