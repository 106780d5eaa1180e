use std::{cmp::Ordering, fmt, slice};

use super::component::{Component, ComponentKind};

const NULL: Component<'static> = Component::Null;

/// Error returned when a version string is not valid UTF-8.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("version string is not valid UTF-8 (malformed sequence at byte {valid_up_to})")]
pub struct InvalidEncoding {
    valid_up_to: usize,
}

impl InvalidEncoding {
    /// Returns the byte offset of the first malformed sequence.
    #[must_use]
    pub const fn valid_up_to(self) -> usize {
        self.valid_up_to
    }
}

/// Error returned by [`decompose`], carrying whatever was decomposed before
/// the malformed input was reached.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{source}")]
pub struct DecomposeError<'a> {
    partial: Decomposition<'a>,
    source: InvalidEncoding,
}

impl<'a> DecomposeError<'a> {
    /// Returns the components completed before the malformed sequence.
    ///
    /// The run that was open when the malformed sequence was hit is not
    /// included.
    #[must_use]
    pub const fn partial(&self) -> &Decomposition<'a> {
        &self.partial
    }

    /// Returns the underlying encoding error.
    #[must_use]
    pub const fn cause(&self) -> InvalidEncoding {
        self.source
    }
}

impl From<DecomposeError<'_>> for InvalidEncoding {
    fn from(err: DecomposeError<'_>) -> Self {
        err.source
    }
}

/// The ordered components of a single version string.
///
/// Decompositions order componentwise, left to right. When one is shorter,
/// its missing components compare as [`Component::Null`].
///
/// Equality follows the ordering rather than the text, so `1.01` equals
/// `1.1`.
///
/// The ordering is not transitive when one decomposition holds a pre-release
/// component where another holds a textual or numeric one. Pre-release and
/// textual components compare by text against each other, yet fall on
/// opposite sides of an absent component: `1-beta` equals `1beta`, while
/// `1-beta < 1 < 1beta`.
#[derive(Debug, Clone, Default)]
pub struct Decomposition<'a> {
    components: Vec<Component<'a>>,
}

impl<'a> Decomposition<'a> {
    /// Decomposes a string that is already known to be valid text.
    ///
    /// ```
    /// use flexver::{Component, Decomposition};
    ///
    /// let decomposition = Decomposition::of("1.0-rc1+build.5");
    /// assert_eq!(
    ///     decomposition.components(),
    ///     [
    ///         Component::Numeric("1"),
    ///         Component::Textual("."),
    ///         Component::Numeric("0"),
    ///         Component::PreRelease("rc"),
    ///         Component::Numeric("1"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn of(version: &'a str) -> Self {
        let (decomposition, _) = scan(version, false);
        decomposition
    }

    /// Returns the components in order.
    #[must_use]
    pub fn components(&self) -> &[Component<'a>] {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components.
    ///
    /// This is the case for an empty string, or one that starts with `+`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> slice::Iter<'_, Component<'a>> {
        self.components.iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Decomposition<'a> {
    type Item = &'b Component<'a>;
    type IntoIter = slice::Iter<'b, Component<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Ord for Decomposition<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.len().max(other.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).unwrap_or(&NULL);
                let b = other.components.get(i).unwrap_or(&NULL);
                a.compare(b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Decomposition<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decomposition<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Decomposition<'_> {}

impl fmt::Display for Decomposition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.components
            .iter()
            .try_for_each(|component| write!(f, "{component}"))
    }
}

/// Splits a version string into its components.
///
/// Everything from the first `+` onwards (the appendix) is discarded. The
/// remainder is split into maximal runs of ASCII digits and of non-digits; a
/// `-` followed by at least one more character marks the run after it as a
/// pre-release.
///
/// # Errors
///
/// Returns [`DecomposeError`] if the input is not valid UTF-8 before the
/// appendix. The error holds the components completed up to that point.
///
/// ```
/// use flexver::{Component, decompose};
///
/// let err = decompose(b"2.1\xff").unwrap_err();
/// assert_eq!(err.partial().components(), [
///     Component::Numeric("2"),
///     Component::Textual("."),
/// ]);
///
/// // malformed bytes in the appendix are never inspected
/// assert!(decompose(b"2.1+\xff").is_ok());
/// ```
pub fn decompose(input: &[u8]) -> Result<Decomposition<'_>, DecomposeError<'_>> {
    let (text, malformed) = input
        .utf8_chunks()
        .next()
        .map_or(("", false), |chunk| {
            (chunk.valid(), !chunk.invalid().is_empty())
        });

    match scan(text, malformed) {
        (decomposition, Stop::Malformed) => {
            tracing::trace!(
                valid_up_to = text.len(),
                components = decomposition.len(),
                "version string is not valid UTF-8"
            );
            Err(DecomposeError {
                partial: decomposition,
                source: InvalidEncoding {
                    valid_up_to: text.len(),
                },
            })
        }
        (decomposition, Stop::End | Stop::Appendix) => Ok(decomposition),
    }
}

/// Why a scan finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    End,
    Appendix,
    Malformed,
}

/// Scans `text` left to right into components.
///
/// `malformed` marks that `text` is followed by a byte sequence that is not
/// valid UTF-8. Reaching it aborts the scan, dropping the run in progress.
/// A `+` anywhere in `text` ends the version first, whatever run it falls in,
/// so the malformed sequence is then never reached.
fn scan(text: &str, malformed: bool) -> (Decomposition<'_>, Stop) {
    let (text, malformed, last) = match text.find('+') {
        Some(index) => (&text[..index], false, Stop::Appendix),
        None if malformed => (text, true, Stop::Malformed),
        None => (text, false, Stop::End),
    };

    let mut components = Vec::new();
    let mut rest = text;

    let stop = loop {
        let Some(first) = rest.chars().next() else {
            break last;
        };

        let (kind, body) = if first == '-' && (rest.len() > 1 || malformed) {
            (ComponentKind::PreRelease, &rest[1..])
        } else if first.is_ascii_digit() {
            (ComponentKind::Numeric, rest)
        } else {
            (ComponentKind::Textual, rest)
        };

        let numeric = kind == ComponentKind::Numeric;
        let end = body
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(body.len());

        if end == body.len() && malformed {
            break Stop::Malformed;
        }

        let (run, tail) = body.split_at(end);
        // a pre-release marker directly followed by a digit has an empty run
        if !run.is_empty() {
            components.push(Component::new(kind, run));
        }
        rest = tail;
    };

    (Decomposition { components }, stop)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::Component::{Numeric as N, PreRelease as P, Textual as T};

    #[test_case("", &[]; "empty")]
    #[test_case("b1.7.3", &[T("b"), N("1"), T("."), N("7"), T("."), N("3")]; "leading text")]
    #[test_case("1.0.0-beta.1", &[N("1"), T("."), N("0"), T("."), N("0"), P("beta."), N("1")]; "pre-release")]
    #[test_case("1.0.0-2", &[N("1"), T("."), N("0"), T("."), N("0"), N("2")]; "marker before digit")]
    #[test_case("1.0-", &[N("1"), T("."), N("0"), T("-")]; "trailing dash is textual")]
    #[test_case("-", &[T("-")]; "lone dash")]
    #[test_case("-rc", &[P("rc")]; "leading pre-release")]
    #[test_case("1.0--1", &[N("1"), T("."), N("0"), P("-"), N("1")]; "double dash")]
    #[test_case("a-b-c", &[T("a-b-c")]; "dash inside textual run")]
    #[test_case("1-a-b", &[N("1"), P("a-b")]; "second dash stays in run")]
    #[test_case("1-a.2-b", &[N("1"), P("a."), N("2"), P("b")]; "dash after digits restarts")]
    #[test_case("1.4.5_01+fabric-1.17", &[N("1"), T("."), N("4"), T("."), N("5"), T("_"), N("01")]; "appendix")]
    #[test_case("1.0a+build", &[N("1"), T("."), N("0"), T("a")]; "appendix inside textual run")]
    #[test_case("1.0.0-beta+exp.sha.5114f85", &[N("1"), T("."), N("0"), T("."), N("0"), P("beta")]; "appendix inside pre-release run")]
    #[test_case("1.0-+x", &[N("1"), T("."), N("0"), T("-")]; "dash before appendix is textual")]
    #[test_case("a+b+c", &[T("a")]; "first plus starts appendix")]
    #[test_case("+1.0", &[]; "appendix only")]
    #[test_case("0042", &[N("0042")]; "leading zeros kept")]
    #[test_case("1.٣", &[N("1"), T(".٣")]; "non-ascii digit is textual")]
    fn decomposes(input: &str, expected: &[Component]) {
        let decomposition = decompose(input.as_bytes()).unwrap();
        assert_eq!(decomposition.components(), expected);
        assert_eq!(Decomposition::of(input).components(), expected);
    }

    #[test]
    fn runs_cover_input_before_appendix() {
        for input in ["1.0.0-beta.1", "18w40b", "a1.1.2_01", "0.6.0-pre.18.x"] {
            let decomposition = Decomposition::of(input);
            assert_eq!(decomposition.to_string(), input);
            assert!(decomposition.iter().all(|c| !c.text().is_empty()));
        }
    }

    #[test_case(b"\xc3\x28", 0, &[]; "bad continuation")]
    #[test_case(b"1.2\xe2\x82", 3, &[N("1"), T(".")]; "truncated after digits")]
    #[test_case(b"ab\xff", 2, &[]; "inside textual run")]
    #[test_case(b"1-\xff", 2, &[N("1")]; "after pre-release marker")]
    #[test_case(b"1.0-beta\xff", 8, &[N("1"), T("."), N("0")]; "inside pre-release run")]
    fn malformed_input(input: &[u8], valid_up_to: usize, partial: &[Component]) {
        let err = decompose(input).unwrap_err();
        assert_eq!(err.cause().valid_up_to(), valid_up_to);
        assert_eq!(err.partial().components(), partial);
    }

    #[test_case(b"1.0+\xff\xfe", &[N("1"), T("."), N("0")]; "after numeric run")]
    #[test_case(b"ab+\xff", &[T("ab")]; "after textual run")]
    #[test_case(b"1-rc+\xc3", &[N("1"), P("rc")]; "after pre-release run")]
    fn malformed_appendix_is_ignored(input: &[u8], expected: &[Component]) {
        let decomposition = decompose(input).unwrap();
        assert_eq!(decomposition.components(), expected);
    }

    #[test]
    fn appendix_inside_run_does_not_change_order() {
        for (plain, with_appendix) in [
            ("1.0a", "1.0a+build"),
            ("1.0.0-beta", "1.0.0-beta+exp.sha.5114f85"),
            ("1.0-", "1.0-+x"),
            ("b1.7.3", "b1.7.3+b"),
        ] {
            assert_eq!(
                Decomposition::of(plain),
                Decomposition::of(with_appendix),
                "{with_appendix}"
            );
        }
    }

    #[test]
    fn error_display() {
        let err = InvalidEncoding::from(decompose(b"1.\xff").unwrap_err());
        assert_eq!(
            err.to_string(),
            "version string is not valid UTF-8 (malformed sequence at byte 2)"
        );
    }

    #[test_case("1.0", "1.1", Ordering::Less; "minor")]
    #[test_case("1.0", "1.0.1", Ordering::Less; "extra component")]
    #[test_case("1.0.0-beta", "1.0.0", Ordering::Less; "pre-release before release")]
    #[test_case("1.01", "1.1", Ordering::Equal; "leading zeros")]
    #[test_case("", "", Ordering::Equal; "both empty")]
    #[test_case("", "0", Ordering::Less; "empty before anything")]
    #[test_case("", "-rc", Ordering::Greater; "empty after pre-release")]
    fn orders(a: &str, b: &str, expected: Ordering) {
        let a = Decomposition::of(a);
        let b = Decomposition::of(b);
        assert_eq!(a.cmp(&b), expected);
        assert_eq!(a == b, expected.is_eq());
    }
}
