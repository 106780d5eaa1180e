use std::{cmp::Ordering, fmt};

/// The classification of a [`Component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// A run of characters that are not ASCII digits.
    Textual,
    /// A run of ASCII digits.
    Numeric,
    /// A non-digit run introduced by a `-` separator.
    PreRelease,
    /// Placeholder for a component missing from the shorter of two versions.
    Null,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Textual => "textual",
            Self::Numeric => "numeric",
            Self::PreRelease => "pre-release",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// A maximal run of characters from a version string, tagged with its kind.
///
/// Components borrow their text from the string they were decomposed from.
/// Decomposition never yields an empty run, and never yields
/// [`Component::Null`]; that variant only stands in for a missing component
/// while comparing versions of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component<'a> {
    /// A run of characters that are not ASCII digits.
    Textual(&'a str),
    /// A run of ASCII digits.
    Numeric(&'a str),
    /// A non-digit run that followed a `-` separator (the `-` is excluded).
    PreRelease(&'a str),
    /// The absent component.
    Null,
}

impl<'a> Component<'a> {
    pub(crate) const fn new(kind: ComponentKind, text: &'a str) -> Self {
        match kind {
            ComponentKind::Textual => Self::Textual(text),
            ComponentKind::Numeric => Self::Numeric(text),
            ComponentKind::PreRelease => Self::PreRelease(text),
            ComponentKind::Null => Self::Null,
        }
    }

    /// Returns the kind of this component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Textual(_) => ComponentKind::Textual,
            Self::Numeric(_) => ComponentKind::Numeric,
            Self::PreRelease(_) => ComponentKind::PreRelease,
            Self::Null => ComponentKind::Null,
        }
    }

    /// Returns the characters of this component.
    ///
    /// This is empty for [`Component::Null`], and never includes the `-` of a
    /// pre-release component.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Textual(text) | Self::Numeric(text) | Self::PreRelease(text) => text,
            Self::Null => "",
        }
    }

    /// Orders this component against another.
    ///
    /// - Two numeric components compare by value, ignoring leading zeros.
    ///   Arbitrarily long runs are supported.
    /// - A null component is less than anything except a pre-release
    ///   component, which it is greater than.
    /// - Anything else compares character by character, with a strict prefix
    ///   ordering first, whatever the kinds on either side.
    ///
    /// The last rule puts `PreRelease("x")` level with `Textual("x")`, although
    /// only one of them orders below [`Component::Null`].
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use flexver::Component;
    ///
    /// let ten = Component::Numeric("10");
    /// let nine = Component::Numeric("09");
    /// assert_eq!(ten.compare(&nine), Ordering::Greater);
    ///
    /// let beta = Component::PreRelease("beta");
    /// assert_eq!(beta.compare(&Component::Null), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Component<'_>) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Component::Numeric(b)) => compare_digits(a, b),
            (Self::Null, Component::Null) => Ordering::Equal,
            (Self::Null, Component::PreRelease(_)) => Ordering::Greater,
            (Self::Null, _) => Ordering::Less,
            (Self::PreRelease(_), Component::Null) => Ordering::Less,
            (_, Component::Null) => Ordering::Greater,
            // UTF-8 byte order matches code point order
            (a, b) => a.text().cmp(b.text()),
        }
    }
}

impl fmt::Display for Component<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PreRelease(text) => write!(f, "-{text}"),
            other => f.write_str(other.text()),
        }
    }
}

/// Compares two runs of ASCII digits by the integer they spell.
///
/// The significant digit count decides first, so no integer conversion (and
/// no overflow) takes place.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
