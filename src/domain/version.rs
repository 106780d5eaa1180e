use std::{cmp::Ordering, convert::Infallible, fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use super::decomposition::Decomposition;

/// A borrowed version string, ordered by its decomposition.
///
/// This lets plain string slices be used wherever [`Ord`] is required.
///
/// The ordering is not transitive once pre-release runs meet textual or
/// numeric runs at the same position: `1-beta` equals `1beta`, yet
/// `1-beta < 1 < 1beta`. Ordered collections and sorts are only reliable over
/// versions that avoid that mix.
///
/// ```
/// use flexver::FlexVer;
///
/// assert!(FlexVer("b1.7.3") > FlexVer("a1.2.6"));
/// assert_eq!(FlexVer("1.4.5_01"), FlexVer("1.4.5_01+fabric-1.17"));
/// assert_eq!(
///     FlexVer("1.1.0").clamp(FlexVer("1.0.0"), FlexVer("1.2.0")),
///     FlexVer("1.1.0")
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlexVer<'a>(pub &'a str);

impl FlexVer<'_> {
    /// Returns the components of this version.
    #[must_use]
    pub fn decompose(&self) -> Decomposition<'_> {
        Decomposition::of(self.0)
    }
}

impl Ord for FlexVer<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decompose().cmp(&other.decompose())
    }
}

impl PartialOrd for FlexVer<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FlexVer<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FlexVer<'_> {}

impl fmt::Display for FlexVer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An owned version string, ordered by its decomposition.
///
/// Serializes as a plain string. Two versions that differ only in their
/// appendix are equal, so `Version` does not implement [`Hash`].
///
/// The ordering shares the caveat on [`FlexVer`]: it is not transitive when
/// pre-release runs are mixed with textual or numeric runs at the same
/// position.
///
/// ```
/// use flexver::Version;
///
/// let mut versions: Vec<Version> = ["1.10", "1.9", "1.9-rc"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// versions.sort();
///
/// let sorted: Vec<&str> = versions.iter().map(Version::as_str).collect();
/// assert_eq!(sorted, ["1.9-rc", "1.9", "1.10"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Creates a version from a string.
    #[must_use]
    pub const fn new(version: String) -> Self {
        Self(version)
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the components of this version.
    #[must_use]
    pub fn decompose(&self) -> Decomposition<'_> {
        Decomposition::of(&self.0)
    }

    /// Returns the appendix, the part from the first `+` onwards, which is
    /// ignored when ordering.
    ///
    /// ```
    /// use flexver::Version;
    ///
    /// let version = Version::from("1.4.5+fabric-1.17");
    /// assert_eq!(version.appendix(), Some("+fabric-1.17"));
    /// assert_eq!(Version::from("1.4.5").appendix(), None);
    /// ```
    #[must_use]
    pub fn appendix(&self) -> Option<&str> {
        self.0.find('+').map(|index| &self.0[index..])
    }

    /// Consumes the version, returning the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decompose().cmp(&other.decompose())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Version {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn flexver_ord() {
        assert!(FlexVer("b1.2.6") > FlexVer("a1.7.3"));
        assert!(FlexVer("a1.1.2") < FlexVer("a1.1.2_01"));
        assert!(FlexVer("1.16.5-0.00.5") > FlexVer("1.14.2-1.3.7"));
        assert!(FlexVer("0.17.1-beta.1") < FlexVer("0.17.1"));
        assert!(FlexVer("13w02a") < FlexVer("c0.3.0_01"));

        assert_eq!(FlexVer("b1.7.3"), FlexVer("b1.7.3").max(FlexVer("a1.2.6")));
        assert_eq!(FlexVer("a1.7.3"), FlexVer("b1.2.6").min(FlexVer("a1.7.3")));
        assert_eq!(FlexVer("1.0.0"), FlexVer("1.0.0").max(FlexVer("1.0.0")));
    }

    #[test]
    fn version_set_collapses_appendices() {
        let mut set = BTreeSet::new();
        assert!(set.insert(Version::from("1.0")));
        assert!(set.insert(Version::from("0.9")));
        assert!(!set.insert(Version::from("1.0+build.1")));
        assert!(!set.insert(Version::from("1.0+build.2")));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Version::from("1.0+other")));

        // an equal version never replaces the one already in the set
        let versions: Vec<&str> = set.iter().map(Version::as_str).collect();
        assert_eq!(versions, ["0.9", "1.0"]);
    }

    #[test]
    fn version_accessors() {
        let version = Version::new("2.0.0-rc.1+sha.5114f85".to_string());
        assert_eq!(version.appendix(), Some("+sha.5114f85"));
        assert_eq!(version.decompose().len(), 7);
        assert_eq!(version.to_string(), "2.0.0-rc.1+sha.5114f85");
        assert!(version.starts_with("2.0"));
        assert_eq!(version.into_inner(), "2.0.0-rc.1+sha.5114f85");
    }

    #[test]
    fn version_serde_roundtrip() {
        let versions = vec![Version::from("1.0.0-beta"), Version::from("18w40b")];

        let json = serde_json::to_string(&versions).unwrap();
        assert_eq!(json, r#"["1.0.0-beta","18w40b"]"#);

        let parsed: Vec<Version> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, versions);
    }
}
