use crate::{compare, domain::InvalidEncoding, domain::decompose};

/// A mutable view over a slice of version strings, exposing the primitive
/// operations of an in-place sort.
///
/// ```
/// use flexver::VersionSlice;
///
/// let mut versions = vec!["1.0.1", "1.0.0-rc.1", "1.0.0"];
/// let mut slice = VersionSlice::new(&mut versions);
/// assert!(slice.less(1, 2));
///
/// slice.sort();
/// assert_eq!(versions, ["1.0.0-rc.1", "1.0.0", "1.0.1"]);
/// ```
#[derive(Debug)]
pub struct VersionSlice<'a, S> {
    versions: &'a mut [S],
}

impl<'a, S: AsRef<[u8]>> VersionSlice<'a, S> {
    /// Wraps a slice of versions.
    #[must_use]
    pub const fn new(versions: &'a mut [S]) -> Self {
        Self { versions }
    }

    /// Returns the number of versions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.versions.len()
    }

    /// Returns `true` if the slice holds no versions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Returns `true` if the version at index `i` orders before the version
    /// at index `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds, or if either version is not
    /// valid UTF-8.
    #[must_use]
    pub fn less(&self, i: usize, j: usize) -> bool {
        compare::less_than(&self.versions[i], &self.versions[j])
    }

    /// Swaps the versions at indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.versions.swap(i, j);
    }

    /// Sorts the versions in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if any version is not valid UTF-8, and may panic on versions
    /// that mix pre-release and plain runs (see [`sort`]).
    pub fn sort(&mut self) {
        sort(self.versions);
    }

    /// Sorts the versions in ascending order, leaving them untouched if any
    /// is not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEncoding`] for the first malformed version.
    pub fn try_sort(&mut self) -> Result<(), InvalidEncoding> {
        try_sort(self.versions)
    }

    /// Returns the underlying slice.
    #[must_use]
    pub const fn into_inner(self) -> &'a mut [S] {
        self.versions
    }
}

/// Sorts version strings in ascending order.
///
/// The sort is stable, so versions that compare equal (`1.0` and `1.0+build`)
/// keep their relative order.
///
/// The ordering is only a total order while no position holds a pre-release
/// run in one version and a textual or numeric run in another. `1.0--1`,
/// `1.0` and `1.0-` form a cycle, for example. Such input sorts into an
/// unspecified order.
///
/// # Panics
///
/// Panics if any version is not valid UTF-8. See [`try_sort`] for a
/// non-panicking variant. The standard library sort may also panic when it
/// detects the cycle described above.
pub fn sort<S: AsRef<[u8]>>(versions: &mut [S]) {
    versions.sort_by(|a, b| compare::compare(a, b));
}

/// Sorts version strings in ascending order.
///
/// Every version is checked before any is moved, so the slice is unchanged
/// on error. The caveat on [`sort`] about mixed pre-release runs applies.
///
/// # Errors
///
/// Returns [`InvalidEncoding`] for the first malformed version.
pub fn try_sort<S: AsRef<[u8]>>(versions: &mut [S]) -> Result<(), InvalidEncoding> {
    for (index, version) in versions.iter().enumerate() {
        if let Err(e) = decompose(version.as_ref()) {
            tracing::debug!(index, "refusing to sort: {e}");
            return Err(e.into());
        }
    }
    sort(versions);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_versions() {
        let mut versions = ["100", "1.0.2", "0.1.2", "0.3.4-pre"];
        sort(&mut versions);
        assert_eq!(versions, ["0.1.2", "0.3.4-pre", "1.0.2", "100"]);
    }

    #[test]
    fn sort_is_stable_for_equal_versions() {
        let mut versions = vec![
            "1.0+b".to_string(),
            "0.9".to_string(),
            "1.0+a".to_string(),
            "1.00".to_string(),
        ];
        sort(&mut versions);
        assert_eq!(versions, ["0.9", "1.0+b", "1.0+a", "1.00"]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let mut versions = [
            "18w40b", "1.4.5_01", "13w02a", "b1.7.3", "1.0.0-2", "1.0.0", "a1.2.6", "c0.3.0_01",
        ];
        sort(&mut versions);
        let once = versions;
        sort(&mut versions);
        assert_eq!(versions, once);

        for pair in versions.windows(2) {
            assert!(!compare::less_than(pair[1], pair[0]), "{pair:?}");
        }
    }

    #[test]
    fn sorts_pre_release_ladder() {
        let ladder = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
        ];
        let mut versions = ladder;
        versions.reverse();
        versions.swap(2, 6);
        sort(&mut versions);
        assert_eq!(versions, ladder);
    }

    #[test]
    fn try_sort_leaves_slice_untouched_on_error() {
        let mut versions = vec![
            b"2.0".as_slice(),
            b"1.0".as_slice(),
            b"\xc3\x28".as_slice(),
        ];
        let err = try_sort(&mut versions).unwrap_err();
        assert_eq!(err.valid_up_to(), 0);
        assert_eq!(versions[0], b"2.0");
        assert_eq!(versions[1], b"1.0");
        assert_eq!(versions[2], b"\xc3\x28");
    }

    #[test]
    fn try_sort_accepts_malformed_appendix() {
        let mut versions = vec![b"2.0+\xff".as_slice(), b"1.0".as_slice()];
        try_sort(&mut versions).unwrap();
        assert_eq!(versions[0], b"1.0");
        assert_eq!(versions[1], b"2.0+\xff");
    }

    #[test]
    fn version_slice_primitives() {
        let mut versions = ["1.1", "1.0", "1.0-beta"];
        let mut slice = VersionSlice::new(&mut versions);

        assert_eq!(slice.len(), 3);
        assert!(!slice.is_empty());
        assert!(slice.less(1, 0));
        assert!(!slice.less(0, 1));
        assert!(slice.less(2, 1));

        slice.swap(0, 2);
        assert_eq!(slice.into_inner(), ["1.0-beta", "1.0", "1.1"]);
    }

    #[test]
    #[should_panic(expected = "not valid UTF-8")]
    fn version_slice_sort_panics_on_invalid_input() {
        let mut versions = vec![b"1.0".as_slice(), b"\xff".as_slice()];
        VersionSlice::new(&mut versions).sort();
    }

    #[test]
    fn version_slice_try_sort() {
        let mut versions = vec!["0.10", "0.9"];
        VersionSlice::new(&mut versions).try_sort().unwrap();
        assert_eq!(versions, ["0.9", "0.10"]);
    }
}
