//! Intuitive ordering for free-form version strings.
//!
//! Versions are split into runs of digits and non-digits, and compared run by
//! run. No particular version grammar is required, but `SemVer`-style
//! pre-release tags and build metadata are honoured.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(flexver::compare("1.0.1", "1.0.3"), Ordering::Less);
//! assert_eq!(flexver::compare("1.0.0-beta", "1.0.0"), Ordering::Less);
//! assert!(flexver::equal("1.0.0+fluffy", "1.0.0"));
//!
//! let mut versions = ["100", "1.0.2", "0.1.2", "0.3.4-pre"];
//! flexver::sort(&mut versions);
//! assert_eq!(versions, ["0.1.2", "0.3.4-pre", "1.0.2", "100"]);
//! ```

pub mod domain;
pub use domain::{
    Component, ComponentKind, DecomposeError, Decomposition, FlexVer, InvalidEncoding, Version,
    decompose,
};

mod compare;
pub use compare::{compare, equal, less_than, try_compare, try_equal, try_less_than};

/// Sorting helpers for collections of version strings.
pub mod sort;
pub use sort::{VersionSlice, sort, try_sort};

/// Parsing of plain-text comparison test vectors.
pub mod vectors;
