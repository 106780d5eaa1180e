//! Domain models for version comparison.
//!
//! This module contains the component and decomposition types produced by
//! splitting a version string, and the value types that order by them.

/// Classified runs of characters and their pairwise ordering.
pub mod component;
pub use component::{Component, ComponentKind};

/// Splitting version strings into components.
pub mod decomposition;
pub use decomposition::{DecomposeError, Decomposition, InvalidEncoding, decompose};

mod version;
pub use version::{FlexVer, Version};
