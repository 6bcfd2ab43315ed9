//! Error types for the ribbon control suite.

use thiserror::Error;

use crate::ribbon::TabId;

/// Errors surfaced by the ribbon shell.
///
/// Ordinary view-layer state inconsistencies (an invisible widget during a
/// key-tip request, an out-of-range size override) are modeled as empty
/// results or nearest-value fallbacks, not as errors; only genuine API
/// misuse reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RibbonError {
    /// The tab is not registered with this ribbon.
    #[error("tab {0:?} is not registered with this ribbon")]
    UnknownTab(TabId),
}

/// A specialized Result type for ribbon operations.
pub type Result<T> = std::result::Result<T, RibbonError>;
