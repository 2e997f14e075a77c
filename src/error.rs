use thiserror::Error;

/// Failures reported by the tree's mutating operations.
///
/// A failed operation leaves the tree exactly as it was before the call.
/// The batch helpers stop at the first failing item and keep the items
/// already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The key is already present in the tree.
    #[error("key is already present in the tree")]
    DuplicateKey,
    /// The key is not present, so there is nothing to delete.
    #[error("key is not present in the tree")]
    NotFound,
    /// The key is NaN and cannot be ordered against stored keys.
    #[error("key is not comparable (NaN)")]
    InvalidKey,
}
