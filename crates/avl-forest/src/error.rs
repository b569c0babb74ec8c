use thiserror::Error;

/// Recoverable failures of the mutating tree operations.
///
/// Both leave the tree exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvlError {
    /// `add` of a value that is already present.
    #[error("DUPLICATE_KEY")]
    DuplicateKey,
    /// `remove` of a value that is not present.
    #[error("NOT_FOUND")]
    NotFound,
}
