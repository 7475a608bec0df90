/// Errors from type construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A tryte string has the wrong length.
    #[error("invalid tryte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A tryte string contains a character outside `9A-Z`.
    #[error("invalid tryte character {ch:?} at position {position}")]
    InvalidTryte { ch: char, position: usize },
}
