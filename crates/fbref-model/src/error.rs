use thiserror::Error;

/// Errors raised while building or validating model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The table layout does not describe a usable category mapping.
    #[error("invalid table layout: {0}")]
    InvalidLayout(String),

    /// A category name did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
