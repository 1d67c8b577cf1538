/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the data model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A difficulty string did not name one of the fixed tiers.
    #[error("Invalid difficulty '{0}'. Choose easy, normal, hard, or expert.")]
    UnknownDifficulty(String),

    /// A location identifier is not part of the world.
    #[error("unknown location: {0}")]
    UnknownLocation(String),
}
