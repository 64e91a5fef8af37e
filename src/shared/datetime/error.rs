use thiserror::Error;

/// Errors raised while turning caller input into an [`Instant`](super::Instant).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Empty date-time input")]
    Empty,

    #[error(
        "Invalid date-time: '{0}'. Expected YYYY-MM-DD [HH:MM[:SS]], RFC3339 or epoch seconds"
    )]
    InvalidDateTime(String),

    #[error("Epoch value out of range: {0}")]
    OutOfRange(String),
}
