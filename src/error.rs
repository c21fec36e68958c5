use thiserror::Error;

/// Fatal analysis errors. The run is deterministic and pure, so there is no
/// retry path: any of these aborts before output is written.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A mass is non-positive, a required subset is empty, or a value cannot
    /// be log-transformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer observations than the statistical minimum for the requested test.
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A zero-variance sequence was passed to a correlation or regression.
    /// Reported as a distinct outcome, never coerced to rho = 0.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
