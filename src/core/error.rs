use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("invalid period range: end ({end}) must be greater than start ({start})")]
    InvalidRange { start: u32, end: u32 },

    #[error("inconsistent investment bounds: minimum {min} exceeds maximum {max}")]
    InconsistentBounds { min: f64, max: f64 },

    #[error("scenario parameter `{name}` must be finite")]
    NonFiniteParameter { name: &'static str },
}
