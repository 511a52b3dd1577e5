use cvd_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LensError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimError),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for LensError {
    fn from(e: tokio::task::JoinError) -> Self {
        LensError::Task(e.to_string())
    }
}
