use crate::engine::EngineError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout engine failed: {0}")]
    Engine(#[from] EngineError),

    #[error("layout was cancelled before the engine responded")]
    Cancelled,

    #[error("invalid layout options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
}
