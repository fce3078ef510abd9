pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate cell id: {id}")]
    DuplicateId { id: String },

    #[error("diagram JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
