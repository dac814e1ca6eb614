#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The hosting document has no element with the requested id.
    #[error("Container element '#{0}' not found")]
    ContainerMissing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
