use formular_core::error::CoreError;

/// Why a page render was aborted. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The request could not be sent or the body could not be read.
    #[error("Failed to fetch field list: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Field list request returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a `{ "fields": [...] }` document.
    #[error("Malformed field list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
