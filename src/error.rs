use thiserror::Error;

/// Errors that can occur during browser probing operations
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Failed to launch the browser process
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// A page-level operation (open, close, configure) failed
    #[error("Page operation failed: {0}")]
    PageOperationFailed(String),

    /// Navigation did not complete
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// An element could not be found or did not appear in time
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// In-page JavaScript evaluation failed or returned an unusable value
    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// Screenshot capture failed
    #[error("Screenshot capture failed: {0}")]
    CaptureFailed(String),

    /// Configuration was missing or invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
