//! Error types for pagination rendering

use thiserror::Error;

/// Result type alias for pagination operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while paginating or rendering controls
#[derive(Error, Debug)]
pub enum Error {
    /// Page size must be at least one item
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Requested page lies outside `1..=total_pages`
    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    /// The container element could not be located in the host page
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    /// No rendered control matches the given index or label
    #[error("Control not found: {0}")]
    ControlNotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render content
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
