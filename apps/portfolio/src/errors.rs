use thiserror::Error;

use crate::contact::emailjs::DeliveryError;
use crate::content::ContentError;

/// Application-level error type for the CLI surface.
///
/// Delivery failures never reach here through the contact flow; the flow turns
/// them into toasts. `Delivery` covers building the HTTP client. Clipboard
/// failures stop at `CopyButton` and have no variant.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotFound(_) => 2,
            AppError::Content(_) => 3,
            AppError::Delivery(_) => 4,
            AppError::Json(_) | AppError::Internal(_) => 1,
        }
    }
}
