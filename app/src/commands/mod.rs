//! Command layer
//!
//! Each command locks the hosted controller, applies one interaction and
//! answers with a serializable envelope. Rejected input never panics; it comes
//! back as `success: false` with the error message.

pub mod tabs;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        tracing::warn!(error = %error, "Command failed");
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
