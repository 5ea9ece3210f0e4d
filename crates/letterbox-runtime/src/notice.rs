use letterbox_types::LetterId;
use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-facing message (a toast) produced by a mailbox action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Toast for a finished delete request.
    pub fn for_deletion(id: &LetterId, result: &Result<()>) -> Self {
        match result {
            Ok(()) => Notice::success("Letter deleted"),
            Err(err) => {
                tracing::warn!(letter_id = %id, error = %err, "letter deletion failed");
                Notice::error(format!("Could not delete letter: {}", err))
            }
        }
    }
}
