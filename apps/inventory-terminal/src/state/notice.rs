//! # Notices
//!
//! Transient, non-blocking messages shown once after an action, the
//! terminal equivalent of a toast. Each one is stamped with the UTC time it
//! was issued, e.g. `14:02:31 [ok] Product registered successfully!`.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        Notice::error(err.message.clone())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        write!(
            f,
            "{} [{}] {}",
            self.issued_at.format("%H:%M:%S"),
            tag,
            self.message
        )
    }
}
