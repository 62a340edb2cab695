//! Spaces Error Types
//!
//! This module provides space-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Space-specific result type alias
pub type SpaceResult<T> = Result<T, SpaceError>;

/// Space-specific error variants
#[derive(Debug, Error)]
pub enum SpaceError {
    /// Space not found
    #[error("Space not found")]
    SpaceNotFound,

    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Reply not found within a post
    #[error("Reply not found")]
    ReplyNotFound,

    /// Session not found
    #[error("Session not found")]
    SessionNotFound,

    /// Re-archive attempted without force
    #[error("Space is already archived")]
    AlreadyArchived,

    /// Join or post attempted against a non-active space
    #[error("Space is not active")]
    SpaceNotActive,

    /// Join code failed validation
    #[error("Invalid join code: {0}")]
    InvalidJoinCode(String),

    /// ends_at not after starts_at
    #[error("Space window is invalid: {0}")]
    InvalidWindow(String),

    /// Difficulty score outside 0..=100
    #[error("Difficulty score out of range: {0}")]
    InvalidScore(i32),

    /// Archiving a single space exceeded the configured timeout
    #[error("Archiving timed out")]
    ArchiveTimeout,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SpaceError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpaceError::SpaceNotFound
            | SpaceError::PostNotFound
            | SpaceError::ReplyNotFound
            | SpaceError::SessionNotFound => ErrorKind::NotFound,
            SpaceError::AlreadyArchived | SpaceError::SpaceNotActive => ErrorKind::Conflict,
            SpaceError::InvalidJoinCode(_)
            | SpaceError::InvalidWindow(_)
            | SpaceError::InvalidScore(_) => ErrorKind::BadRequest,
            SpaceError::ArchiveTimeout => ErrorKind::RequestTimeout,
            SpaceError::Database(_) | SpaceError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            SpaceError::AlreadyArchived => err.with_action("Pass force to re-archive"),
            SpaceError::SpaceNotActive => err.with_action("Check the join code with the tutor"),
            _ => err,
        }
    }
}

impl From<AppError> for SpaceError {
    fn from(err: AppError) -> Self {
        SpaceError::Internal(err.to_string())
    }
}
