//! Convenience result type aliases for Catalog.

use crate::error::{AppError, RepositoryError};

/// A specialized `Result` type for Catalog operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;

/// Result of a repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
