//! # catalog-core
//!
//! Core crate for Catalog. Contains the repository and use-case traits,
//! configuration schemas, typed identifiers, the search parameter and
//! search result types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, IdError, RepositoryError};
pub use result::{AppResult, RepositoryResult};
