//! # catalog-api
//!
//! HTTP API layer for Catalog built on Axum.
//!
//! Exposes the category use cases as JSON endpoints under `/api`, together
//! with request extractors, DTOs, request logging, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiErrorResponse};
pub use state::AppState;
