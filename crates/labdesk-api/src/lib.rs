//! # labdesk-api
//!
//! HTTP API layer for LabDesk built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, tracing, request
//! logging), the token extractor, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
