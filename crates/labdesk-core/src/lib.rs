//! # labdesk-core
//!
//! Core crate for LabDesk, the departmental intranet service. Contains
//! configuration schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other LabDesk crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
