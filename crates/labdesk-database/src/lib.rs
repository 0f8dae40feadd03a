//! # labdesk-database
//!
//! PostgreSQL connection pool management, the migration runner, and
//! repository implementations for every LabDesk entity.

pub mod connection;
pub mod migration;
pub mod repositories;
