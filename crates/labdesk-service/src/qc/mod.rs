//! QC test board operations.

pub mod service;

pub use service::QcService;
