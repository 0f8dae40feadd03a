//! Endorsement ticket lifecycle and communication trail operations.

pub mod service;

pub use service::EndorsementService;
