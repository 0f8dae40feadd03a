//! Announcement board operations.

pub mod service;

pub use service::AnnouncementService;
