//! Authentication and user account management.

pub mod admin;
pub mod service;

pub use admin::UserAdminService;
pub use service::UserService;
