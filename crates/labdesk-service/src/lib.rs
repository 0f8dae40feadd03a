//! # labdesk-service
//!
//! Business logic for the LabDesk intranet: authentication, user
//! management, announcements, endorsement tickets, and the QC test
//! board. Services own validation and policy enforcement; repositories
//! below them are plain data access.

pub mod announcement;
pub mod context;
pub mod endorsement;
pub mod qc;
pub mod user;
