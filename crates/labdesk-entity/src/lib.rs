//! # labdesk-entity
//!
//! Domain entity models for LabDesk: users with roles and departments,
//! announcements with comments, endorsement tickets with a lifecycle and
//! an editable communication trail, and QC test status records.

pub mod announcement;
pub mod endorsement;
pub mod qc;
pub mod user;
