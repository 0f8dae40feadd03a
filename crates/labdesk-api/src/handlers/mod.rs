//! Route handlers, organized by domain.

pub mod announcement;
pub mod endorsement;
pub mod health;
pub mod qc_test;
pub mod user;
