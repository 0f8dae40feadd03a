//! Repository implementations, one per aggregate.

pub mod announcement;
pub mod endorsement;
pub mod user;
