//! # labdesk-auth
//!
//! Authentication and authorization for LabDesk:
//!
//! - [`jwt`] — HS256 token creation and validation.
//! - [`password`] — Argon2id hashing and verification.
//! - [`policy`] — the pure authorization predicate layer. Every mutating
//!   route handler gates through one of its `require_*` guards.

pub mod jwt;
pub mod password;
pub mod policy;
