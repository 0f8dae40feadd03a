//! Authorization policy layer.
//!
//! Every gate is a pure function of `(actor, record attributes)` with no
//! side effects, so the whole rule table is testable without a database.
//! [`rules`] holds the boolean predicates, one per action; [`guard`]
//! wraps each predicate into a `Result` that denies with an
//! authorization error. Route handlers call the guards through the
//! service layer and never re-derive the boolean expressions inline.

pub mod actor;
pub mod guard;
pub mod rules;

pub use actor::Actor;
