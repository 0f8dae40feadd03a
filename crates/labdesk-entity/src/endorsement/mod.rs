//! Endorsement/ticket entity, lifecycle status, priority, and comments.
//!
//! "Endorsement" is the record type; "helpdesk ticket" is its
//! lifecycle-bearing usage. Both map to the same entity.

pub mod comment;
pub mod model;
pub mod priority;
pub mod status;

pub use comment::{CommentEdit, CreateEndorsementComment, EndorsementComment};
pub use model::{CreateEndorsement, Endorsement, UpdateEndorsement};
pub use priority::TicketPriority;
pub use status::TicketStatus;
