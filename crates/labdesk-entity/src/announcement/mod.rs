//! Announcement entity and its comment model.

pub mod comment;
pub mod model;

pub use comment::{AnnouncementComment, CreateAnnouncementComment};
pub use model::{Announcement, CreateAnnouncement, UpdateAnnouncement};
