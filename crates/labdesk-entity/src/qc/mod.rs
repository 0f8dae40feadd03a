//! QC test status tracking entities.

pub mod model;
pub mod section;
pub mod status;

pub use model::{QcTest, UpsertQcTest};
pub use section::LabSection;
pub use status::QcStatus;
