//! QC test record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::section::LabSection;
use super::status::QcStatus;

/// A QC test status record on the daily board.
///
/// Records are upserted by `name`, matched case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QcTest {
    /// Unique identifier.
    pub id: Uuid,
    /// Test name; the case-insensitive upsert key.
    pub name: String,
    /// Current QC status.
    pub status: QcStatus,
    /// Remaining test count; meaningful only for `Remaining Test`.
    pub remaining: Option<i32>,
    /// Laboratory section, if assigned.
    pub section: Option<LabSection>,
    /// Free-text remarks.
    pub remarks: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl QcTest {
    /// Whether the daily reset would be a no-op for this record.
    pub fn is_reset(&self) -> bool {
        self.status == QcStatus::Ongoing && self.remarks.is_empty()
    }
}

/// Payload for the create-or-update operation.
///
/// When `id` is set the record is updated in place; otherwise a
/// case-insensitive match on `name` decides between update and insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertQcTest {
    /// Explicit identifier for an in-place update.
    pub id: Option<Uuid>,
    /// Test name.
    pub name: String,
    /// QC status.
    pub status: QcStatus,
    /// Remaining test count.
    pub remaining: Option<i32>,
    /// Laboratory section.
    pub section: Option<LabSection>,
    /// Free-text remarks.
    pub remarks: String,
}
