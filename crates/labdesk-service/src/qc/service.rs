//! QC test board: list, upsert, delete, and the daily reset.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use labdesk_core::error::AppError;
use labdesk_database::repositories::qc_test::QcTestRepository;
use labdesk_entity::qc::{QcTest, UpsertQcTest};

use crate::context::RequestContext;

/// Handles the QC test status board.
///
/// Board operations require an authenticated user but carry no role
/// gating; any staff member may update test statuses.
#[derive(Debug, Clone)]
pub struct QcService {
    repo: Arc<QcTestRepository>,
}

impl QcService {
    /// Creates a new QC service.
    pub fn new(repo: Arc<QcTestRepository>) -> Self {
        Self { repo }
    }

    /// Lists all QC test records, newest first.
    pub async fn list(&self) -> Result<Vec<QcTest>, AppError> {
        self.repo.find_all().await
    }

    /// Creates or updates a record.
    ///
    /// An explicit `id` updates that record in place; otherwise a
    /// case-insensitive match on `name` decides between update and
    /// insert.
    pub async fn upsert(&self, ctx: &RequestContext, data: UpsertQcTest) -> Result<QcTest, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Test name cannot be empty"));
        }

        let record = match data.id {
            Some(id) => self.repo.update(id, &data).await?,
            None => match self.repo.find_by_name(&data.name).await? {
                Some(existing) => self.repo.update(existing.id, &data).await?,
                None => self.repo.create(&data).await?,
            },
        };

        info!(
            qc_test_id = %record.id,
            name = %record.name,
            status = %record.status,
            updated_by = %ctx.user_id,
            "QC test upserted"
        );

        Ok(record)
    }

    /// Deletes a record from the board.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("QC test {id} not found")));
        }

        info!(qc_test_id = %id, deleted_by = %ctx.user_id, "QC test deleted");

        Ok(())
    }

    /// Resets every record to `Ongoing` with cleared remarks. Returns
    /// the number of records changed.
    pub async fn reset_all(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let count = self.repo.reset_all().await?;

        info!(reset_count = count, reset_by = %ctx.user_id, "QC board reset");

        Ok(count)
    }
}
