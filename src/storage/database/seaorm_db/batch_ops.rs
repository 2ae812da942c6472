use crate::core::models::Batch;
use crate::utils::error::{Result, RosterError};
use sea_orm::*;
use tracing::debug;

use super::super::entities;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find a batch by division and label
    pub async fn find_batch(&self, division_id: &str, code: &str) -> Result<Option<Batch>> {
        debug!("Finding batch {} in division {}", code, division_id);

        let model = entities::Batch::find()
            .filter(entities::batch::Column::DivisionId.eq(division_id))
            .filter(entities::batch::Column::BatchCode.eq(code))
            .one(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Insert a new batch or update an existing one
    pub async fn save_batch(&self, batch: Batch) -> Result<Batch> {
        match batch.id {
            None => {
                debug!(
                    "Creating batch {} in division {} (capacity {})",
                    batch.code, batch.division_id, batch.capacity
                );
                let model = entities::batch::Model::from_domain(&batch)?
                    .insert(&self.db)
                    .await
                    .map_err(RosterError::Database)?;
                Ok(model.to_domain())
            }
            Some(id) => {
                debug!(
                    "Updating batch {} in division {} (capacity {})",
                    batch.code, batch.division_id, batch.capacity
                );
                let existing = entities::Batch::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(RosterError::Database)?
                    .ok_or_else(|| RosterError::not_found(format!("Batch {} not found", id)))?;

                let mut active_model: entities::batch::ActiveModel = existing.into();
                active_model.batch_code = Set(batch.code.clone());
                active_model.capacity =
                    Set(entities::to_column_int(batch.capacity, "capacity")?);
                active_model.is_active = Set(batch.is_active);
                active_model.updated_at = Set(chrono::Utc::now().into());

                let model = active_model
                    .update(&self.db)
                    .await
                    .map_err(RosterError::Database)?;
                Ok(model.to_domain())
            }
        }
    }

    /// List a division's batches in creation order
    pub async fn list_batches(&self, division_id: &str) -> Result<Vec<Batch>> {
        let models = entities::Batch::find()
            .filter(entities::batch::Column::DivisionId.eq(division_id))
            .order_by_asc(entities::batch::Column::BatchId)
            .all(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
