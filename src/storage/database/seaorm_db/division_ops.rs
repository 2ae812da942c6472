use crate::core::models::Division;
use crate::utils::error::{Result, RosterError};
use sea_orm::*;
use tracing::debug;

use super::super::entities;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Register a division
    pub async fn create_division(&self, division: &Division) -> Result<Division> {
        debug!("Creating division: {}", division.id);

        if self.find_division(&division.id).await?.is_some() {
            return Err(RosterError::conflict(format!(
                "Division {} already exists",
                division.id
            )));
        }

        let active_model = entities::division::ActiveModel {
            division_id: Set(division.id.clone()),
            division_name: Set(division.name.clone()),
            created_at: Set(chrono::Utc::now().into()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(model.to_domain())
    }

    /// Find division by key
    pub async fn find_division(&self, division_id: &str) -> Result<Option<Division>> {
        debug!("Finding division: {}", division_id);

        let model = entities::Division::find_by_id(division_id.to_string())
            .one(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }
}
