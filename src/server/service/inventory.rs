use sea_orm::DatabaseConnection;

use crate::server::{
    data::inventory::InventoryRepository,
    error::AppError,
    model::inventory::{InventoryFilter, InventoryItem, SaveInventoryItemParams},
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, AppError> {
        Ok(InventoryRepository::new(self.db).list(filter).await?)
    }

    pub async fn get(&self, id: i32) -> Result<InventoryItem, AppError> {
        InventoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    pub async fn create(&self, params: SaveInventoryItemParams) -> Result<InventoryItem, AppError> {
        validate(&params)?;

        Ok(InventoryRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveInventoryItemParams,
    ) -> Result<InventoryItem, AppError> {
        validate(&params)?;

        InventoryRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    /// Deletes an item; part lines that used it keep their values but lose the reference
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if InventoryRepository::new(self.db).delete(id).await? {
            Ok(())
        } else {
            Err(item_not_found(id))
        }
    }
}

fn item_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Inventory item {} not found", id))
}

fn validate(params: &SaveInventoryItemParams) -> Result<(), AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Missing required field(s): name".to_string()));
    }
    if params.quantity < 0 {
        return Err(AppError::BadRequest("quantity must not be negative".to_string()));
    }
    if params.minimum_stock.is_some_and(|minimum| minimum < 0) {
        return Err(AppError::BadRequest(
            "minimumStock must not be negative".to_string(),
        ));
    }
    if !params.unit_price.is_finite() || params.unit_price < 0.0 {
        return Err(AppError::BadRequest("unitPrice must not be negative".to_string()));
    }

    Ok(())
}
