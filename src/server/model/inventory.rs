//! Inventory item domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::inventory::{InventoryItemDto, InventorySearchParams, SaveInventoryItemDto},
    server::model::non_blank,
};

/// Stocked part with its reorder threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub minimum_stock: Option<i32>,
    pub unit_price: f64,
    pub location: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn from_entity(entity: entity::inventory_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            part_number: entity.part_number,
            quantity: entity.quantity,
            minimum_stock: entity.minimum_stock,
            unit_price: entity.unit_price,
            location: entity.location,
            updated_at: entity.updated_at,
        }
    }

    /// True when a minimum stock is configured and the quantity is at or below it.
    pub fn is_low_stock(&self) -> bool {
        self.minimum_stock
            .is_some_and(|minimum| self.quantity <= minimum)
    }

    pub fn into_dto(self) -> InventoryItemDto {
        InventoryItemDto {
            low_stock: self.is_low_stock(),
            id: self.id,
            name: self.name,
            part_number: self.part_number,
            quantity: self.quantity,
            minimum_stock: self.minimum_stock,
            unit_price: self.unit_price,
            location: self.location,
            updated_at: self.updated_at,
        }
    }
}

/// Field values for creating an item or replacing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveInventoryItemParams {
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub minimum_stock: Option<i32>,
    pub unit_price: f64,
    pub location: Option<String>,
}

impl SaveInventoryItemParams {
    /// Converts the request body, defaulting omitted quantity and price to zero.
    pub fn from_dto(dto: SaveInventoryItemDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            part_number: non_blank(dto.part_number),
            quantity: dto.quantity.unwrap_or(0),
            minimum_stock: dto.minimum_stock,
            unit_price: dto.unit_price.unwrap_or(0.0),
            location: non_blank(dto.location),
        }
    }
}

/// Filters for listing inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub search: Option<String>,
    pub low_stock_only: bool,
}

impl InventoryFilter {
    pub fn from_params(params: InventorySearchParams) -> Self {
        Self {
            search: non_blank(params.search),
            low_stock_only: params.low_stock.unwrap_or(false),
        }
    }
}
