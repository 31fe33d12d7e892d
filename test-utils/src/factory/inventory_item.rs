//! Inventory item factory for creating test stock entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inventory items with customizable fields.
pub struct InventoryItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    part_number: Option<String>,
    quantity: i32,
    minimum_stock: Option<i32>,
    unit_price: f64,
    location: Option<String>,
}

impl<'a> InventoryItemFactory<'a> {
    /// Creates a new InventoryItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Part {id}"`
    /// - part_number: `"PN-{id}"`
    /// - quantity: `10`
    /// - minimum_stock: `None`
    /// - unit_price: `25.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Part {}", id),
            part_number: Some(format!("PN-{:04}", id)),
            quantity: 10,
            minimum_stock: None,
            unit_price: 25.0,
            location: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn part_number(mut self, part_number: Option<&str>) -> Self {
        self.part_number = part_number.map(str::to_string);
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn minimum_stock(mut self, minimum_stock: Option<i32>) -> Self {
        self.minimum_stock = minimum_stock;
        self
    }

    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn location(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::to_string);
        self
    }

    /// Builds and inserts the inventory item into the database.
    pub async fn build(self) -> Result<entity::inventory_item::Model, DbErr> {
        entity::inventory_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            part_number: ActiveValue::Set(self.part_number),
            quantity: ActiveValue::Set(self.quantity),
            minimum_stock: ActiveValue::Set(self.minimum_stock),
            unit_price: ActiveValue::Set(self.unit_price),
            location: ActiveValue::Set(self.location),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory item with default values.
pub async fn create_inventory_item(
    db: &DatabaseConnection,
) -> Result<entity::inventory_item::Model, DbErr> {
    InventoryItemFactory::new(db).build().await
}
