use crate::server::{
    data::inventory::InventoryRepository,
    model::inventory::{InventoryFilter, SaveInventoryItemParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;

fn params(name: &str) -> SaveInventoryItemParams {
    SaveInventoryItemParams {
        name: name.to_string(),
        part_number: Some("FLT-001".to_string()),
        quantity: 12,
        minimum_stock: Some(4),
        unit_price: 35.9,
        location: Some("Shelf A".to_string()),
    }
}
