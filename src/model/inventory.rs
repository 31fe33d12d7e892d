use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub id: i32,
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub minimum_stock: Option<i32>,
    pub unit_price: f64,
    pub location: Option<String>,
    pub low_stock: bool,
    pub updated_at: DateTime<Utc>,
}

/// Request body for both creating and replacing an inventory item.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveInventoryItemDto {
    #[serde(default)]
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: Option<i32>,
    pub minimum_stock: Option<i32>,
    pub unit_price: Option<f64>,
    pub location: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InventorySearchParams {
    /// Case-insensitive match against name or part number
    pub search: Option<String>,
    /// Only return items at or below their minimum stock
    pub low_stock: Option<bool>,
}
