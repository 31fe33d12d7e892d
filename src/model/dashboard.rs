use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    inventory::InventoryItemDto,
    service_order::{ServiceOrderStatus, ServiceOrderSummaryDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCardDto {
    pub status: ServiceOrderStatus,
    pub label: String,
    pub count: u64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCountsDto {
    pub clients: u64,
    pub inventory_items: u64,
    pub open_orders: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub status_cards: Vec<StatusCardDto>,
    pub recent_orders: Vec<ServiceOrderSummaryDto>,
    pub pending_approvals: Vec<ServiceOrderSummaryDto>,
    pub low_stock_items: Vec<InventoryItemDto>,
    pub counts: DashboardCountsDto,
}
