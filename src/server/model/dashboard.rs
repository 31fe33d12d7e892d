//! Dashboard aggregate built from order summaries and inventory.

use crate::{
    model::{
        dashboard::{DashboardCountsDto, DashboardDto, StatusCardDto},
        service_order::ServiceOrderStatus,
    },
    server::model::{
        inventory::InventoryItem, round_currency, service_order::ServiceOrderSummary,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCard {
    pub status: ServiceOrderStatus,
    pub count: u64,
    pub total: f64,
}

impl StatusCard {
    pub fn into_dto(self) -> StatusCardDto {
        StatusCardDto {
            status: self.status,
            label: self.status.label().to_string(),
            count: self.count,
            total: round_currency(self.total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardCounts {
    pub clients: u64,
    pub inventory_items: u64,
    pub open_orders: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub status_cards: Vec<StatusCard>,
    pub recent_orders: Vec<ServiceOrderSummary>,
    pub pending_approvals: Vec<ServiceOrderSummary>,
    pub low_stock_items: Vec<InventoryItem>,
    pub counts: DashboardCounts,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            status_cards: self
                .status_cards
                .into_iter()
                .map(StatusCard::into_dto)
                .collect(),
            recent_orders: self
                .recent_orders
                .into_iter()
                .map(ServiceOrderSummary::into_dto)
                .collect(),
            pending_approvals: self
                .pending_approvals
                .into_iter()
                .map(ServiceOrderSummary::into_dto)
                .collect(),
            low_stock_items: self
                .low_stock_items
                .into_iter()
                .map(InventoryItem::into_dto)
                .collect(),
            counts: DashboardCountsDto {
                clients: self.counts.clients,
                inventory_items: self.counts.inventory_items,
                open_orders: self.counts.open_orders,
            },
        }
    }
}
