//! Dashboard aggregation.
//!
//! Builds every dashboard section from a single pass over the order summaries, plus the
//! low stock listing and row counts.

use sea_orm::DatabaseConnection;

use crate::{
    model::service_order::ServiceOrderStatus,
    server::{
        data::{
            client::ClientRepository, inventory::InventoryRepository,
            service_order::ServiceOrderRepository,
        },
        error::AppError,
        model::{
            dashboard::{Dashboard, DashboardCounts, StatusCard},
            inventory::InventoryFilter,
            service_order::{ServiceOrderFilter, ServiceOrderSummary},
        },
    },
};

/// Number of orders shown in the recent orders panel.
pub const RECENT_ORDER_LIMIT: usize = 8;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Dashboard, AppError> {
        let orders = ServiceOrderRepository::new(self.db)
            .list_summaries(&ServiceOrderFilter::default())
            .await?;

        let inventory_repo = InventoryRepository::new(self.db);
        let low_stock_items = inventory_repo
            .list(&InventoryFilter {
                search: None,
                low_stock_only: true,
            })
            .await?;

        let counts = DashboardCounts {
            clients: ClientRepository::new(self.db).count().await?,
            inventory_items: inventory_repo.count().await?,
            open_orders: orders.iter().filter(|o| o.status.is_open()).count() as u64,
        };

        Ok(Dashboard {
            status_cards: status_cards(&orders),
            pending_approvals: pending_approvals(&orders),
            recent_orders: orders.into_iter().take(RECENT_ORDER_LIMIT).collect(),
            low_stock_items,
            counts,
        })
    }
}

/// One card per status that has at least one order, in lifecycle order.
fn status_cards(orders: &[ServiceOrderSummary]) -> Vec<StatusCard> {
    ServiceOrderStatus::ALL
        .into_iter()
        .filter_map(|status| {
            let matching = orders.iter().filter(|o| o.status == status);
            let (count, total) = matching.fold((0u64, 0.0), |(count, total), order| {
                (count + 1, total + order.total_cost)
            });

            (count > 0).then_some(StatusCard {
                status,
                count,
                total,
            })
        })
        .collect()
}

/// Orders awaiting approval, oldest first.
fn pending_approvals(orders: &[ServiceOrderSummary]) -> Vec<ServiceOrderSummary> {
    let mut pending: Vec<ServiceOrderSummary> = orders
        .iter()
        .filter(|o| o.status == ServiceOrderStatus::AwaitingApproval)
        .cloned()
        .collect();
    pending.sort_by_key(|o| (o.created_at, o.id));
    pending
}
