//! Service order data repository for database operations.
//!
//! Orders are always loaded together with their client name and line items so that cost
//! totals can be derived by the domain model. Creating and updating an order, including
//! replacing its lines, happens inside a single transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::service_order::{
    CreateServiceOrderParams, LaborLine, LaborLineParams, PartLine, PartLineParams,
    ServiceOrder, ServiceOrderFilter, ServiceOrderSummary, UpdateServiceOrderParams,
};

/// Formats the human-facing order code for a sequence number, e.g. `OS-0007`.
pub fn format_order_code(sequence: i32) -> String {
    format!("OS-{:04}", sequence)
}

pub struct ServiceOrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceOrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists order summaries, most recently updated first.
    ///
    /// # Arguments
    /// - `filter` - Optional status and search term; the term matches code, vehicle or
    ///   client name (case-insensitive)
    ///
    /// # Returns
    /// - `Ok(Vec<ServiceOrderSummary>)` - Matching orders with computed totals
    /// - `Err(DbErr)` - Database error or an unknown stored status
    pub async fn list_summaries(
        &self,
        filter: &ServiceOrderFilter,
    ) -> Result<Vec<ServiceOrderSummary>, DbErr> {
        let mut query = entity::prelude::ServiceOrder::find()
            .find_also_related(entity::prelude::Client);

        if let Some(status) = filter.status {
            query = query.filter(entity::service_order::Column::Status.eq(status.as_str()));
        }

        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::service_order::Column::Code.contains(term))
                    .add(entity::service_order::Column::Vehicle.contains(term))
                    .add(entity::client::Column::Name.contains(term)),
            );
        }

        let rows = query
            .order_by_desc(entity::service_order::Column::UpdatedAt)
            .order_by_desc(entity::service_order::Column::Id)
            .all(self.db)
            .await?;

        let order_ids: Vec<i32> = rows.iter().map(|(order, _)| order.id).collect();
        let (mut labor_by_order, mut parts_by_order) = self.load_lines(&order_ids).await?;

        rows.into_iter()
            .map(|(order, client)| {
                let labor = labor_by_order.remove(&order.id).unwrap_or_default();
                let parts = parts_by_order.remove(&order.id).unwrap_or_default();
                ServiceOrderSummary::from_entity(order, client, &labor, &parts)
            })
            .collect()
    }

    /// Gets an order with its client name and all line items.
    ///
    /// # Returns
    /// - `Ok(Some(ServiceOrder))` - Order found
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error or an unknown stored status
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceOrder>, DbErr> {
        let Some((order, client)) = entity::prelude::ServiceOrder::find_by_id(id)
            .find_also_related(entity::prelude::Client)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let labor = entity::prelude::LaborLine::find()
            .filter(entity::labor_line::Column::ServiceOrderId.eq(id))
            .order_by_asc(entity::labor_line::Column::Id)
            .all(self.db)
            .await?;

        let parts = entity::prelude::PartLine::find()
            .filter(entity::part_line::Column::ServiceOrderId.eq(id))
            .order_by_asc(entity::part_line::Column::Id)
            .all(self.db)
            .await?;

        ServiceOrder::from_entity(order, client, labor, parts).map(Some)
    }

    /// Creates an order and its lines, assigning the next `OS-NNNN` code.
    ///
    /// The sequence number is the highest existing order ID plus one.
    ///
    /// # Returns
    /// - `Ok(ServiceOrder)` - The created order as it reads back from the database
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: CreateServiceOrderParams) -> Result<ServiceOrder, DbErr> {
        let client_id = params
            .client_id
            .ok_or_else(|| DbErr::Custom("Service order requires a client".to_string()))?;

        let txn = self.db.begin().await?;

        let last_id = entity::prelude::ServiceOrder::find()
            .order_by_desc(entity::service_order::Column::Id)
            .one(&txn)
            .await?
            .map(|order| order.id)
            .unwrap_or(0);

        let now = Utc::now();
        let order = entity::service_order::ActiveModel {
            code: ActiveValue::Set(format_order_code(last_id + 1)),
            client_id: ActiveValue::Set(client_id),
            vehicle: ActiveValue::Set(params.vehicle),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            mechanic_notes: ActiveValue::Set(params.mechanic_notes),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            approved: ActiveValue::Set(params.approved),
            additional_cost: ActiveValue::Set(params.additional_cost),
            discount: ActiveValue::Set(params.discount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_labor_lines(&txn, order.id, params.labor).await?;
        insert_part_lines(&txn, order.id, params.parts).await?;

        txn.commit().await?;

        self.get_by_id(order.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Service order with id {} not found after creation",
            order.id
        )))
    }

    /// Applies a partial update and optionally replaces the order's lines.
    ///
    /// `updated_at` is always touched.
    ///
    /// # Returns
    /// - `Ok(Some(ServiceOrder))` - Updated order
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(
        &self,
        params: UpdateServiceOrderParams,
    ) -> Result<Option<ServiceOrder>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::ServiceOrder::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::service_order::ActiveModel = existing.into();
        if let Some(client_id) = params.client_id {
            active.client_id = ActiveValue::Set(client_id);
        }
        if let Some(vehicle) = params.vehicle {
            active.vehicle = ActiveValue::Set(vehicle);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(mechanic_notes) = params.mechanic_notes {
            active.mechanic_notes = ActiveValue::Set(mechanic_notes);
        }
        if let Some(scheduled_date) = params.scheduled_date {
            active.scheduled_date = ActiveValue::Set(scheduled_date);
        }
        if let Some(approved) = params.approved {
            active.approved = ActiveValue::Set(approved);
        }
        if let Some(additional_cost) = params.additional_cost {
            active.additional_cost = ActiveValue::Set(additional_cost);
        }
        if let Some(discount) = params.discount {
            active.discount = ActiveValue::Set(discount);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(&txn).await?;

        if let Some(labor) = params.labor {
            entity::prelude::LaborLine::delete_many()
                .filter(entity::labor_line::Column::ServiceOrderId.eq(params.id))
                .exec(&txn)
                .await?;
            insert_labor_lines(&txn, params.id, labor).await?;
        }

        if let Some(parts) = params.parts {
            entity::prelude::PartLine::delete_many()
                .filter(entity::part_line::Column::ServiceOrderId.eq(params.id))
                .exec(&txn)
                .await?;
            insert_part_lines(&txn, params.id, parts).await?;
        }

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes an order together with its labor and part lines.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::LaborLine::delete_many()
            .filter(entity::labor_line::Column::ServiceOrderId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::PartLine::delete_many()
            .filter(entity::part_line::Column::ServiceOrderId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::ServiceOrder::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts orders belonging to a client.
    pub async fn count_by_client(&self, client_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ServiceOrder::find()
            .filter(entity::service_order::Column::ClientId.eq(client_id))
            .count(self.db)
            .await
    }

    /// Loads labor and part lines for many orders in two queries, grouped by order ID.
    async fn load_lines(
        &self,
        order_ids: &[i32],
    ) -> Result<(HashMap<i32, Vec<LaborLine>>, HashMap<i32, Vec<PartLine>>), DbErr> {
        let mut labor_by_order: HashMap<i32, Vec<LaborLine>> = HashMap::new();
        let mut parts_by_order: HashMap<i32, Vec<PartLine>> = HashMap::new();

        if order_ids.is_empty() {
            return Ok((labor_by_order, parts_by_order));
        }

        for line in entity::prelude::LaborLine::find()
            .filter(entity::labor_line::Column::ServiceOrderId.is_in(order_ids.to_vec()))
            .all(self.db)
            .await?
        {
            labor_by_order
                .entry(line.service_order_id)
                .or_default()
                .push(LaborLine::from_entity(line));
        }

        for line in entity::prelude::PartLine::find()
            .filter(entity::part_line::Column::ServiceOrderId.is_in(order_ids.to_vec()))
            .all(self.db)
            .await?
        {
            parts_by_order
                .entry(line.service_order_id)
                .or_default()
                .push(PartLine::from_entity(line));
        }

        Ok((labor_by_order, parts_by_order))
    }
}

async fn insert_labor_lines(
    txn: &DatabaseTransaction,
    service_order_id: i32,
    lines: Vec<LaborLineParams>,
) -> Result<(), DbErr> {
    for line in lines {
        entity::labor_line::ActiveModel {
            service_order_id: ActiveValue::Set(service_order_id),
            description: ActiveValue::Set(line.description),
            hours: ActiveValue::Set(line.hours),
            rate: ActiveValue::Set(line.rate),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}

async fn insert_part_lines(
    txn: &DatabaseTransaction,
    service_order_id: i32,
    lines: Vec<PartLineParams>,
) -> Result<(), DbErr> {
    for line in lines {
        entity::part_line::ActiveModel {
            service_order_id: ActiveValue::Set(service_order_id),
            inventory_id: ActiveValue::Set(line.inventory_id),
            description: ActiveValue::Set(line.description),
            quantity: ActiveValue::Set(line.quantity),
            unit_price: ActiveValue::Set(line.unit_price),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}
