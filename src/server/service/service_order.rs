//! Service order business rules.
//!
//! Validates order input before it reaches the repository: required fields, non-negative
//! amounts, and that referenced clients and inventory items exist. Totals are never
//! accepted from callers; they are derived from the stored lines.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        client::ClientRepository, inventory::InventoryRepository,
        service_order::ServiceOrderRepository,
    },
    error::AppError,
    model::service_order::{
        CreateServiceOrderParams, LaborLineParams, PartLineParams, ServiceOrder,
        ServiceOrderFilter, ServiceOrderSummary, UpdateServiceOrderParams,
    },
};

pub struct ServiceOrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceOrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: &ServiceOrderFilter,
    ) -> Result<Vec<ServiceOrderSummary>, AppError> {
        Ok(ServiceOrderRepository::new(self.db)
            .list_summaries(filter)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<ServiceOrder, AppError> {
        ServiceOrderRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// Creates an order with its lines
    ///
    /// # Returns
    /// - `Ok(ServiceOrder)` - Created order with its assigned code
    /// - `Err(AppError::BadRequest)` - Missing fields, negative amounts, unknown client or
    ///   inventory item
    pub async fn create(&self, params: CreateServiceOrderParams) -> Result<ServiceOrder, AppError> {
        let mut missing = Vec::new();
        if params.client_id.is_none() {
            missing.push("clientId");
        }
        if params.vehicle.is_empty() {
            missing.push("vehicle");
        }
        if params.description.is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        validate_amount("additionalCost", params.additional_cost)?;
        validate_amount("discount", params.discount)?;
        validate_labor(&params.labor)?;
        validate_parts(&params.parts)?;

        if let Some(client_id) = params.client_id {
            self.ensure_client_exists(client_id).await?;
        }
        self.ensure_inventory_exists(&params.parts).await?;

        Ok(ServiceOrderRepository::new(self.db).create(params).await?)
    }

    /// Applies a partial update
    ///
    /// # Returns
    /// - `Ok(ServiceOrder)` - Updated order
    /// - `Err(AppError::BadRequest)` - Nothing to update, blank required field, negative
    ///   amounts, unknown client or inventory item
    /// - `Err(AppError::NotFound)` - No order with that ID
    pub async fn update(&self, params: UpdateServiceOrderParams) -> Result<ServiceOrder, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        if params.vehicle.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("vehicle must not be blank".to_string()));
        }
        if params.description.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest(
                "description must not be blank".to_string(),
            ));
        }
        if let Some(additional_cost) = params.additional_cost {
            validate_amount("additionalCost", additional_cost)?;
        }
        if let Some(discount) = params.discount {
            validate_amount("discount", discount)?;
        }
        if let Some(labor) = &params.labor {
            validate_labor(labor)?;
        }
        if let Some(parts) = &params.parts {
            validate_parts(parts)?;
            self.ensure_inventory_exists(parts).await?;
        }
        if let Some(client_id) = params.client_id {
            self.ensure_client_exists(client_id).await?;
        }

        let id = params.id;
        ServiceOrderRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ServiceOrderRepository::new(self.db).delete(id).await? {
            Ok(())
        } else {
            Err(order_not_found(id))
        }
    }

    async fn ensure_client_exists(&self, client_id: i32) -> Result<(), AppError> {
        if ClientRepository::new(self.db).exists(client_id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Client {} does not exist",
                client_id
            )))
        }
    }

    async fn ensure_inventory_exists(&self, parts: &[PartLineParams]) -> Result<(), AppError> {
        let requested: Vec<i32> = parts.iter().filter_map(|p| p.inventory_id).collect();
        let existing = InventoryRepository::new(self.db)
            .existing_ids(&requested)
            .await?;

        match requested.iter().find(|id| !existing.contains(*id)) {
            Some(missing) => Err(AppError::BadRequest(format!(
                "Inventory item {} does not exist",
                missing
            ))),
            None => Ok(()),
        }
    }
}

fn order_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Service order {} not found", id))
}

fn validate_amount(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{} must be a non-negative number",
            field
        )))
    }
}

fn validate_labor(lines: &[LaborLineParams]) -> Result<(), AppError> {
    for line in lines {
        validate_amount("labor hours", line.hours)?;
        validate_amount("labor rate", line.rate)?;
    }
    Ok(())
}

fn validate_parts(lines: &[PartLineParams]) -> Result<(), AppError> {
    for line in lines {
        validate_amount("part quantity", line.quantity)?;
        validate_amount("part unitPrice", line.unit_price)?;
    }
    Ok(())
}
