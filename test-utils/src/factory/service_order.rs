//! Service order factory for creating test work orders.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test service orders with customizable fields.
///
/// The order is inserted without any labor or part lines; use the `labor_line` and
/// `part_line` factories to attach them.
pub struct ServiceOrderFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    code: String,
    vehicle: String,
    status: String,
    description: String,
    mechanic_notes: Option<String>,
    scheduled_date: Option<NaiveDate>,
    approved: bool,
    additional_cost: f64,
    discount: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> ServiceOrderFactory<'a> {
    /// Creates a new ServiceOrderFactory with default values.
    ///
    /// Defaults:
    /// - code: `"OS-T{id}"`
    /// - vehicle: `"Vehicle {id}"`
    /// - status: `"awaiting_approval"`
    /// - description: `"Service {id}"`
    /// - approved: `false`
    /// - additional_cost: `0.0`
    /// - discount: `0.0`
    /// - created_at / updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - ID of the client the order belongs to
    pub fn new(db: &'a DatabaseConnection, client_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            client_id,
            code: format!("OS-T{:04}", id),
            vehicle: format!("Vehicle {}", id),
            status: "awaiting_approval".to_string(),
            description: format!("Service {}", id),
            mechanic_notes: None,
            scheduled_date: None,
            approved: false,
            additional_cost: 0.0,
            discount: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = vehicle.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mechanic_notes(mut self, notes: Option<&str>) -> Self {
        self.mechanic_notes = notes.map(str::to_string);
        self
    }

    pub fn scheduled_date(mut self, date: Option<NaiveDate>) -> Self {
        self.scheduled_date = date;
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    pub fn additional_cost(mut self, additional_cost: f64) -> Self {
        self.additional_cost = additional_cost;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the service order into the database.
    pub async fn build(self) -> Result<entity::service_order::Model, DbErr> {
        entity::service_order::ActiveModel {
            code: ActiveValue::Set(self.code),
            client_id: ActiveValue::Set(self.client_id),
            vehicle: ActiveValue::Set(self.vehicle),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set(self.description),
            mechanic_notes: ActiveValue::Set(self.mechanic_notes),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            approved: ActiveValue::Set(self.approved),
            additional_cost: ActiveValue::Set(self.additional_cost),
            discount: ActiveValue::Set(self.discount),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service order with default values for the given client.
pub async fn create_service_order(
    db: &DatabaseConnection,
    client_id: i32,
) -> Result<entity::service_order::Model, DbErr> {
    ServiceOrderFactory::new(db, client_id).build().await
}
