//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let client = ClientFactory::new(&db)
///     .name("Carla Lima")
///     .vehicle_info(Some("Corolla 2018"))
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: String,
    email: String,
    vehicle_info: Option<String>,
    notes: Option<String>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"`
    /// - phone: `"555-{id}"`
    /// - email: `"client{id}@example.com"`
    /// - vehicle_info, notes: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Client {}", id),
            phone: format!("555-{:04}", id),
            email: format!("client{}@example.com", id),
            vehicle_info: None,
            notes: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn vehicle_info(mut self, vehicle_info: Option<&str>) -> Self {
        self.vehicle_info = vehicle_info.map(str::to_string);
        self
    }

    pub fn notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes.map(str::to_string);
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            vehicle_info: ActiveValue::Set(self.vehicle_info),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}

/// Creates a client with a specific name.
pub async fn create_client_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).name(name).build().await
}
