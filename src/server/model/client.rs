//! Client domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::client::{ClientDto, SaveClientDto},
    server::model::non_blank,
};

/// Workshop customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_info: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            vehicle_info: entity.vehicle_info,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            vehicle_info: self.vehicle_info,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Field values for creating a client or replacing an existing one.
///
/// Required fields are trimmed; blank optional fields are stored as `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveClientParams {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_info: Option<String>,
    pub notes: Option<String>,
}

impl SaveClientParams {
    pub fn from_dto(dto: SaveClientDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: dto.email.trim().to_string(),
            vehicle_info: non_blank(dto.vehicle_info),
            notes: non_blank(dto.notes),
        }
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
