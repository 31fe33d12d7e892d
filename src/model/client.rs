use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_info: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for both creating and replacing a client.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveClientDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub vehicle_info: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientSearchParams {
    /// Case-insensitive match against name, phone or email
    pub search: Option<String>,
}
