use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

/// Lifecycle status of a service order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOrderStatus {
    AwaitingApproval,
    InProgress,
    Finished,
    Delivered,
}

impl ServiceOrderStatus {
    pub const ALL: [ServiceOrderStatus; 4] = [
        Self::AwaitingApproval,
        Self::InProgress,
        Self::Finished,
        Self::Delivered,
    ];

    /// Value stored in the database and used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingApproval => "awaiting_approval",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Delivered => "delivered",
        }
    }

    /// Human readable label shown on dashboards and lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingApproval => "Awaiting approval",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
            Self::Delivered => "Delivered",
        }
    }

    /// Whether the order is still being worked on or waiting for pickup.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Delivered)
    }
}

impl Default for ServiceOrderStatus {
    fn default() -> Self {
        Self::AwaitingApproval
    }
}

impl fmt::Display for ServiceOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceOrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| format!("unknown service order status '{}'", value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborLineDto {
    pub id: i32,
    pub description: String,
    pub hours: f64,
    pub rate: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartLineDto {
    pub id: i32,
    pub inventory_id: Option<i32>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborLineInputDto {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartLineInputDto {
    pub inventory_id: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
}

/// Row of the order list and dashboard tables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderSummaryDto {
    pub id: i32,
    pub code: String,
    pub vehicle: String,
    pub status: ServiceOrderStatus,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client_name: String,
    pub total_cost: f64,
}

/// Full order view including line items and computed costs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderDto {
    pub id: i32,
    pub code: String,
    pub client_id: i32,
    pub client_name: String,
    pub vehicle: String,
    pub status: ServiceOrderStatus,
    pub status_label: String,
    pub description: String,
    pub mechanic_notes: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub labor_cost: f64,
    pub parts_cost: f64,
    pub additional_cost: f64,
    pub discount: f64,
    pub total_cost: f64,
    pub labor: Vec<LaborLineDto>,
    pub parts: Vec<PartLineDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceOrderDto {
    pub client_id: Option<i32>,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<ServiceOrderStatus>,
    pub mechanic_notes: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub approved: bool,
    pub additional_cost: Option<f64>,
    /// Flat amount subtracted from the order total
    pub discount: Option<f64>,
    #[serde(default)]
    pub labor: Vec<LaborLineInputDto>,
    #[serde(default)]
    pub parts: Vec<PartLineInputDto>,
}

/// Partial update of a service order.
///
/// Absent fields are left unchanged. For nullable fields an explicit `null` clears the
/// stored value. `labor` and `parts`, when present, replace every existing line.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceOrderDto {
    pub client_id: Option<i32>,
    pub vehicle: Option<String>,
    pub description: Option<String>,
    pub status: Option<ServiceOrderStatus>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub mechanic_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub scheduled_date: Option<Option<NaiveDate>>,
    pub approved: Option<bool>,
    pub additional_cost: Option<f64>,
    pub discount: Option<f64>,
    pub labor: Option<Vec<LaborLineInputDto>>,
    pub parts: Option<Vec<PartLineInputDto>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateServiceOrderStatusDto {
    pub status: ServiceOrderStatus,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServiceOrderSearchParams {
    /// Only return orders with this status
    pub status: Option<ServiceOrderStatus>,
    /// Case-insensitive match against code, vehicle or client name
    pub search: Option<String>,
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
