//! Service order domain models and parameters.
//!
//! A service order tracks one repair job for a client's vehicle. Its cost is the sum of
//! its labor lines (hours × rate), its part lines (quantity × unit price) and a flat
//! additional cost, less a flat discount. Totals are derived from the lines every time an
//! order is loaded and are never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::service_order::{
        CreateServiceOrderDto, LaborLineDto, LaborLineInputDto, PartLineDto, PartLineInputDto,
        ServiceOrderDto, ServiceOrderSearchParams, ServiceOrderStatus, ServiceOrderSummaryDto,
        UpdateServiceOrderDto,
    },
    server::model::{non_blank, round_currency},
};

/// Parses a stored status column.
fn parse_status(order_id: i32, value: &str) -> Result<ServiceOrderStatus, DbErr> {
    value
        .parse::<ServiceOrderStatus>()
        .map_err(|e| DbErr::Custom(format!("Service order {}: {}", order_id, e)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaborLine {
    pub id: i32,
    pub description: String,
    pub hours: f64,
    pub rate: f64,
}

impl LaborLine {
    pub fn from_entity(entity: entity::labor_line::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            hours: entity.hours,
            rate: entity.rate,
        }
    }

    pub fn total(&self) -> f64 {
        round_currency(self.hours * self.rate)
    }

    pub fn into_dto(self) -> LaborLineDto {
        LaborLineDto {
            total: self.total(),
            id: self.id,
            description: self.description,
            hours: self.hours,
            rate: self.rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartLine {
    pub id: i32,
    pub inventory_id: Option<i32>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl PartLine {
    pub fn from_entity(entity: entity::part_line::Model) -> Self {
        Self {
            id: entity.id,
            inventory_id: entity.inventory_id,
            description: entity.description,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
        }
    }

    pub fn total(&self) -> f64 {
        round_currency(self.quantity * self.unit_price)
    }

    pub fn into_dto(self) -> PartLineDto {
        PartLineDto {
            total: self.total(),
            id: self.id,
            inventory_id: self.inventory_id,
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Cost breakdown of a service order, rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderTotals {
    pub labor_cost: f64,
    pub parts_cost: f64,
    pub additional_cost: f64,
    pub discount: f64,
    pub total_cost: f64,
}

impl OrderTotals {
    /// Sums line totals and the additional cost, then subtracts the discount.
    ///
    /// Orders without lines total the additional cost less the discount. The total never
    /// drops below zero.
    pub fn compute(
        labor: &[LaborLine],
        parts: &[PartLine],
        additional_cost: f64,
        discount: f64,
    ) -> Self {
        let labor_cost = round_currency(labor.iter().map(LaborLine::total).sum());
        let parts_cost = round_currency(parts.iter().map(PartLine::total).sum());
        let additional_cost = round_currency(additional_cost);
        let discount = round_currency(discount);

        Self {
            labor_cost,
            parts_cost,
            additional_cost,
            discount,
            total_cost: round_currency(labor_cost + parts_cost + additional_cost - discount)
                .max(0.0),
        }
    }
}

/// Service order row as shown in lists and on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOrderSummary {
    pub id: i32,
    pub code: String,
    pub vehicle: String,
    pub status: ServiceOrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client_name: String,
    pub total_cost: f64,
}

impl ServiceOrderSummary {
    /// Builds a summary from an order, its client and its loaded lines.
    pub fn from_entity(
        order: entity::service_order::Model,
        client: Option<entity::client::Model>,
        labor: &[LaborLine],
        parts: &[PartLine],
    ) -> Result<Self, DbErr> {
        let status = parse_status(order.id, &order.status)?;
        let totals = OrderTotals::compute(labor, parts, order.additional_cost, order.discount);

        Ok(Self {
            id: order.id,
            code: order.code,
            vehicle: order.vehicle,
            status,
            created_at: order.created_at,
            updated_at: order.updated_at,
            client_name: client.map(|c| c.name).unwrap_or_default(),
            total_cost: totals.total_cost,
        })
    }

    pub fn into_dto(self) -> ServiceOrderSummaryDto {
        ServiceOrderSummaryDto {
            status_label: self.status.label().to_string(),
            id: self.id,
            code: self.code,
            vehicle: self.vehicle,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            client_name: self.client_name,
            total_cost: self.total_cost,
        }
    }
}

/// Full service order with its client name and line items.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOrder {
    pub id: i32,
    pub code: String,
    pub client_id: i32,
    pub client_name: String,
    pub vehicle: String,
    pub status: ServiceOrderStatus,
    pub description: String,
    pub mechanic_notes: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub approved: bool,
    pub additional_cost: f64,
    pub discount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub labor: Vec<LaborLine>,
    pub parts: Vec<PartLine>,
}

impl ServiceOrder {
    pub fn from_entity(
        order: entity::service_order::Model,
        client: Option<entity::client::Model>,
        labor: Vec<entity::labor_line::Model>,
        parts: Vec<entity::part_line::Model>,
    ) -> Result<Self, DbErr> {
        let status = parse_status(order.id, &order.status)?;

        Ok(Self {
            id: order.id,
            code: order.code,
            client_id: order.client_id,
            client_name: client.map(|c| c.name).unwrap_or_default(),
            vehicle: order.vehicle,
            status,
            description: order.description,
            mechanic_notes: order.mechanic_notes,
            scheduled_date: order.scheduled_date,
            approved: order.approved,
            additional_cost: order.additional_cost,
            discount: order.discount,
            created_at: order.created_at,
            updated_at: order.updated_at,
            labor: labor.into_iter().map(LaborLine::from_entity).collect(),
            parts: parts.into_iter().map(PartLine::from_entity).collect(),
        })
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(&self.labor, &self.parts, self.additional_cost, self.discount)
    }

    pub fn into_dto(self) -> ServiceOrderDto {
        let totals = self.totals();

        ServiceOrderDto {
            status_label: self.status.label().to_string(),
            id: self.id,
            code: self.code,
            client_id: self.client_id,
            client_name: self.client_name,
            vehicle: self.vehicle,
            status: self.status,
            description: self.description,
            mechanic_notes: self.mechanic_notes,
            scheduled_date: self.scheduled_date,
            approved: self.approved,
            created_at: self.created_at,
            updated_at: self.updated_at,
            labor_cost: totals.labor_cost,
            parts_cost: totals.parts_cost,
            additional_cost: totals.additional_cost,
            discount: totals.discount,
            total_cost: totals.total_cost,
            labor: self.labor.into_iter().map(LaborLine::into_dto).collect(),
            parts: self.parts.into_iter().map(PartLine::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaborLineParams {
    pub description: String,
    pub hours: f64,
    pub rate: f64,
}

impl From<LaborLineInputDto> for LaborLineParams {
    fn from(dto: LaborLineInputDto) -> Self {
        Self {
            description: dto.description.trim().to_string(),
            hours: dto.hours,
            rate: dto.rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartLineParams {
    pub inventory_id: Option<i32>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl From<PartLineInputDto> for PartLineParams {
    fn from(dto: PartLineInputDto) -> Self {
        Self {
            inventory_id: dto.inventory_id,
            description: dto.description.trim().to_string(),
            quantity: dto.quantity,
            unit_price: dto.unit_price,
        }
    }
}

/// Values for a new service order. The code is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateServiceOrderParams {
    pub client_id: Option<i32>,
    pub vehicle: String,
    pub description: String,
    pub status: ServiceOrderStatus,
    pub mechanic_notes: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub approved: bool,
    pub additional_cost: f64,
    pub discount: f64,
    pub labor: Vec<LaborLineParams>,
    pub parts: Vec<PartLineParams>,
}

impl CreateServiceOrderParams {
    pub fn from_dto(dto: CreateServiceOrderDto) -> Self {
        Self {
            client_id: dto.client_id,
            vehicle: dto.vehicle.trim().to_string(),
            description: dto.description.trim().to_string(),
            status: dto.status.unwrap_or_default(),
            mechanic_notes: non_blank(dto.mechanic_notes),
            scheduled_date: dto.scheduled_date,
            approved: dto.approved,
            additional_cost: dto.additional_cost.unwrap_or(0.0),
            discount: dto.discount.unwrap_or(0.0),
            labor: dto.labor.into_iter().map(Into::into).collect(),
            parts: dto.parts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Partial update of a service order.
///
/// `None` leaves a field unchanged. Nullable columns use `Option<Option<_>>` so that
/// `Some(None)` clears them. Line vectors, when present, replace all existing lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateServiceOrderParams {
    pub id: i32,
    pub client_id: Option<i32>,
    pub vehicle: Option<String>,
    pub description: Option<String>,
    pub status: Option<ServiceOrderStatus>,
    pub mechanic_notes: Option<Option<String>>,
    pub scheduled_date: Option<Option<NaiveDate>>,
    pub approved: Option<bool>,
    pub additional_cost: Option<f64>,
    pub discount: Option<f64>,
    pub labor: Option<Vec<LaborLineParams>>,
    pub parts: Option<Vec<PartLineParams>>,
}

impl UpdateServiceOrderParams {
    pub fn from_dto(id: i32, dto: UpdateServiceOrderDto) -> Self {
        Self {
            id,
            client_id: dto.client_id,
            vehicle: dto.vehicle.map(|v| v.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            status: dto.status,
            mechanic_notes: dto.mechanic_notes.map(non_blank),
            scheduled_date: dto.scheduled_date,
            approved: dto.approved,
            additional_cost: dto.additional_cost,
            discount: dto.discount,
            labor: dto
                .labor
                .map(|lines| lines.into_iter().map(Into::into).collect()),
            parts: dto
                .parts
                .map(|lines| lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Status-only update used by the status endpoint.
    pub fn status_only(id: i32, status: ServiceOrderStatus) -> Self {
        Self {
            id,
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.vehicle.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.mechanic_notes.is_none()
            && self.scheduled_date.is_none()
            && self.approved.is_none()
            && self.additional_cost.is_none()
            && self.discount.is_none()
            && self.labor.is_none()
            && self.parts.is_none()
    }
}

/// Filters for listing service orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceOrderFilter {
    pub status: Option<ServiceOrderStatus>,
    pub search: Option<String>,
}

impl ServiceOrderFilter {
    pub fn from_params(params: ServiceOrderSearchParams) -> Self {
        Self {
            status: params.status,
            search: non_blank(params.search),
        }
    }
}
