use crate::{
    model::service_order::ServiceOrderStatus,
    server::{
        data::service_order::ServiceOrderRepository,
        model::service_order::{
            CreateServiceOrderParams, LaborLineParams, PartLineParams, ServiceOrderFilter,
            UpdateServiceOrderParams,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod list_summaries;
mod update;

fn create_params(client_id: i32) -> CreateServiceOrderParams {
    CreateServiceOrderParams {
        client_id: Some(client_id),
        vehicle: "Fiat Uno 2010".to_string(),
        description: "Brake noise".to_string(),
        status: ServiceOrderStatus::AwaitingApproval,
        mechanic_notes: None,
        scheduled_date: None,
        approved: false,
        additional_cost: 0.0,
        discount: 0.0,
        labor: vec![],
        parts: vec![],
    }
}
