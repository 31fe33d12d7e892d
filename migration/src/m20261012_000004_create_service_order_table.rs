use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000002_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceOrder::Id))
                    .col(string_uniq(ServiceOrder::Code))
                    .col(integer(ServiceOrder::ClientId))
                    .col(string(ServiceOrder::Vehicle))
                    .col(string(ServiceOrder::Status))
                    .col(text(ServiceOrder::Description))
                    .col(text_null(ServiceOrder::MechanicNotes))
                    .col(date_null(ServiceOrder::ScheduledDate))
                    .col(boolean(ServiceOrder::Approved).default(false))
                    .col(double(ServiceOrder::AdditionalCost).default(0.0))
                    .col(double(ServiceOrder::Discount).default(0.0))
                    .col(
                        timestamp_with_time_zone(ServiceOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ServiceOrder::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_order_client_id")
                            .from(ServiceOrder::Table, ServiceOrder::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceOrder {
    Table,
    Id,
    Code,
    ClientId,
    Vehicle,
    Status,
    Description,
    MechanicNotes,
    ScheduledDate,
    Approved,
    AdditionalCost,
    Discount,
    CreatedAt,
    UpdatedAt,
}
