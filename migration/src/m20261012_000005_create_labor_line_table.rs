use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000004_create_service_order_table::ServiceOrder;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LaborLine::Table)
                    .if_not_exists()
                    .col(pk_auto(LaborLine::Id))
                    .col(integer(LaborLine::ServiceOrderId))
                    .col(string(LaborLine::Description))
                    .col(double(LaborLine::Hours))
                    .col(double(LaborLine::Rate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labor_line_service_order_id")
                            .from(LaborLine::Table, LaborLine::ServiceOrderId)
                            .to(ServiceOrder::Table, ServiceOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LaborLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LaborLine {
    Table,
    Id,
    ServiceOrderId,
    Description,
    Hours,
    Rate,
}
