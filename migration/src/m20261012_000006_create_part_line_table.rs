use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261012_000003_create_inventory_item_table::InventoryItem,
    m20261012_000004_create_service_order_table::ServiceOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartLine::Table)
                    .if_not_exists()
                    .col(pk_auto(PartLine::Id))
                    .col(integer(PartLine::ServiceOrderId))
                    .col(integer_null(PartLine::InventoryId))
                    .col(string(PartLine::Description))
                    .col(double(PartLine::Quantity))
                    .col(double(PartLine::UnitPrice))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_line_service_order_id")
                            .from(PartLine::Table, PartLine::ServiceOrderId)
                            .to(ServiceOrder::Table, ServiceOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_line_inventory_id")
                            .from(PartLine::Table, PartLine::InventoryId)
                            .to(InventoryItem::Table, InventoryItem::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartLine {
    Table,
    Id,
    ServiceOrderId,
    InventoryId,
    Description,
    Quantity,
    UnitPrice,
}
