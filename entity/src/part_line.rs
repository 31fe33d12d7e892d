use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "part_line")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_order_id: i32,
    pub inventory_id: Option<i32>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_order::Entity",
        from = "Column::ServiceOrderId",
        to = "super::service_order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ServiceOrder,
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryId",
        to = "super::inventory_item::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    InventoryItem,
}

impl Related<super::service_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOrder.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
