use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub minimum_stock: Option<i32>,
    pub unit_price: f64,
    pub location: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::part_line::Entity")]
    PartLine,
}

impl Related<super::part_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
