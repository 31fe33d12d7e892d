use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub client_id: i32,
    pub vehicle: String,
    pub status: String,
    pub description: String,
    pub mechanic_notes: Option<String>,
    pub scheduled_date: Option<Date>,
    pub approved: bool,
    pub additional_cost: f64,
    pub discount: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Client,
    #[sea_orm(has_many = "super::labor_line::Entity")]
    LaborLine,
    #[sea_orm(has_many = "super::part_line::Entity")]
    PartLine,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::labor_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LaborLine.def()
    }
}

impl Related<super::part_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
