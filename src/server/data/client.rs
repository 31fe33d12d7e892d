//! Client data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::client::{Client, SaveClientParams};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists clients ordered by name, ignoring case.
    ///
    /// # Arguments
    /// - `search` - Optional term matched against name, phone and email (case-insensitive)
    ///
    /// # Returns
    /// - `Ok(Vec<Client>)` - Matching clients
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Client>, DbErr> {
        let mut query = entity::prelude::Client::find();

        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::client::Column::Name.contains(term))
                    .add(entity::client::Column::Phone.contains(term))
                    .add(entity::client::Column::Email.contains(term)),
            );
        }

        let entities = query
            .order_by_asc(Expr::cust(r#""client"."name" COLLATE NOCASE"#))
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        Ok(entity::prelude::Client::find_by_id(id)
            .one(self.db)
            .await?
            .map(Client::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Client::find_by_id(id)
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn create(&self, params: SaveClientParams) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            vehicle_info: ActiveValue::Set(params.vehicle_info),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Replaces every editable field of a client.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: SaveClientParams) -> Result<Option<Client>, DbErr> {
        let Some(existing) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::client::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.phone = ActiveValue::Set(params.phone);
        active.email = ActiveValue::Set(params.email);
        active.vehicle_info = ActiveValue::Set(params.vehicle_info);
        active.notes = ActiveValue::Set(params.notes);

        let entity = active.update(self.db).await?;

        Ok(Some(Client::from_entity(entity)))
    }

    /// Deletes a client.
    ///
    /// # Returns
    /// - `Ok(true)` - Client deleted
    /// - `Ok(false)` - No client with that ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation when orders remain
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Client::find().count(self.db).await
    }
}
