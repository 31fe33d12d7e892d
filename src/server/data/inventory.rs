//! Inventory data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashSet;

use crate::server::model::inventory::{InventoryFilter, InventoryItem, SaveInventoryItemParams};

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists inventory items ordered by name, ignoring case.
    ///
    /// The search term is matched against name and part number in SQL. The low stock
    /// restriction compares two columns of the same row and is applied after loading.
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryItem>)` - Matching items
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, DbErr> {
        let mut query = entity::prelude::InventoryItem::find();

        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::inventory_item::Column::Name.contains(term))
                    .add(entity::inventory_item::Column::PartNumber.contains(term)),
            );
        }

        let items = query
            .order_by_asc(Expr::cust(r#""inventory_item"."name" COLLATE NOCASE"#))
            .order_by_asc(entity::inventory_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(InventoryItem::from_entity)
            .filter(|item| !filter.low_stock_only || item.is_low_stock())
            .collect();

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<InventoryItem>, DbErr> {
        Ok(entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?
            .map(InventoryItem::from_entity))
    }

    /// Returns which of the given IDs exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        Ok(entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|item| item.id)
            .collect())
    }

    pub async fn create(&self, params: SaveInventoryItemParams) -> Result<InventoryItem, DbErr> {
        let entity = entity::inventory_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            part_number: ActiveValue::Set(params.part_number),
            quantity: ActiveValue::Set(params.quantity),
            minimum_stock: ActiveValue::Set(params.minimum_stock),
            unit_price: ActiveValue::Set(params.unit_price),
            location: ActiveValue::Set(params.location),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InventoryItem::from_entity(entity))
    }

    /// Replaces every editable field of an item and touches `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Updated item
    /// - `Ok(None)` - No item with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: SaveInventoryItemParams,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(existing) = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::inventory_item::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.part_number = ActiveValue::Set(params.part_number);
        active.quantity = ActiveValue::Set(params.quantity);
        active.minimum_stock = ActiveValue::Set(params.minimum_stock);
        active.unit_price = ActiveValue::Set(params.unit_price);
        active.location = ActiveValue::Set(params.location);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(InventoryItem::from_entity(entity)))
    }

    /// Deletes an item, first detaching any part lines that reference it.
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - No item with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PartLine::update_many()
            .filter(entity::part_line::Column::InventoryId.eq(id))
            .col_expr(
                entity::part_line::Column::InventoryId,
                Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::InventoryItem::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::InventoryItem::find().count(self.db).await
    }
}
