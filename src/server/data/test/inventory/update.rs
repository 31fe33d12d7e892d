use super::*;

/// Tests replacing an item's fields.
///
/// Expected: Ok(Some(InventoryItem)) with new values and a newer updated_at
#[tokio::test]
async fn replaces_item_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::inventory_item::create_inventory_item(db).await?;

    let repo = InventoryRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            SaveInventoryItemParams {
                quantity: 3,
                location: None,
                ..params("Oil filter XL")
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Oil filter XL");
    assert_eq!(updated.quantity, 3);
    assert!(updated.location.is_none());
    assert!(updated.is_low_stock());
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests updating an item that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    assert!(repo.update(3, params("Ghost")).await?.is_none());

    Ok(())
}
