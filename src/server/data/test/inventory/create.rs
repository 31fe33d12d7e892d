use super::*;

/// Tests creating an inventory item.
///
/// Expected: Ok with item retrievable and not flagged as low stock
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    let created = repo.create(params("Oil filter")).await?;

    assert_eq!(created.name, "Oil filter");
    assert_eq!(created.quantity, 12);
    assert!(!created.is_low_stock());

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.part_number.as_deref(), Some("FLT-001"));
    assert_eq!(fetched.unit_price, 35.9);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests resolving which inventory IDs exist.
///
/// Expected: Ok with only the stored IDs
#[tokio::test]
async fn resolves_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::inventory_item::create_inventory_item(db).await?;

    let repo = InventoryRepository::new(db);
    let existing = repo.existing_ids(&[item.id, item.id + 100]).await?;

    assert!(existing.contains(&item.id));
    assert!(!existing.contains(&(item.id + 100)));
    assert!(repo.existing_ids(&[]).await?.is_empty());

    Ok(())
}
