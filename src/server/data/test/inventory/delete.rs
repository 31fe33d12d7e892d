use super::*;

/// Tests deleting an item referenced by a part line.
///
/// Verifies that the part line survives with its inventory reference cleared.
///
/// Expected: Ok(true), part line inventory_id is None
#[tokio::test]
async fn detaches_part_lines_on_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let item = factory::inventory_item::create_inventory_item(db).await?;
    let line = factory::part_line::create_part_line(db, order.id, Some(item.id), 2.0, 10.0).await?;

    let repo = InventoryRepository::new(db);
    assert!(repo.delete(item.id).await?);
    assert!(repo.get_by_id(item.id).await?.is_none());

    let stored_line = entity::prelude::PartLine::find_by_id(line.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored_line.inventory_id.is_none());
    assert_eq!(stored_line.quantity, 2.0);

    Ok(())
}

/// Tests deleting an item that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    assert!(!repo.delete(11).await?);

    Ok(())
}
