use super::*;

/// Tests filtering items at or below their minimum stock.
///
/// Verifies that items without a minimum stock are never reported as low and
/// that the comparison includes equality.
///
/// Expected: Ok with only the two low stock items
#[tokio::test]
async fn filters_low_stock_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Brake pad")
        .quantity(2)
        .minimum_stock(Some(5))
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Air filter")
        .quantity(5)
        .minimum_stock(Some(5))
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Coolant")
        .quantity(20)
        .minimum_stock(Some(5))
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Wiper")
        .quantity(0)
        .minimum_stock(None)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);

    let all = repo.list(&InventoryFilter::default()).await?;
    assert_eq!(all.len(), 4);

    let low = repo
        .list(&InventoryFilter {
            search: None,
            low_stock_only: true,
        })
        .await?;
    let names: Vec<&str> = low.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Air filter", "Brake pad"]);

    Ok(())
}

/// Tests searching by name or part number.
///
/// Expected: Ok with case-insensitive matches on either column
#[tokio::test]
async fn searches_name_and_part_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Spark plug")
        .part_number(Some("NGK-7090"))
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Timing belt")
        .part_number(Some("GATES-5512"))
        .build()
        .await?;

    let repo = InventoryRepository::new(db);

    let by_name = repo
        .list(&InventoryFilter {
            search: Some("SPARK".to_string()),
            low_stock_only: false,
        })
        .await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Spark plug");

    let by_part = repo
        .list(&InventoryFilter {
            search: Some("gates".to_string()),
            low_stock_only: false,
        })
        .await?;
    assert_eq!(by_part.len(), 1);
    assert_eq!(by_part[0].name, "Timing belt");

    Ok(())
}

/// Tests that name ordering ignores case.
///
/// Expected: Ok with "brake fluid" between "Air filter" and "Coolant"
#[tokio::test]
async fn orders_names_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Coolant", "brake fluid", "Air filter"] {
        factory::inventory_item::InventoryItemFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let names: Vec<String> = InventoryRepository::new(db)
        .list(&InventoryFilter::default())
        .await?
        .into_iter()
        .map(|i| i.name)
        .collect();

    assert_eq!(names, vec!["Air filter", "brake fluid", "Coolant"]);

    Ok(())
}
