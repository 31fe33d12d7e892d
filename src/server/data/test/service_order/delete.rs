use super::*;

/// Tests deleting an order removes its lines.
///
/// Expected: Ok(true) and no labor or part lines left for the order
#[tokio::test]
async fn deletes_order_and_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::labor_line::create_labor_line(db, order.id, 1.0, 50.0).await?;
    factory::part_line::create_part_line(db, order.id, None, 2.0, 5.0).await?;

    let repo = ServiceOrderRepository::new(db);
    assert_eq!(repo.count_by_client(client.id).await?, 1);
    assert!(repo.delete(order.id).await?);

    assert!(repo.get_by_id(order.id).await?.is_none());
    assert_eq!(repo.count_by_client(client.id).await?, 0);

    let labor = entity::prelude::LaborLine::find()
        .filter(entity::labor_line::Column::ServiceOrderId.eq(order.id))
        .count(db)
        .await?;
    let parts = entity::prelude::PartLine::find()
        .filter(entity::part_line::Column::ServiceOrderId.eq(order.id))
        .count(db)
        .await?;
    assert_eq!(labor, 0);
    assert_eq!(parts, 0);

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceOrderRepository::new(db);
    assert!(!repo.delete(3).await?);

    Ok(())
}
