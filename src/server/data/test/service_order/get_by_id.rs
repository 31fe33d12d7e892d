use super::*;

/// Tests loading an order with its lines.
///
/// Verifies that lines created outside the repository are loaded in insertion order
/// and rolled into the totals.
///
/// Expected: Ok(Some(ServiceOrder)) with total 1.5×80 + 3×12.5 + 10 - 7.5 = 160.0
#[tokio::test]
async fn loads_order_with_lines_and_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client_named(db, "Rafael").await?;
    let order = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .additional_cost(10.0)
        .discount(7.5)
        .build()
        .await?;
    factory::labor_line::create_labor_line(db, order.id, 1.5, 80.0).await?;
    factory::part_line::create_part_line(db, order.id, None, 3.0, 12.5).await?;

    let repo = ServiceOrderRepository::new(db);
    let loaded = repo.get_by_id(order.id).await?.unwrap();

    assert_eq!(loaded.client_name, "Rafael");
    assert_eq!(loaded.labor[0].total(), 120.0);
    assert_eq!(loaded.parts[0].total(), 37.5);
    assert_eq!(loaded.discount, 7.5);
    assert_eq!(loaded.totals().total_cost, 160.0);

    Ok(())
}

/// Tests loading an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceOrderRepository::new(db);
    assert!(repo.get_by_id(1).await?.is_none());

    Ok(())
}

/// Tests a stored status outside the known set.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let order = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .status("em_andamento")
        .build()
        .await?;

    let repo = ServiceOrderRepository::new(db);
    let result = repo.get_by_id(order.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
