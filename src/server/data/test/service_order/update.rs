use super::*;

/// Tests a partial update leaves untouched fields alone.
///
/// Expected: Ok(Some(ServiceOrder)) with only status and notes changed
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let order = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .vehicle("Ford Ka")
        .mechanic_notes(Some("Check rotors"))
        .updated_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::labor_line::create_labor_line(db, order.id, 1.0, 90.0).await?;

    let repo = ServiceOrderRepository::new(db);
    let updated = repo
        .update(UpdateServiceOrderParams {
            id: order.id,
            status: Some(ServiceOrderStatus::InProgress),
            mechanic_notes: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, ServiceOrderStatus::InProgress);
    assert!(updated.mechanic_notes.is_none());
    assert_eq!(updated.vehicle, "Ford Ka");
    assert_eq!(updated.labor.len(), 1);
    assert!(updated.updated_at > order.updated_at);

    Ok(())
}

/// Tests supplied line vectors replace every existing line.
///
/// Expected: Ok with the old lines gone and totals from the new ones
#[tokio::test]
async fn replaces_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::labor_line::create_labor_line(db, order.id, 4.0, 100.0).await?;
    factory::labor_line::create_labor_line(db, order.id, 1.0, 100.0).await?;
    factory::part_line::create_part_line(db, order.id, None, 1.0, 300.0).await?;

    let repo = ServiceOrderRepository::new(db);
    let updated = repo
        .update(UpdateServiceOrderParams {
            id: order.id,
            labor: Some(vec![LaborLineParams {
                description: "Diagnosis".to_string(),
                hours: 0.5,
                rate: 120.0,
            }]),
            parts: Some(vec![]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.labor.len(), 1);
    assert_eq!(updated.labor[0].description, "Diagnosis");
    assert!(updated.parts.is_empty());
    assert_eq!(updated.totals().total_cost, 60.0);

    let stored_labor = entity::prelude::LaborLine::find()
        .filter(entity::labor_line::Column::ServiceOrderId.eq(order.id))
        .count(db)
        .await?;
    assert_eq!(stored_labor, 1);

    Ok(())
}

/// Tests updating an order that does not exist.
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
    let result = repo
        .update(UpdateServiceOrderParams::status_only(
            9,
            ServiceOrderStatus::Finished,
        ))
        .await?;

    assert!(result.is_none());

    Ok(())
}
