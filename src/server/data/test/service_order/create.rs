use super::*;

/// Tests creating an order with labor and part lines.
///
/// Verifies that the order receives the first sequential code, that the lines are
/// persisted and that totals are derived from them.
///
/// Expected: Ok with code OS-0001 and total 2×100 + 2×45 + 20 = 310
#[tokio::test]
async fn creates_order_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client_named(db, "Paula").await?;
    let item = factory::inventory_item::create_inventory_item(db).await?;

    let repo = ServiceOrderRepository::new(db);
    let order = repo
        .create(CreateServiceOrderParams {
            additional_cost: 20.0,
            labor: vec![LaborLineParams {
                description: "Replace pads".to_string(),
                hours: 2.0,
                rate: 100.0,
            }],
            parts: vec![PartLineParams {
                inventory_id: Some(item.id),
                description: "Brake pad".to_string(),
                quantity: 2.0,
                unit_price: 45.0,
            }],
            ..create_params(client.id)
        })
        .await?;

    assert_eq!(order.code, "OS-0001");
    assert_eq!(order.client_name, "Paula");
    assert_eq!(order.status, ServiceOrderStatus::AwaitingApproval);
    assert_eq!(order.labor.len(), 1);
    assert_eq!(order.parts.len(), 1);
    assert_eq!(order.parts[0].inventory_id, Some(item.id));

    let totals = order.totals();
    assert_eq!(totals.labor_cost, 200.0);
    assert_eq!(totals.parts_cost, 90.0);
    assert_eq!(totals.total_cost, 310.0);

    Ok(())
}

/// Tests codes follow the highest existing order ID.
///
/// Expected: Ok with code OS-0004 after three existing orders
#[tokio::test]
async fn assigns_code_after_highest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    for _ in 0..3 {
        factory::service_order::create_service_order(db, client.id).await?;
    }

    let repo = ServiceOrderRepository::new(db);
    let order = repo.create(create_params(client.id)).await?;

    assert_eq!(order.id, 4);
    assert_eq!(order.code, "OS-0004");

    Ok(())
}
