use super::*;

/// Tests summaries are ordered by last update and carry totals.
///
/// Expected: Ok with the most recently updated order first
#[tokio::test]
async fn lists_most_recently_updated_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client_named(db, "Lucia").await?;
    let now = Utc::now();
    let older = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .updated_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .updated_at(now)
        .build()
        .await?;
    factory::labor_line::create_labor_line(db, older.id, 1.0, 50.0).await?;

    let repo = ServiceOrderRepository::new(db);
    let summaries = repo.list_summaries(&ServiceOrderFilter::default()).await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, newer.id);
    assert_eq!(summaries[0].total_cost, 0.0);
    assert_eq!(summaries[1].id, older.id);
    assert_eq!(summaries[1].total_cost, 50.0);
    assert_eq!(summaries[1].client_name, "Lucia");

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only in-progress orders
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    factory::service_order::create_service_order(db, client.id).await?;
    let in_progress = factory::service_order::ServiceOrderFactory::new(db, client.id)
        .status("in_progress")
        .build()
        .await?;

    let repo = ServiceOrderRepository::new(db);
    let summaries = repo
        .list_summaries(&ServiceOrderFilter {
            status: Some(ServiceOrderStatus::InProgress),
            search: None,
        })
        .await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, in_progress.id);
    assert_eq!(summaries[0].status, ServiceOrderStatus::InProgress);

    Ok(())
}

/// Tests searching by code, vehicle and client name.
///
/// Expected: Ok with case-insensitive matches on each column
#[tokio::test]
async fn searches_code_vehicle_and_client_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_service_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fernanda = factory::client::create_client_named(db, "Fernanda").await?;
    let otavio = factory::client::create_client_named(db, "Otavio").await?;
    factory::service_order::ServiceOrderFactory::new(db, fernanda.id)
        .code("OS-0100")
        .vehicle("Honda Civic")
        .build()
        .await?;
    factory::service_order::ServiceOrderFactory::new(db, otavio.id)
        .code("OS-0200")
        .vehicle("Toyota Corolla")
        .build()
        .await?;

    let repo = ServiceOrderRepository::new(db);
    let search = |term: &str| ServiceOrderFilter {
        status: None,
        search: Some(term.to_string()),
    };

    let by_code = repo.list_summaries(&search("0200")).await?;
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].client_name, "Otavio");

    let by_vehicle = repo.list_summaries(&search("civic")).await?;
    assert_eq!(by_vehicle.len(), 1);
    assert_eq!(by_vehicle[0].code, "OS-0100");

    let by_client = repo.list_summaries(&search("FERNANDA")).await?;
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0].vehicle, "Honda Civic");

    Ok(())
}
