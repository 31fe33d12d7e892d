use super::*;

/// Tests clients are listed alphabetically.
///
/// Expected: Ok with clients ordered by name
#[tokio::test]
async fn lists_clients_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::create_client_named(db, "Carla").await?;
    factory::client::create_client_named(db, "Bruno").await?;
    factory::client::create_client_named(db, "Alice").await?;

    let repo = ClientRepository::new(db);
    let names: Vec<String> = repo
        .list(None)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Alice", "Bruno", "Carla"]);

    Ok(())
}

/// Tests searching across name, phone and email.
///
/// Verifies that the term is matched case-insensitively against each of the
/// searchable columns.
///
/// Expected: Ok with only matching clients
#[tokio::test]
async fn searches_name_phone_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .name("Maria Lima")
        .phone("11 99999-0000")
        .email("maria@lima.com")
        .build()
        .await?;
    factory::client::ClientFactory::new(db)
        .name("Joao Pereira")
        .phone("21 98888-1111")
        .email("joao@pereira.com")
        .build()
        .await?;

    let repo = ClientRepository::new(db);

    let by_name = repo.list(Some("maria")).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Maria Lima");

    let by_phone = repo.list(Some("98888")).await?;
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Joao Pereira");

    let by_email = repo.list(Some("PEREIRA.COM")).await?;
    assert_eq!(by_email.len(), 1);

    let none = repo.list(Some("nobody")).await?;
    assert!(none.is_empty());

    Ok(())
}

/// Tests that name ordering ignores case.
///
/// Expected: Ok with lowercase names sorted among capitalized ones
#[tokio::test]
async fn orders_names_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::create_client_named(db, "Bob").await?;
    factory::client::create_client_named(db, "alice").await?;
    factory::client::create_client_named(db, "Carla").await?;

    let names: Vec<String> = ClientRepository::new(db)
        .list(None)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["alice", "Bob", "Carla"]);

    Ok(())
}
