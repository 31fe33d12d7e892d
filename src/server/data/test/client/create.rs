use super::*;

/// Tests creating a client.
///
/// Verifies that the repository persists every field and that the created
/// client can be read back by ID.
///
/// Expected: Ok with client retrievable via get_by_id
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let created = repo.create(params("Ana Souza")).await?;

    assert_eq!(created.name, "Ana Souza");
    assert_eq!(created.vehicle_info.as_deref(), Some("VW Golf 2015"));
    assert!(created.notes.is_none());

    assert!(repo.exists(created.id).await?);

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.phone, "555-0100");
    assert_eq!(fetched.email, "ana.souza@example.com");

    Ok(())
}
