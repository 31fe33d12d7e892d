use super::*;

/// Tests replacing a client's fields.
///
/// Expected: Ok(Some(Client)) with new values and unchanged created_at
#[tokio::test]
async fn replaces_client_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::client::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            SaveClientParams {
                vehicle_info: None,
                notes: Some("Prefers mornings".to_string()),
                ..params("Renamed Client")
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed Client");
    assert!(updated.vehicle_info.is_none());
    assert_eq!(updated.notes.as_deref(), Some("Prefers mornings"));
    assert_eq!(updated.created_at, existing.created_at);

    let stored = entity::prelude::Client::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed Client");

    Ok(())
}

/// Tests updating a client that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo.update(42, params("Ghost")).await?;

    assert!(result.is_none());

    Ok(())
}
