use super::*;

/// Tests deleting a client.
///
/// Expected: Ok(true) and the client is no longer retrievable
#[tokio::test]
async fn deletes_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    let repo = ClientRepository::new(db);
    assert!(repo.delete(client.id).await?);
    assert!(repo.get_by_id(client.id).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting a client that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    assert!(!repo.delete(7).await?);

    Ok(())
}
