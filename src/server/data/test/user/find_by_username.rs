use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User)) for an exact match, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("mechanic")
        .name("Mechanic")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_username("mechanic").await?;
    assert_eq!(found.map(|u| u.name), Some("Mechanic".to_string()));

    let missing = repo.find_by_username("mech").await?;
    assert!(missing.is_none());

    Ok(())
}
