use super::*;

/// Tests creating a user with hashed credentials.
///
/// Verifies that the repository stores the role as its wire value and returns
/// the parsed domain role.
///
/// Expected: Ok with user created and count of 1
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            role: UserRole::Admin,
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        })
        .await?;

    assert_eq!(user.username, "admin");
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(repo.count().await?, 1);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "admin");
    assert_eq!(stored.password_hash, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA");

    Ok(())
}

/// Tests usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("mechanic")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "mechanic".to_string(),
            name: "Second".to_string(),
            role: UserRole::Mechanic,
            password_hash: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
