use super::*;

/// Tests an admin passes the admin permission check.
///
/// Expected: Ok(AuthenticatedUser) for the admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenStore::new(Duration::from_secs(60));

    let admin = factory::user::create_admin(db).await?;
    let headers = headers_with(&format!("Bearer {}", token_for(&tokens, &admin).await));

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests a mechanic is authenticated but denied admin operations.
///
/// Expected: Ok without permissions, Err(AuthError::AccessDenied) with Admin
#[tokio::test]
async fn denies_admin_permission_to_mechanic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenStore::new(Duration::from_secs(60));

    let mechanic = factory::user::create_user(db).await?;
    let headers = headers_with(&format!("Bearer {}", token_for(&tokens, &mechanic).await));
    let guard = AuthGuard::new(db, &tokens, &headers);

    assert!(guard.require(&[]).await.is_ok());

    match guard.require(&[Permission::Admin]).await {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, mechanic.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests requests without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenStore::new(Duration::from_secs(60));
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests requests with a token that was never issued.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenStore::new(Duration::from_secs(60));
    let headers = headers_with("Bearer deadbeef");

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenStore::new(Duration::from_secs(60));

    let user = factory::user::create_user(db).await?;
    let headers = headers_with(&format!("Bearer {}", token_for(&tokens, &user).await));

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
