use super::*;
use crate::server::data::auth_token::AuthTokenRepository;

/// Tests that logout revokes the issued token.
///
/// Expected: token no longer resolves after logout
#[tokio::test]
async fn revokes_issued_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes, Duration::hours(24));
    service
        .register(register_params("finn@example.com", "pw"))
        .await?;
    let issued = service.login("finn@example.com", "pw").await?;

    service.logout(&issued.token).await?;

    let resolved = AuthTokenRepository::new(db)
        .find_user_id(&issued.token, chrono::Utc::now())
        .await?;
    assert!(resolved.is_none());

    Ok(())
}

/// Expected: Err(UserNotInDatabase) for a deleted account
#[tokio::test]
async fn current_user_requires_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let result = AuthService::new(db, &codes, Duration::hours(24))
        .current_user(404)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
