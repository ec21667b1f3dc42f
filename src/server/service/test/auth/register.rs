use super::*;
use sea_orm::EntityTrait;

/// Tests registering a regular account.
///
/// Verifies that the stored password is hashed and the role is User.
///
/// Expected: Ok(User) with role User
#[tokio::test]
async fn registers_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let user = AuthService::new(db, &codes, Duration::hours(24))
        .register(register_params("guest@example.com", "s3cret"))
        .await?;

    assert_eq!(user.role, Role::User);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "s3cret");
    assert!(stored.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests that a duplicate email is rejected.
///
/// Expected: Err(AuthError::EmailTaken)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    factory::user::UserFactory::new(db)
        .email("dup@example.com")
        .build()
        .await?;

    let result = AuthService::new(db, &codes, Duration::hours(24))
        .register(register_params("dup@example.com", "pw"))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::EmailTaken))));

    Ok(())
}

/// Tests that a valid bootstrap code grants the admin role once.
///
/// Expected: first registration Admin, second with the same code rejected
#[tokio::test]
async fn bootstrap_code_grants_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let code = codes.generate().await;
    let service = AuthService::new(db, &codes, Duration::hours(24));

    let mut params = register_params("root@example.com", "pw");
    params.admin_code = Some(code.clone());
    let admin = service.register(params).await?;

    let mut again = register_params("second@example.com", "pw");
    again.admin_code = Some(code);
    let result = service.register(again).await;

    assert_eq!(admin.role, Role::Admin);
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidAdminCode))
    ));

    Ok(())
}

/// Tests that a wrong admin code fails instead of silently creating a user.
///
/// Expected: Err(AuthError::InvalidAdminCode)
#[tokio::test]
async fn rejects_wrong_admin_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    codes.generate().await;

    let mut params = register_params("sneaky@example.com", "pw");
    params.admin_code = Some("guess".to_string());
    let result = AuthService::new(db, &codes, Duration::hours(24))
        .register(params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidAdminCode))
    ));
    assert!(codes.has_valid_code().await);

    Ok(())
}

/// Expected: Err(AppError::BadRequest) for a missing password
#[tokio::test]
async fn rejects_empty_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let result = AuthService::new(db, &codes, Duration::hours(24))
        .register(register_params("empty@example.com", ""))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
