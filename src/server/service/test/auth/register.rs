use super::*;

/// Tests that the first account becomes an admin.
///
/// Expected: Ok with admin=true for the first user and admin=false for the second
#[tokio::test]
async fn first_user_becomes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let first = service
        .register(register_param("first@example.com", "password123"))
        .await?;
    let second = service
        .register(register_param("second@example.com", "password123"))
        .await?;

    assert!(first.admin);
    assert!(!second.admin);

    Ok(())
}

/// Tests registering while an admin already exists.
///
/// Expected: Ok with admin=false
#[tokio::test]
async fn regular_user_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let user = AuthService::new(db)
        .register(register_param("new@example.com", "password123"))
        .await?;

    assert!(!user.admin);

    Ok(())
}

/// Tests registering a taken email.
///
/// Expected: Err(AuthError::EmailTaken)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(register_param("taken@example.com", "password123"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken(_)))
    ));

    Ok(())
}

/// Tests input validation.
///
/// Expected: Err(AppError::BadRequest) for a short password and a malformed email
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    let result = service
        .register(register_param("short@example.com", "1234567"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .register(register_param("not-an-email", "password123"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
