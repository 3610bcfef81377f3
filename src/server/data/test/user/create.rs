use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user and returns the domain model
/// without the password hash.
///
/// Expected: Ok with user fields matching the parameters
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("alice@example.com", false)).await?;

    assert_eq!(user.email, "alice@example.com");
    assert!(!user.admin);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("bob@example.com", false)).await?;

    let result = repo.create(create_param("bob@example.com", false)).await;

    assert!(result.is_err());
    assert!(repo.email_exists("bob@example.com").await?);

    Ok(())
}
