use super::*;

/// Tests granting admin status to a user.
///
/// Expected: Ok with user admin status set to true
#[tokio::test]
async fn grants_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("dave@example.com", false)).await?;

    repo.set_admin(user.id, true).await?;

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert!(user.admin);

    Ok(())
}

/// Tests revoking admin status from a user.
///
/// Expected: Ok with user admin status set to false
#[tokio::test]
async fn revokes_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("erin@example.com", true)).await?;

    repo.set_admin(user.id, false).await?;

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert!(!user.admin);

    Ok(())
}
