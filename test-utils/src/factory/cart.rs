//! Cart factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty cart at version 0 for the given user.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        version: ActiveValue::Set(0),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
