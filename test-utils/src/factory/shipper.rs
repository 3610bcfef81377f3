//! Shipper factory for creating test shipper entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a shipper profile for an existing user.
pub struct ShipperFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    phone: String,
    is_online: bool,
}

impl<'a> ShipperFactory<'a> {
    /// Creates a new ShipperFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Shipper {id}"`
    /// - phone: `"09{id:08}"`, unique per factory call
    /// - is_online: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Shipper {}", id),
            phone: format!("09{:08}", id),
            is_online: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets whether the shipper is accepting orders.
    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub async fn build(self) -> Result<entity::shipper::Model, DbErr> {
        entity::shipper::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            is_online: ActiveValue::Set(self.is_online),
            rating: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an online shipper for the given user.
pub async fn create_shipper(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::shipper::Model, DbErr> {
    ShipperFactory::new(db, user_id).build().await
}
