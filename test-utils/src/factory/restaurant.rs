//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_open: bool,
    rating: f64,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"`
    /// - is_open: `true`
    /// - rating: `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Restaurant {}", next_id()),
            is_open: true,
            rating: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the restaurant currently accepts orders.
    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            is_open: ActiveValue::Set(self.is_open),
            open_time: ActiveValue::Set(None),
            close_time: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open restaurant with default values.
pub async fn create_restaurant(db: &DatabaseConnection) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
