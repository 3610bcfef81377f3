//! Restaurant catalog management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::restaurant::{Restaurant, UpsertRestaurantParam},
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertRestaurantParam) -> Result<Restaurant, AppError> {
        validate(&param)?;

        let restaurant = RestaurantRepository::new(self.db).create(param).await?;
        tracing::info!("Restaurant {} created", restaurant.id);

        Ok(restaurant)
    }

    pub async fn get_all(&self) -> Result<Vec<Restaurant>, AppError> {
        Ok(RestaurantRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Restaurant, AppError> {
        RestaurantRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))
    }

    pub async fn update(&self, id: i32, param: UpsertRestaurantParam) -> Result<Restaurant, AppError> {
        validate(&param)?;

        RestaurantRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))
    }

    /// Deletes a restaurant with its menus. Placed orders keep their restaurant id.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RestaurantRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Restaurant {} not found", id)));
        }

        tracing::info!("Restaurant {} deleted", id);

        Ok(())
    }
}

fn validate(param: &UpsertRestaurantParam) -> Result<(), AppError> {
    if param.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Restaurant name must not be empty".to_string(),
        ));
    }
    Ok(())
}
