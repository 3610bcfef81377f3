//! Shipper profile management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{shipper::ShipperRepository, user::UserRepository},
    error::AppError,
    model::shipper::{CreateShipperParam, Shipper, UpdateShipperParam},
};

pub struct ShipperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shipper profile for an existing user. New shippers start offline.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - Empty name or phone, phone already in use, or
    ///   the user already has a shipper profile
    pub async fn create(&self, param: CreateShipperParam) -> Result<Shipper, AppError> {
        validate(&param.name, &param.phone)?;

        if UserRepository::new(self.db)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", param.user_id)));
        }

        let shipper_repo = ShipperRepository::new(self.db);

        if shipper_repo.find_by_user_id(param.user_id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User {} already has a shipper profile",
                param.user_id
            )));
        }
        if shipper_repo.phone_taken(&param.phone, None).await? {
            return Err(AppError::BadRequest(format!(
                "Phone {} is already registered",
                param.phone
            )));
        }

        let shipper = shipper_repo.create(param).await?;
        tracing::info!("Shipper {} created for user {}", shipper.id, shipper.user_id);

        Ok(shipper)
    }

    pub async fn get_all(&self) -> Result<Vec<Shipper>, AppError> {
        Ok(ShipperRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Shipper, AppError> {
        ShipperRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shipper {} not found", id)))
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Shipper>, AppError> {
        Ok(ShipperRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?)
    }

    pub async fn update(&self, param: UpdateShipperParam) -> Result<Shipper, AppError> {
        validate(&param.name, &param.phone)?;

        let shipper_repo = ShipperRepository::new(self.db);
        if shipper_repo.phone_taken(&param.phone, Some(param.id)).await? {
            return Err(AppError::BadRequest(format!(
                "Phone {} is already registered",
                param.phone
            )));
        }

        let id = param.id;
        shipper_repo
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shipper {} not found", id)))
    }

    /// Toggles whether the shipper accepts new assignments.
    pub async fn set_online(&self, id: i32, is_online: bool) -> Result<Shipper, AppError> {
        let shipper_repo = ShipperRepository::new(self.db);

        if shipper_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Shipper {} not found", id)));
        }

        shipper_repo.set_online(id, is_online).await?;
        tracing::debug!("Shipper {} online set to {}", id, is_online);

        self.get_by_id(id).await
    }

    /// Deletes a shipper profile. Orders it was assigned keep their history with no shipper.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ShipperRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Shipper {} not found", id)));
        }

        tracing::info!("Shipper {} deleted", id);

        Ok(())
    }
}

fn validate(name: &str, phone: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Shipper name must not be empty".to_string()));
    }
    if phone.is_empty() {
        return Err(AppError::BadRequest("Shipper phone must not be empty".to_string()));
    }
    Ok(())
}
