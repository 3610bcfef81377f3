//! User service for admin user management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{PaginatedUsers, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Grants or revokes admin privileges.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new admin flag
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        user_repo.set_admin(user_id, is_admin).await?;
        tracing::info!("User {} admin set to {}", user_id, is_admin);

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
