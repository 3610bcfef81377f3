//! User data repository for database operations.

use crate::server::model::user::{CreateUserParam, User};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            address: ActiveValue::Set(param.address),
            password_hash: ActiveValue::Set(param.password_hash),
            admin: ActiveValue::Set(param.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email together with the stored password hash.
    ///
    /// Only the login flow needs the hash, so it is returned alongside the domain
    /// model rather than stored on it.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Returns one page of users ordered by name and the total number of users.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
