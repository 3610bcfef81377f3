//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, RegisterDto, UserDto};

/// Registered account. The password hash never leaves the data layer inside this type.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            address: self.address,
            admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone: entity.phone,
            address: entity.address,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            name: dto.name,
            password: dto.password,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

/// Row to insert for a new user, with the password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub admin: bool,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
