//! Shipper domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::shipper::{CreateShipperDto, ShipperDto, UpdateShipperDto};

/// Delivery courier profile attached to a user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipper {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    /// Only online shippers can be assigned new orders.
    pub is_online: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Shipper {
    pub fn into_dto(self) -> ShipperDto {
        ShipperDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            phone: self.phone,
            is_online: self.is_online,
            rating: self.rating,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::shipper::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            phone: entity.phone,
            is_online: entity.is_online,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateShipperParam {
    pub user_id: i32,
    pub name: String,
    pub phone: String,
}

impl CreateShipperParam {
    pub fn from_dto(dto: CreateShipperDto) -> Self {
        Self {
            user_id: dto.user_id,
            name: dto.name,
            phone: dto.phone.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateShipperParam {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

impl UpdateShipperParam {
    pub fn from_dto(id: i32, dto: UpdateShipperDto) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone.trim().to_string(),
        }
    }
}
