//! Restaurant domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::restaurant::{RestaurantDto, UpsertRestaurantDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Whether the restaurant currently accepts orders.
    pub is_open: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            description: self.description,
            phone: self.phone,
            address: self.address,
            is_open: self.is_open,
            open_time: self.open_time,
            close_time: self.close_time,
            rating: self.rating,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            phone: entity.phone,
            address: entity.address,
            is_open: entity.is_open,
            open_time: entity.open_time,
            close_time: entity.close_time,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating or replacing a restaurant's editable fields.
#[derive(Debug, Clone)]
pub struct UpsertRestaurantParam {
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_open: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl UpsertRestaurantParam {
    pub fn from_dto(dto: UpsertRestaurantDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            phone: dto.phone,
            address: dto.address,
            is_open: dto.is_open,
            open_time: dto.open_time,
            close_time: dto.close_time,
        }
    }
}
