//! Menu, menu item and menu item option domain models.
//!
//! Menu items carry their price in the smallest currency unit. Options adjust that
//! price by a signed delta, so a "small" size can discount the item.

use crate::model::menu::{
    CreateMenuDto, CreateMenuItemDto, MenuDto, MenuItemDto, MenuItemOptionDto, UpdateMenuDto,
    UpdateMenuItemDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i32,
    pub restaurant_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl Menu {
    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            id: self.id,
            restaurant_id: self.restaurant_id,
            title: self.title,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::menu::Model) -> Self {
        Self {
            id: entity.id,
            restaurant_id: entity.restaurant_id,
            title: entity.title,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub menu_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub image: Option<String>,
}

impl MenuItem {
    pub fn from_entity(entity: entity::menu_item::Model) -> Self {
        Self {
            id: entity.id,
            menu_id: entity.menu_id,
            title: entity.title,
            description: entity.description,
            base_price: entity.base_price,
            image: entity.image,
        }
    }

    /// Converts the item and its options into the API representation.
    pub fn into_dto(self, options: Vec<MenuItemOption>) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            menu_id: self.menu_id,
            title: self.title,
            description: self.description,
            base_price: self.base_price,
            image: self.image,
            options: options.into_iter().map(MenuItemOption::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemOption {
    pub id: i32,
    pub menu_item_id: i32,
    pub title: String,
    pub price_adjustment: i64,
}

impl MenuItemOption {
    pub fn into_dto(self) -> MenuItemOptionDto {
        MenuItemOptionDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            title: self.title,
            price_adjustment: self.price_adjustment,
        }
    }

    pub fn from_entity(entity: entity::menu_item_option::Model) -> Self {
        Self {
            id: entity.id,
            menu_item_id: entity.menu_item_id,
            title: entity.title,
            price_adjustment: entity.price_adjustment,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuParam {
    pub restaurant_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl CreateMenuParam {
    pub fn from_dto(dto: CreateMenuDto) -> Self {
        Self {
            restaurant_id: dto.restaurant_id,
            title: dto.title,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMenuParam {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl UpdateMenuParam {
    pub fn from_dto(id: i32, dto: UpdateMenuDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemParam {
    pub menu_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub image: Option<String>,
}

impl CreateMenuItemParam {
    pub fn from_dto(dto: CreateMenuItemDto) -> Self {
        Self {
            menu_id: dto.menu_id,
            title: dto.title,
            description: dto.description,
            base_price: dto.base_price,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMenuItemParam {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub image: Option<String>,
}

impl UpdateMenuItemParam {
    pub fn from_dto(id: i32, dto: UpdateMenuItemDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            base_price: dto.base_price,
            image: dto.image,
        }
    }
}
