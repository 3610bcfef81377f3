//! Category domain models and parameters.
//!
//! Categories group menu items across restaurants, e.g. "Noodles" or "Milk Tea".

use chrono::{DateTime, Utc};

use crate::{
    model::category::{CategoryDetailDto, CategoryDto, CategoryMenuDto, UpsertCategoryDto},
    server::model::menu::{Menu, MenuItem, MenuItemOption},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            icon_url: self.icon_url,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            icon_url: entity.icon_url,
            created_at: entity.created_at,
        }
    }
}

/// Menu items of a category that share a menu, each with its options.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMenu {
    pub menu: Menu,
    pub items: Vec<(MenuItem, Vec<MenuItemOption>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: Category,
    pub menus: Vec<CategoryMenu>,
}

impl CategoryDetail {
    pub fn into_dto(self) -> CategoryDetailDto {
        CategoryDetailDto {
            category: self.category.into_dto(),
            menus: self
                .menus
                .into_iter()
                .map(|group| CategoryMenuDto {
                    menu_id: group.menu.id,
                    restaurant_id: group.menu.restaurant_id,
                    title: group.menu.title,
                    items: group
                        .items
                        .into_iter()
                        .map(|(item, options)| item.into_dto(options))
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Parameters for creating or replacing a category. The slug is already resolved.
#[derive(Debug, Clone)]
pub struct UpsertCategoryParam {
    pub name: String,
    pub slug: String,
    pub icon_url: Option<String>,
}

impl UpsertCategoryParam {
    /// Trims the name and derives the slug from it when none is given.
    pub fn from_dto(dto: UpsertCategoryDto) -> Self {
        let name = dto.name.trim().to_string();
        let slug = match dto.slug {
            Some(slug) if !slug.trim().is_empty() => slugify(&slug),
            _ => slugify(&name),
        };

        Self {
            name,
            slug,
            icon_url: dto.icon_url,
        }
    }
}

/// Lower-cases ASCII letters and digits and joins every other run with `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
