use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
    pub icon_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_item_category::Entity")]
    MenuItemCategory,
}

impl Related<super::menu_item_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
