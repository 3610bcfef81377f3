use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub menu_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub base_price: i64,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu::Entity",
        from = "Column::MenuId",
        to = "super::menu::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Menu,
    #[sea_orm(has_many = "super::menu_item_option::Entity")]
    MenuItemOption,
}

impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menu.def()
    }
}

impl Related<super::menu_item_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
