use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub menu_item_id: i32,
    pub title: String,
    /// Delta applied to the menu item's base price; may be negative.
    pub price_adjustment: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuItem,
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
