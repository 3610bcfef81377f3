use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_item_option")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cart_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_item_option_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cart_item::Entity",
        from = "Column::CartItemId",
        to = "super::cart_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CartItem,
    #[sea_orm(
        belongs_to = "super::menu_item_option::Entity",
        from = "Column::MenuItemOptionId",
        to = "super::menu_item_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuItemOption,
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItem.def()
    }
}

impl Related<super::menu_item_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
