use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cart_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    /// Sorted, comma-joined ids of the selected options.
    pub option_key: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cart::Entity",
        from = "Column::CartId",
        to = "super::cart::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cart,
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuItem,
    #[sea_orm(has_many = "super::cart_item_option::Entity")]
    CartItemOption,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl Related<super::cart_item_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItemOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
