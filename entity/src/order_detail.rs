use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    /// Group price computed at order time; never re-derived.
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(has_many = "super::order_detail_option::Entity")]
    OrderDetailOption,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::order_detail_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetailOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
