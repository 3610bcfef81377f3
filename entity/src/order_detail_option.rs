use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_detail_option")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_detail_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_item_option_id: i32,
    pub price_adjustment: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_detail::Entity",
        from = "Column::OrderDetailId",
        to = "super::order_detail::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    OrderDetail,
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
