use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::OrderStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// Restaurant the order was placed with. Kept without a foreign key so
    /// historical orders outlive the restaurant record.
    pub restaurant_id: i32,
    pub shipper_id: Option<i32>,
    pub status: OrderStatus,
    pub total_price: i64,
    pub order_time: DateTimeUtc,
    pub delivery_time: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::shipper::Entity",
        from = "Column::ShipperId",
        to = "super::shipper::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Shipper,
    #[sea_orm(has_many = "super::order_detail::Entity")]
    OrderDetail,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shipper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipper.def()
    }
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
