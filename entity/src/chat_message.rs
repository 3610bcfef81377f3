use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ChatSenderRole;

/// Message exchanged about one order between its customer and its shipper.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    /// Customer of the order.
    pub user_id: i32,
    /// Shipper assigned to the order when the message was sent.
    pub shipper_id: i32,
    pub sender_role: ChatSenderRole,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
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
        on_delete = "Cascade"
    )]
    Shipper,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
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

impl ActiveModelBehavior for ActiveModel {}
