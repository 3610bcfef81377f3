use sea_orm::entity::prelude::*;

/// Lifecycle status of an order, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,
    #[sea_orm(string_value = "DELIVERING")]
    Delivering,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

/// Who wrote a chat message. Admins write as support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ChatSenderRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "SHIPPER")]
    Shipper,
    #[sea_orm(string_value = "SUPPORT")]
    Support,
}
