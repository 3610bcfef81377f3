use sea_orm::entity::prelude::*;

/// Index of the orders a shipper is currently servicing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shipper_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub shipper_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipper::Entity",
        from = "Column::ShipperId",
        to = "super::shipper::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Shipper,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::shipper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipper.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
