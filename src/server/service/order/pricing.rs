//! Order pricing.
//!
//! All amounts are integers in the smallest currency unit. There is no rounding, tax
//! or currency conversion.

use crate::server::model::order::{CreateOrderDetailParam, LineGroup, OrderDetailOption};

/// `(base_price + sum of option adjustments) * quantity`.
pub fn group_price(group: &LineGroup) -> i64 {
    let adjustments: i64 = group.options.iter().map(|o| o.price_adjustment).sum();

    (group.menu_item.base_price + adjustments) * i64::from(group.quantity)
}

/// Prices every group and returns the detail rows together with the order total.
///
/// Each detail snapshots its group price and the adjustment of every option, so
/// later menu changes never alter a placed order.
pub fn price_groups(groups: Vec<LineGroup>) -> (Vec<CreateOrderDetailParam>, i64) {
    let details: Vec<CreateOrderDetailParam> = groups
        .into_iter()
        .map(|group| CreateOrderDetailParam {
            menu_item_id: group.menu_item.id,
            quantity: group.quantity,
            price: group_price(&group),
            options: group
                .options
                .iter()
                .map(|o| OrderDetailOption {
                    menu_item_option_id: o.id,
                    price_adjustment: o.price_adjustment,
                })
                .collect(),
        })
        .collect();

    let total = details.iter().map(|d| d.price).sum();

    (details, total)
}
