//! Grouping of resolved cart lines into order detail groups.
//!
//! Lines with the same menu item and the same option set collapse into a single
//! group whose quantity is the sum of the line quantities. Option selection order
//! does not matter: `[3, 7]` and `[7, 3]` are the same set.

use std::collections::HashMap;

use crate::server::{
    error::order::OrderError,
    model::{
        cart::option_key,
        menu::MenuItemOption,
        order::{LineGroup, ResolvedCartLine},
    },
};

/// Identity of a line: `"{menu_item_id}::{sorted option ids joined by ','}"`.
pub fn group_key(menu_item_id: i32, options: &[MenuItemOption]) -> String {
    let ids: Vec<i32> = options.iter().map(|o| o.id).collect();
    format!("{}::{}", menu_item_id, option_key(&ids))
}

/// Groups resolved cart lines, checking that they come from a single restaurant.
///
/// Groups keep the order in which their key was first seen. The menu item and
/// options of a group are taken from its first line.
///
/// # Returns
/// - `Ok((restaurant_id, groups))` - Restaurant shared by every line and the groups
/// - `Err(OrderError::EmptySelection)` - No lines given
/// - `Err(OrderError::MixedRestaurants)` - Lines resolve to different restaurants
/// - `Err(OrderError::QuantityOverflow)` - A group's summed quantity does not fit in `i32`
pub fn aggregate(lines: Vec<ResolvedCartLine>) -> Result<(i32, Vec<LineGroup>), OrderError> {
    let Some(first) = lines.first() else {
        return Err(OrderError::EmptySelection);
    };

    let restaurant_id = first.restaurant_id;
    if lines.iter().any(|line| line.restaurant_id != restaurant_id) {
        return Err(OrderError::MixedRestaurants);
    }

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<LineGroup> = Vec::new();

    for line in lines {
        let key = group_key(line.menu_item.id, &line.options);

        match positions.get(&key) {
            Some(&index) => {
                let group = &mut groups[index];
                group.quantity = group
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or(OrderError::QuantityOverflow(line.menu_item.id))?;
            }
            None => {
                positions.insert(key, groups.len());
                groups.push(LineGroup {
                    menu_item: line.menu_item,
                    options: line.options,
                    quantity: line.quantity,
                });
            }
        }
    }

    Ok((restaurant_id, groups))
}
