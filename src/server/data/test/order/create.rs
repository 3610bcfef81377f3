use super::*;

/// Tests inserting an order with details and detail options.
///
/// Verifies that the order starts PENDING and unassigned, and that every detail and
/// its price snapshot can be read back.
///
/// Expected: Ok with the order and its details persisted
#[tokio::test]
async fn creates_order_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (restaurant, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let option = factory::create_menu_item_option(db, item.id, 10_000).await?;

    let now = Utc::now();
    let param = CreateOrderParam {
        user_id: user.id,
        restaurant_id: restaurant.id,
        total_price: 170_000,
        order_time: now,
        delivery_time: now + Duration::minutes(45),
        details: vec![
            CreateOrderDetailParam {
                menu_item_id: item.id,
                quantity: 2,
                price: 120_000,
                options: vec![OrderDetailOption {
                    menu_item_option_id: option.id,
                    price_adjustment: 10_000,
                }],
            },
            CreateOrderDetailParam {
                menu_item_id: item.id,
                quantity: 1,
                price: 50_000,
                options: Vec::new(),
            },
        ],
    };

    let repo = OrderRepository::new(db);
    let order = repo.create(param).await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.shipper_id, None);
    assert_eq!(order.total_price, 170_000);
    assert_eq!(order.details.len(), 2);
    assert_eq!(order.details[0].options.len(), 1);
    assert_eq!(order.details[0].options[0].price_adjustment, 10_000);

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.details, order.details);

    Ok(())
}
