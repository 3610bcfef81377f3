use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added, so entities with foreign keys
/// must come after the entities they reference. The grouped helpers below already
/// respect that order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Restaurant};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Restaurant)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement for the SQLite backend; the table is
    /// created when `build()` runs.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables: user, restaurant, menu, menu item, option and the
    /// category tables.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Restaurant)
            .with_table(Menu)
            .with_table(MenuItem)
            .with_table(MenuItemOption)
            .with_table(Category)
            .with_table(MenuItemCategory)
    }

    /// Adds the catalog tables plus the cart tables.
    pub fn with_cart_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Cart)
            .with_table(CartItem)
            .with_table(CartItemOption)
    }

    /// Adds every table needed to check out a cart, move the resulting order
    /// through its lifecycle and chat about it.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_order_tables().build().await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_cart_tables()
            .with_table(Shipper)
            .with_table(Order)
            .with_table(OrderDetail)
            .with_table(OrderDetailOption)
            .with_table(ShipperOrder)
            .with_table(ChatMessage)
    }

    /// Connects to the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
