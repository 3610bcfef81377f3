use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment backed by a single in-memory SQLite database.
///
/// The connection and the session are created lazily on first access. The session
/// store lives in the same database as the application tables, mirroring how the
/// server shares one pool between SeaORM and `tower-sessions`.
///
/// `sqlite::memory:` gives every connection its own database, so the pool behind
/// `db` holds exactly one connection. Tests that open a transaction must route all
/// queries through that transaction until it is committed or dropped.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory database, set by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same in-memory database, set by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context; nothing is connected until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database connection, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection to the in-memory database
    /// - `Err(TestError::Database)` - Connecting to SQLite failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => Err(sea_orm::DbErr::Custom("database not initialized".to_string()).into()),
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; statements must already be sorted so that
    /// referenced tables come before the tables pointing at them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table on first call.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session backed by the in-memory database
    /// - `Err(TestError::Database)` - Connecting or migrating the session store failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);

            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(1))),
            ));
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => Err(sea_orm::DbErr::Custom("session not initialized".to_string()).into()),
        }
    }

    /// Returns both the connection and the session.
    ///
    /// Calling `database()` and `session()` separately would hold two mutable borrows
    /// of the context, which the borrow checker rejects.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
