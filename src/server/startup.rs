use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on a SQLite store sharing the SeaORM pool.
///
/// Creates the session table if it does not exist yet.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let store = SqliteStore::new(pool);

    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(layer)
}

/// CORS layer allowing the web client at `APP_URL` to send credentialed requests.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Logs a warning when no admin exists yet.
///
/// Registration grants admin to the first account while no admin exists, so this
/// only points the operator at the register endpoint.
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    tracing::warn!(
        "No admin user exists; the next account registered via POST /api/auth/register becomes admin"
    );

    Ok(())
}
