mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::setup_cors(&config)?;

    startup::check_for_admin(&db).await?;

    let app = server::router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
