pub mod axum_http;
pub mod config;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use crates::infra::db::postgres::postgres_connection;
use tracing::info;

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("backend")?;

    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = Arc::new(postgres_connection::establish_connection(
        &dotenvy_env.database.url,
        dotenvy_env.database.max_connections,
    ));
    info!(
        max_connections = dotenvy_env.database.max_connections,
        "Postgres pool has been created"
    );

    axum_http::http_serve::start(Arc::new(dotenvy_env), Arc::clone(&postgres_pool)).await?;

    drop(postgres_pool);
    info!("Postgres pool has been closed");

    Ok(())
}
