use crate::config::Config;
use crate::db::create_schema;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    connect(&config.database.url, config.database.max_connections).await
}

/// Opens a pool against `url` and makes sure every table exists.
///
/// In-memory SQLite databases live and die with their connection, so tests
/// pass `max_connections = 1` to keep a single shared database.
pub async fn connect(url: &str, max_connections: u32) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    create_schema(&db).await?;

    log::debug!(
        "Connected to {:?} database with up to {} connections",
        db.get_database_backend(),
        max_connections
    );

    Ok(db)
}
