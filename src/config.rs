use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::{debug, info};

use crate::schemas::AppState;
use crate::store::Store;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://sitegear.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Open the database with foreign-key enforcement switched on.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Enable foreign keys
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    debug!("Foreign key enforcement enabled");

    Ok(db)
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let db = connect(database_url).await?;

    Ok(AppState {
        store: Store::new(db),
    })
}
