use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{debug, error, info, trace};

use crate::config::connect;

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");

    let db = connect(database_url).await.inspect_err(|e| {
        error!("Failed to connect to database '{}': {}", database_url, e);
    })?;

    apply_migrations(&db).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}

/// Run every pending migration against `db`.
pub(crate) async fn apply_migrations(db: &DatabaseConnection) -> Result<()> {
    info!("Running database migrations");
    match Migrator::up(db, None).await {
        Ok(_) => {
            info!("Database migrations completed successfully");
            debug!("All pending migrations have been applied");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run database migrations: {}", e);
            Err(e.into())
        }
    }
}
