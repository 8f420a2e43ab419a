use anyhow::Result;
use tracing::{debug, error, info, trace};

use super::initdb::apply_migrations;
use super::serve::run_server;
use crate::config::connect;
use crate::schemas::AppState;
use crate::store::Store;

pub async fn migrate_and_serve(database_url: &str, bind_address: &str) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");
    debug!("Database URL: {}", database_url);

    let db = connect(database_url).await.inspect_err(|e| {
        error!("Failed to connect to database '{}': {}", database_url, e);
    })?;

    apply_migrations(&db).await?;

    let state = AppState {
        store: Store::new(db),
    };
    run_server(state, bind_address).await
}
