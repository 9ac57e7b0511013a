//! Server state
//!
//! [`ServerState`] holds the shared handles every handler needs: the config
//! and the embedded database connection. Cloning is cheap (the SurrealDB
//! handle is internally reference-counted).

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::Config;
use crate::utils::AppError;

const NAMESPACE: &str = "storeops";
const DATABASE: &str = "backoffice";

#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Wrap an existing database handle (used by tests with the in-memory engine)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Open the embedded database under `work_dir/database` and select the
    /// application namespace.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {}", e)))?;

        let db_path = config.database_dir().join("storeops.db");
        let db = Surreal::new::<RocksDb>(db_path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        tracing::info!("Database opened at {}", db_path.display());

        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
