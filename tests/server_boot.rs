//! Boot path test: the embedded database opens under a fresh work directory
//! and the work-dir layout is created on demand.

use tempfile::TempDir;

use storeops::{Config, ServerState};

#[tokio::test]
async fn initialize_creates_work_dir_and_opens_database() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);

    let state = ServerState::initialize(&config).await.unwrap();

    assert!(config.database_dir().is_dir());
    assert!(config.log_dir().is_dir());

    // The handle is usable immediately after initialize.
    let rows: Vec<serde_json::Value> = state.db.select("user_profile").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn work_dir_creation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);

    config.ensure_work_dir_structure().unwrap();
    config.ensure_work_dir_structure().unwrap();
    assert!(config.database_dir().is_dir());
}
