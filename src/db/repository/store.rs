//! Store repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Store, StoreCreate};

const TABLE: &str = "store";

#[derive(Clone)]
pub struct StoreRepository {
    base: BaseRepository,
}

impl StoreRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All stores ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Store>> {
        let stores: Vec<Store> = self
            .base
            .db()
            .query("SELECT * FROM store ORDER BY name")
            .await?
            .take(0)?;
        Ok(stores)
    }

    /// Look up a store by its code key
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<Store>> {
        let key = RecordId::from_table_key(TABLE, code);
        let store: Option<Store> = self.base.db().select(key).await?;
        Ok(store)
    }

    /// Provision a store (chain administration / seeding)
    pub async fn create(&self, data: StoreCreate) -> RepoResult<Store> {
        if self.find_by_code(&data.code).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Store '{}' already exists",
                data.code
            )));
        }

        let store = Store {
            id: None,
            code: data.code.clone(),
            brand: data.brand,
            name: data.name,
            city: data.city,
            owner_id: data.owner_id,
        };

        let created: Option<Store> = self
            .base
            .db()
            .create((TABLE, data.code.as_str()))
            .content(store)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create store".to_string()))
    }
}
