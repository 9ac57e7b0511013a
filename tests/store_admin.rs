//! Store provisioning tests against the in-memory storage engine.

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use storeops::db::models::StoreCreate;
use storeops::db::repository::{RepoError, StoreRepository};

async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("storeops").use_db("backoffice").await.unwrap();
    db
}

fn payload(code: &str, name: &str) -> StoreCreate {
    StoreCreate {
        code: code.to_string(),
        brand: "Shree Ganesh".to_string(),
        name: name.to_string(),
        city: "Pune".to_string(),
        owner_id: None,
    }
}

#[tokio::test]
async fn provisioned_store_is_retrievable_by_code() {
    let repo = StoreRepository::new(mem_db().await);

    let created = repo.create(payload("ST01", "Main Road")).await.unwrap();
    assert_eq!(created.code, "ST01");

    let found = repo.find_by_code("ST01").await.unwrap().unwrap();
    assert_eq!(found.name, "Main Road");
    assert_eq!(found.brand, "Shree Ganesh");
    assert!(repo.find_by_code("ST99").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_store_code_is_rejected() {
    let repo = StoreRepository::new(mem_db().await);

    repo.create(payload("ST01", "Main Road")).await.unwrap();
    let err = repo.create(payload("ST01", "Other Name")).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // The original record survives the rejected duplicate.
    let kept = repo.find_by_code("ST01").await.unwrap().unwrap();
    assert_eq!(kept.name, "Main Road");
}

#[tokio::test]
async fn listing_orders_by_name() {
    let repo = StoreRepository::new(mem_db().await);
    repo.create(payload("ST02", "Market Square")).await.unwrap();
    repo.create(payload("ST01", "Airport Road")).await.unwrap();

    let stores = repo.find_all().await.unwrap();
    let names: Vec<&str> = stores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Airport Road", "Market Square"]);
}
