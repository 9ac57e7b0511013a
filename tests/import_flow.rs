//! End-to-end importer tests: workbook bytes through parse, normalize and
//! keyed upsert against the in-memory storage engine.

use rust_xlsxwriter::Workbook;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use storeops::db::models::{RokarData, RokarEntry};
use storeops::db::repository::RokarRepository;
use storeops::import::{import_rows, normalize_rows, parse_workbook};

const STORE: &str = "ST01";
const IMPORTER: &str = "ops@chain.example";

async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("storeops").use_db("backoffice").await.unwrap();
    db
}

/// A realistic three-day sheet: banner row, header row, then data. Dates use
/// the D/M/YYYY text form on two rows and an Excel serial on the third.
fn sample_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet
        .write_string(0, 0, "SHREE GANESH RETAIL - JANUARY 2024")
        .unwrap();

    let headers = [
        "DATE",
        "OPENING BALANCE",
        "TOTAL SALE",
        "PAYTM",
        "RENT",
        "TOTAL EXPENSE",
    ];
    for (col, label) in headers.iter().enumerate() {
        sheet.write_string(1, col as u16, *label).unwrap();
    }

    // 05/01/2024
    sheet.write_string(2, 0, "05/01/2024").unwrap();
    sheet.write_number(2, 1, 1000.0).unwrap();
    sheet.write_number(2, 2, 45200.5).unwrap();
    sheet.write_string(2, 3, "₹12,345").unwrap();
    sheet.write_number(2, 4, 900.0).unwrap();
    // TOTAL EXPENSE left blank: falls back to the category sum.

    // 06/01/2024
    sheet.write_string(3, 0, "6-1-2024").unwrap();
    sheet.write_number(3, 1, 2000.0).unwrap();
    sheet.write_number(3, 2, 38000.0).unwrap();

    // Serial 45300 = 2024-01-09
    sheet.write_number(4, 0, 45300.0).unwrap();
    sheet.write_number(4, 2, 51000.0).unwrap();

    workbook.save_to_buffer().unwrap()
}

async fn normalized_sample() -> Vec<RokarData> {
    let bytes = sample_workbook();
    let grid = parse_workbook(&bytes).unwrap();
    normalize_rows(&grid).unwrap()
}

#[tokio::test]
async fn workbook_rows_normalize_with_all_date_encodings() {
    let rows = normalized_sample().await;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].date, "2024-01-05");
    assert_eq!(rows[1].date, "2024-01-06");
    assert_eq!(rows[2].date, "2024-01-09");

    assert_eq!(rows[0].opening_balance, 1000.0);
    assert_eq!(rows[0].total_sale, 45200.5);
    assert_eq!(rows[0].payments.paytm, 12345.0);
    assert_eq!(rows[0].expenses["RENT"], 900.0);
    // Blank declared total falls back to the category sum.
    assert_eq!(rows[0].total_expense, 900.0);
}

#[tokio::test]
async fn fresh_import_inserts_every_row() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db);
    let rows = normalized_sample().await;

    let summary = import_rows(&repo, STORE, rows, false, IMPORTER).await;

    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.overwritten, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 0);

    let stored = repo.find_by_key(STORE, "2024-01-05").await.unwrap().unwrap();
    assert_eq!(stored.store_id, STORE);
    assert_eq!(stored.data.total_sale, 45200.5);
    assert_eq!(stored.imported_by.as_deref(), Some(IMPORTER));
    assert!(stored.updated_at.is_none());
}

#[tokio::test]
async fn duplicate_rows_are_skipped_without_overwrite() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db);

    // Pre-seed one of the three days with different figures.
    let seeded = RokarData {
        date: "2024-01-06".into(),
        total_sale: 99999.0,
        ..Default::default()
    };
    repo.upsert_entry(STORE, seeded, false, "seed@chain.example")
        .await
        .unwrap();

    let summary = import_rows(&repo, STORE, normalized_sample().await, false, IMPORTER).await;

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.overwritten, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors, 0);

    // The seeded record survived untouched.
    let kept = repo.find_by_key(STORE, "2024-01-06").await.unwrap().unwrap();
    assert_eq!(kept.data.total_sale, 99999.0);
    assert_eq!(kept.imported_by.as_deref(), Some("seed@chain.example"));
}

#[tokio::test]
async fn overwrite_replaces_the_whole_document() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db);

    let mut seeded = RokarData {
        date: "2024-01-06".into(),
        total_sale: 99999.0,
        ..Default::default()
    };
    seeded.expenses.insert("TRANSPORT".into(), 450.0);
    repo.upsert_entry(STORE, seeded, false, "seed@chain.example")
        .await
        .unwrap();
    let before = repo.find_by_key(STORE, "2024-01-06").await.unwrap().unwrap();

    let summary = import_rows(&repo, STORE, normalized_sample().await, true, IMPORTER).await;

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.overwritten, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 0);

    let after = repo.find_by_key(STORE, "2024-01-06").await.unwrap().unwrap();
    assert_eq!(after.data.total_sale, 38000.0);
    // Whole-document replace: the seeded expense category is gone.
    assert!(after.data.expenses.get("TRANSPORT").is_none());
    assert_eq!(after.imported_by.as_deref(), Some(IMPORTER));
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at.is_some());
}

#[tokio::test]
async fn reimport_without_overwrite_is_idempotent() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db);

    let first = import_rows(&repo, STORE, normalized_sample().await, false, IMPORTER).await;
    assert_eq!(first.inserted, 3);

    let second = import_rows(&repo, STORE, normalized_sample().await, false, IMPORTER).await;
    assert_eq!(second.inserted, 0);
    assert_eq!(second.overwritten, 0);
    assert_eq!(second.skipped, 3);
    assert_eq!(second.errors, 0);
}

#[tokio::test]
async fn blank_store_id_tallies_errors_and_writes_nothing() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db.clone());

    let summary = import_rows(&repo, "  ", normalized_sample().await, false, IMPORTER).await;

    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.errors, 3);

    let all: Vec<RokarEntry> = db.select("rokar").await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn range_query_returns_imported_days_in_order() {
    let db = mem_db().await;
    let repo = RokarRepository::new(db);
    import_rows(&repo, STORE, normalized_sample().await, false, IMPORTER).await;

    let entries = repo
        .find_range(STORE, "2024-01-01", "2024-01-31")
        .await
        .unwrap();
    let dates: Vec<&str> = entries.iter().map(|e| e.data.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-06", "2024-01-09"]);

    // Other stores never leak into the range.
    let other = repo
        .find_range("ST02", "2024-01-01", "2024-01-31")
        .await
        .unwrap();
    assert!(other.is_empty());
}
