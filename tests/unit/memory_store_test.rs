//! Unit tests for the in-memory document store

use bson::{doc, Bson};
use finance_data_api::store::{DocumentStore, MemoryStore, SortOrder, StoreError};

#[tokio::test]
async fn test_insert_assigns_object_id() {
    let store = MemoryStore::new();

    let id = store
        .insert_one("expenses", doc! { "expenseName": "Coffee" })
        .await
        .unwrap();

    assert!(matches!(id, Bson::ObjectId(_)));
    let docs = store
        .find_sorted("expenses", &SortOrder::descending("createdAt"))
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].get("_id"), Some(&id));
}

#[tokio::test]
async fn test_empty_collection() {
    let store = MemoryStore::new();
    let docs = store
        .find_sorted("goals", &SortOrder::descending("createdAt"))
        .await
        .unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_ascending_numeric_sort() {
    let store = MemoryStore::new();
    store.seed(
        "monthlycharts",
        vec![
            doc! { "month": "March", "monthNumber": 3 },
            doc! { "month": "January", "monthNumber": 1_i64 },
            doc! { "month": "February", "monthNumber": 2.0 },
        ],
    );

    let docs = store
        .find_sorted("monthlycharts", &SortOrder::ascending("monthNumber"))
        .await
        .unwrap();
    let months: Vec<&str> = docs.iter().map(|d| d.get_str("month").unwrap()).collect();

    assert_eq!(months, vec!["January", "February", "March"]);
}

#[tokio::test]
async fn test_descending_date_sort_with_missing_field() {
    let store = MemoryStore::new();
    store.seed(
        "expenses",
        vec![
            doc! { "expenseName": "old", "createdAt": bson::DateTime::from_millis(1_000) },
            doc! { "expenseName": "undated" },
            doc! { "expenseName": "new", "createdAt": bson::DateTime::from_millis(2_000) },
        ],
    );

    let docs = store
        .find_sorted("expenses", &SortOrder::descending("createdAt"))
        .await
        .unwrap();
    let names: Vec<&str> = docs.iter().map(|d| d.get_str("expenseName").unwrap()).collect();

    assert_eq!(names, vec!["new", "old", "undated"]);
}

#[tokio::test]
async fn test_unavailable_store_fails_every_operation() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    let insert = store.insert_one("expenses", doc! {}).await;
    assert!(matches!(insert, Err(StoreError::Unavailable(_))));

    let find = store
        .find_sorted("expenses", &SortOrder::descending("createdAt"))
        .await;
    assert!(find.is_err());
    assert!(store.ping().await.is_err());
    assert_eq!(store.write_count(), 0);

    store.set_unavailable(false);
    assert!(store.ping().await.is_ok());
}
