//! Repository integration tests against the in-memory store

use bson::doc;
use finance_data_api::error::AppError;
use finance_data_api::records::{
    Expense, Goal, Message, NewExpense, NewGoal, NewMessage, NewSmsMessage, SmsMessage,
};
use finance_data_api::repository::{Repositories, Repository};
use finance_data_api::store::{DocumentStore, MemoryStore, SortOrder};
use std::sync::Arc;
use std::time::Duration;

fn setup() -> (Arc<MemoryStore>, Repositories) {
    let store = Arc::new(MemoryStore::new());
    let repos = Repositories::new(store.clone());
    (store, repos)
}

fn expense(name: &str, amount: f64) -> NewExpense {
    NewExpense {
        expense_name: Some(name.to_string()),
        expense_month: Some("March".to_string()),
        expense_amount: Some(amount),
    }
}

#[tokio::test]
async fn test_inserted_expense_listed_exactly_once() {
    let (_store, repos) = setup();

    let saved = repos.expenses.insert(&expense("Coffee", 4.5)).await.unwrap();
    let listed = repos.expenses.list().await.unwrap();

    let matches: Vec<&Expense> = listed.iter().filter(|e| e.id == saved.id).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].expense_name.as_deref(), Some("Coffee"));
    assert_eq!(matches[0].created_at, saved.created_at);
}

#[tokio::test]
async fn test_expenses_listed_newest_first() {
    let (_store, repos) = setup();

    for (i, name) in ["first", "second", "third"].iter().enumerate() {
        repos.expenses.insert(&expense(name, i as f64)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed = repos.expenses.list().await.unwrap();
    let names: Vec<&str> = listed
        .iter()
        .filter_map(|e| e.expense_name.as_deref())
        .collect();
    assert_eq!(names, vec!["third", "second", "first"]);

    let times: Vec<i64> = listed
        .iter()
        .filter_map(|e| e.created_at.map(|t| t.timestamp_millis()))
        .collect();
    assert!(times.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_goal_roundtrip_keeps_fields() {
    let (_store, repos) = setup();

    let saved: Goal = repos
        .goals
        .insert(&NewGoal {
            goal_name: Some("Vacation".to_string()),
            target_amount: Some(50000.0),
            timeframe: Some("12".to_string()),
        })
        .await
        .unwrap();

    assert!(saved.id.is_some());
    let listed = repos.goals.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].target_amount, Some(50000.0));
    assert_eq!(listed[0].timeframe.as_deref(), Some("12"));
}

#[tokio::test]
async fn test_sms_validation_prevents_write() {
    let (store, repos) = setup();

    let result = repos
        .sms_messages
        .insert(&NewSmsMessage {
            body: Some("Rs 500 debited".to_string()),
            sender: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(store.write_count(), 0);
    assert!(repos.sms_messages.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sms_with_both_fields_is_retrievable() {
    let (_store, repos) = setup();

    repos
        .sms_messages
        .insert(&NewSmsMessage {
            body: Some("Rs 500 debited".to_string()),
            sender: Some("HDFCBK".to_string()),
        })
        .await
        .unwrap();

    let listed: Vec<SmsMessage> = repos.sms_messages.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].sender.as_deref(), Some("HDFCBK"));
    assert!(listed[0].created_at.is_some());
}

#[tokio::test]
async fn test_message_has_id_but_no_timestamp() {
    let (store, repos) = setup();

    let saved: Message = repos
        .messages
        .insert(&NewMessage {
            address: Some("+1555".to_string()),
            date: Some("2024-01-01".to_string()),
            time: Some("09:00".to_string()),
            body: Some("Paid $20".to_string()),
        })
        .await
        .unwrap();

    assert!(saved.id.is_some());
    let raw = store
        .find_sorted("messages", &SortOrder::descending("date"))
        .await
        .unwrap();
    assert!(!raw[0].contains_key("createdAt"));
}

#[tokio::test]
async fn test_messages_listed_by_date_descending() {
    let (_store, repos) = setup();

    for date in ["2024-01-02", "2024-03-15", "2023-12-31"] {
        repos
            .messages
            .insert(&NewMessage {
                date: Some(date.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let dates: Vec<String> = repos
        .messages
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|m| m.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-15", "2024-01-02", "2023-12-31"]);
}

#[tokio::test]
async fn test_list_sorted_with_custom_order() {
    let store = Arc::new(MemoryStore::new());
    let repo: Repository<Expense> = Repository::new(store.clone());

    repo.insert(&expense("big", 90.0)).await.unwrap();
    repo.insert(&expense("small", 10.0)).await.unwrap();

    let listed = repo
        .list_sorted(&SortOrder::ascending("expenseAmount"))
        .await
        .unwrap();
    assert_eq!(listed[0].expense_name.as_deref(), Some("small"));
}

#[tokio::test]
async fn test_repeated_lists_are_identical() {
    let (store, repos) = setup();
    store.seed(
        "categorycharts",
        vec![
            doc! { "_id": "Food", "category": "Food", "value": 1200.5 },
            doc! { "_id": "Travel", "category": "Travel", "value": 300 },
        ],
    );

    let first: Vec<String> = repos
        .category_charts
        .list()
        .await
        .unwrap()
        .iter()
        .map(|c| serde_json::to_string(c).unwrap())
        .collect();
    let second: Vec<String> = repos
        .category_charts
        .list()
        .await
        .unwrap()
        .iter()
        .map(|c| serde_json::to_string(c).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_store_outage_surfaces_as_storage_error() {
    let (store, repos) = setup();
    store.set_unavailable(true);

    let insert = repos.expenses.insert(&expense("Coffee", 4.5)).await;
    assert!(matches!(insert, Err(AppError::Storage(_))));

    let list = repos.goals.list().await;
    assert!(matches!(list, Err(AppError::Storage(_))));
}

#[tokio::test]
async fn test_legacy_text_amount_is_listed_as_absent() {
    let (store, repos) = setup();
    store.seed(
        "expenses",
        vec![
            doc! { "expenseName": "Lunch", "expenseAmount": "12" },
            doc! { "expenseName": "Rent", "expenseAmount": "Rs 500" },
        ],
    );

    let listed = repos.expenses.list().await.unwrap();
    assert_eq!(listed.len(), 2);

    let lunch = listed.iter().find(|e| e.expense_name.as_deref() == Some("Lunch")).unwrap();
    let rent = listed.iter().find(|e| e.expense_name.as_deref() == Some("Rent")).unwrap();
    assert_eq!(lunch.expense_amount, Some(12.0));
    assert_eq!(rent.expense_amount, None);
}
