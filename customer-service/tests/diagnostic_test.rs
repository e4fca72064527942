mod common;

use common::TestApp;
use customer_service::models::Customer;

#[tokio::test]
async fn reports_working_store_and_its_collections() {
    let app = TestApp::spawn().await;
    app.insert(Customer::new("Alice", "Johnson")).await;

    let response = app.get("/test").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], serde_json::json!(["customer"]));
    // The in-memory test store is configured without URL or name.
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "✅ Set");
}

#[tokio::test]
async fn missing_configuration_degrades_instead_of_failing() {
    let app = TestApp::spawn_without_store().await;

    let response = app.get("/test").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn unreachable_store_is_reported_not_raised() {
    let app = TestApp::spawn_with_unreachable_mongodb().await;

    let response = app.get("/test").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let database = body["database"].as_str().unwrap();
    let prefix = "⚠️  Connected but Error: ";
    assert!(database.starts_with(prefix), "unexpected status: {database}");
    assert!(database[prefix.len()..].chars().count() <= 50);

    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["collections"], serde_json::json!([]));
}
