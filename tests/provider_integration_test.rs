use std::sync::Arc;

use folio::core::provider::{self, FileSource};
use folio::server::{router, AppState};
use folio::PortfolioDocument;
use tempfile::TempDir;
use tokio::net::TcpListener;

async fn serve_document(document: PortfolioDocument) -> String {
    let app = router(Arc::new(AppState { document }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", address)
}

#[tokio::test]
async fn test_portfolio_route_serves_disk_document_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portfolio.json");

    // Shape the provider has never heard of; it must pass through untouched.
    let document = serde_json::json!({
        "personal": {"name": "Robin Vale", "title": "Engineer", "email": "robin@example.com"},
        "social": [{"label": "GitHub", "url": "https://github.com/robinvale"}],
        "experience": [],
        "projects": [{"name": "One", "tags": ["rust", "http"]}],
        "skills": [],
        "testimonials": [],
        "unexpected": {"nested": [1, 2, 3]}
    });
    std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

    let loaded = provider::load_document(&FileSource::new(&path)).await;
    let base = serve_document(loaded).await;

    let response = reqwest::get(format!("{}/portfolio", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, document);
}

#[tokio::test]
async fn test_portfolio_route_serves_fallback_when_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does_not_exist.json");

    let loaded = provider::load_document(&FileSource::new(&missing)).await;
    let base = serve_document(loaded).await;

    let response = reqwest::get(format!("{}/portfolio", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: PortfolioDocument = response.json().await.unwrap();
    assert_eq!(body, PortfolioDocument::fallback());

    assert!(!body.personal_field("name").unwrap().is_empty());
    for section in ["social", "experience", "projects", "skills", "testimonials"] {
        assert_eq!(body.section_len(section), 0);
    }
}

#[tokio::test]
async fn test_portfolio_route_serves_fallback_for_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portfolio.json");
    std::fs::write(&path, b"{broken").unwrap();

    let loaded = provider::load_document(&FileSource::new(&path)).await;
    let base = serve_document(loaded).await;

    let body: PortfolioDocument = reqwest::get(format!("{}/portfolio", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, PortfolioDocument::fallback());
}

#[tokio::test]
async fn test_health_route_reports_ok_with_valid_timestamp() {
    let base = serve_document(PortfolioDocument::fallback()).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
