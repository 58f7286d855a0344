use crate::common::{TestApp, routes};

#[tokio::test]
async fn root_reports_service_is_running() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ROOT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "Replix AI Backend is running");
}

#[tokio::test]
async fn diagnostics_reports_connected_store() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::DIAGNOSTICS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["backend"], "running");
    assert_eq!(res.body["database"], "connected (memory)");
    assert_eq!(res.body["connection_status"], "connected");
    assert_eq!(res.body["database_url"], "not set");
    assert_eq!(res.body["database_name"], "not set");
    assert_eq!(res.body["tables"][0], "generation");
}

#[tokio::test]
async fn diagnostics_answers_when_storage_is_unavailable() {
    let app = TestApp::spawn_unavailable().await;

    let res = app.get(routes::DIAGNOSTICS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["backend"], "running");
    assert_eq!(res.body["connection_status"], "not connected");
    assert_eq!(
        res.body["database"],
        "not available: connection refused"
    );
    assert!(res.body["tables"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn openapi_document_lists_generation_routes() {
    let app = TestApp::spawn().await;

    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    let paths = &res.body["paths"];
    assert!(paths.get("/api/generate").is_some());
    assert!(paths.get("/api/download/{id}").is_some());
    assert!(paths.get("/api/history").is_some());
    assert!(paths.get("/test").is_some());
}
