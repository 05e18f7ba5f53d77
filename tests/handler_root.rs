use axum_test::TestServer;
use serde_json::Value;
use webapi::routes::app_router;

#[tokio::test]
async fn test_root_reports_ready() {
    let server = TestServer::new(app_router().unwrap()).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "ready");
}

#[tokio::test]
async fn test_unknown_path_gets_json_404() {
    let server = TestServer::new(app_router().unwrap()).unwrap();

    let response = server.get("/user/john").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "Not Found");
    assert_eq!(json["message"], "");
}

#[tokio::test]
async fn test_wrong_method_on_root_gets_json_404() {
    let server = TestServer::new(app_router().unwrap()).unwrap();

    let response = server.post("/").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["status"], "Not Found");
}
