mod common;

use axum::http::{Method, StatusCode};
use common::{flagging_handler, request, send, was_called};
use webapi::router::Router;

async fn assert_verb_routes(method: Method) {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.route(method.clone(), "/user", handler).unwrap();
    let mux = router.into_service();

    let response = send(&mux, request(method, "/user")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(was_called(&called));
}

#[tokio::test]
async fn test_get() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.get("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::GET, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_post() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.post("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::POST, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_put() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.put("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::PUT, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_patch() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.patch("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::PATCH, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_delete() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.delete("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::DELETE, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_head() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.head("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::HEAD, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_options() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.options("/user", handler).unwrap();
    let mux = router.into_service();

    send(&mux, request(Method::OPTIONS, "/user")).await;

    assert!(was_called(&called));
}

#[tokio::test]
async fn test_generic_route_accepts_custom_method() {
    assert_verb_routes(Method::from_bytes(b"PURGE").unwrap()).await;
}

#[tokio::test]
async fn test_method_mismatch_is_not_found() {
    let (called, handler) = flagging_handler();
    let mut router = Router::new();
    router.get("/user", handler).unwrap();
    let mux = router.into_service();

    let response = send(&mux, request(Method::POST, "/user")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!was_called(&called));
}
