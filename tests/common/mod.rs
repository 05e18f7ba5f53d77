#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::Method;
use axum::response::Response;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tower::ServiceExt;
use webapi::error::HandlerError;
use webapi::router::{Handler, Mux};

pub fn request(method: Method, uri: &str) -> Request {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_body(method: Method, uri: &str, content_type: &str, body: &str) -> Request {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request through the mux's `tower::Service` implementation.
pub async fn send(mux: &Mux, req: Request) -> Response {
    mux.clone().oneshot(req).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Handler that records that it ran.
pub fn flagging_handler() -> (Arc<AtomicBool>, impl Handler) {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let handler = move |_req: Request| {
        let flag = flag.clone();
        async move {
            flag.store(true, Ordering::SeqCst);
            Ok::<_, HandlerError>(())
        }
    };

    (called, handler)
}

pub fn was_called(flag: &AtomicBool) -> bool {
    flag.load(Ordering::SeqCst)
}
