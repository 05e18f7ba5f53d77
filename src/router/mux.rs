//! The immutable dispatcher produced by [`Router::into_service`].
//!
//! # Data Flow
//!
//! ```text
//! Request
//!     → split path into segments, percent-decode each
//!     → RouteTable lookup (method, then patterns in registration order)
//!     → Matched:   attach Params to request extensions, call handler
//!     → Unmatched: call not-found handler, or 404 with empty body
//!     → Err(HandlerError) from the handler → ResponseHook
//!     → Response
//! ```
//!
//! [`Router::into_service`]: super::Router::into_service

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::BoxError;
use axum::body::{Body, Bytes, HttpBody};
use axum::extract::Request;
use axum::http::{self, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::Service;

use crate::router::handler::Handler;
use crate::router::hook::{RequestHead, ResponseHook};
use crate::router::pattern::decode_path;
use crate::router::table::RouteTable;

pub(crate) struct Inner {
    pub(crate) table: RouteTable,
    pub(crate) not_found: Option<Arc<dyn Handler>>,
    pub(crate) hook: Arc<dyn ResponseHook>,
}

/// Request dispatcher.
///
/// Cheap to clone; all clones share one read-only route table. Implements
/// [`tower::Service`] so it can be served directly or wrapped in tower
/// middleware.
#[derive(Clone)]
pub struct Mux {
    inner: Arc<Inner>,
}

impl Mux {
    pub(crate) fn new(inner: Inner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Number of registered routes across all methods.
    pub fn route_count(&self) -> usize {
        self.inner.table.len()
    }

    /// Routes and handles one request.
    ///
    /// Never fails: handler failures are rendered by the response hook.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        let head = RequestHead {
            method: req.method().clone(),
            uri: req.uri().clone(),
        };

        let matched = decode_path(head.uri.path()).and_then(|decoded| {
            let segments: Vec<&str> = decoded.iter().map(AsRef::as_ref).collect();
            self.inner.table.lookup(&head.method, &segments)
        });

        let handler = match matched {
            Some((route, params)) => {
                tracing::debug!(
                    method = %head.method,
                    path = %head.uri.path(),
                    route = route.pattern.as_str(),
                    "Route matched"
                );
                req.extensions_mut().insert(params);
                Arc::clone(&route.handler)
            }
            None => {
                tracing::debug!(
                    method = %head.method,
                    path = %head.uri.path(),
                    "No route matched"
                );
                match &self.inner.not_found {
                    Some(handler) => Arc::clone(handler),
                    None => return StatusCode::NOT_FOUND.into_response(),
                }
            }
        };

        match handler.call(req).await {
            Ok(response) => response,
            Err(error) => self.inner.hook.respond(&head, &error),
        }
    }
}

impl<B> Service<http::Request<B>> for Mux
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let mux = self.clone();
        let req = req.map(Body::new);
        Box::pin(async move { Ok(mux.dispatch(req).await) })
    }
}
