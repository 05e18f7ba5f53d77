//! The handler contract shared by every route.
//!
//! A handler either returns a complete [`Response`] or fails with a
//! [`HandlerError`]; failures are rendered by the router's
//! [`ResponseHook`](super::ResponseHook). Async functions and closures taking a
//! [`Request`] and returning `Result<impl IntoResponse, HandlerError>` are
//! handlers as-is. Functions that always produce their own response are
//! adapted with [`plain`].

use std::future::Future;

use async_trait::async_trait;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};

use crate::error::HandlerError;

/// Outcome of a handler invocation.
pub type HandlerResult = Result<Response, HandlerError>;

/// Processes one routed request.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn call(&self, req: Request) -> HandlerResult;
}

#[async_trait]
impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
    R: IntoResponse,
{
    async fn call(&self, req: Request) -> HandlerResult {
        (self)(req).await.map(IntoResponse::into_response)
    }
}

/// Handler that always writes its own response. Created by [`plain`].
#[derive(Debug, Clone)]
pub struct Plain<F>(F);

/// Adapts a function that never fails into a [`Handler`].
///
/// The response hook never runs for plain handlers, whatever status they
/// return.
///
/// ```rust,ignore
/// router.head("/user", plain(|_req: Request| async { StatusCode::OK }))?;
/// ```
pub fn plain<F>(f: F) -> Plain<F> {
    Plain(f)
}

#[async_trait]
impl<F, Fut, R> Handler for Plain<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    async fn call(&self, req: Request) -> HandlerResult {
        Ok((self.0)(req).await.into_response())
    }
}
