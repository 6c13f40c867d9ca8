//! Handler contract for requests.
//!
//! A handler implements one contract: consume a request of a concrete type,
//! observe the caller's cancellation token, and produce the response type
//! that request declares. Handlers are stateless or externally scoped; their
//! lifetime belongs to the registry that hands them out, never to the
//! dispatcher.
//!
//! Two forms exist, following the same split as the rest of the crate:
//!
//! - [`RequestHandler`] — the ergonomic trait users implement (or satisfy
//!   with a plain async closure via the blanket impl).
//! - [`DynRequestHandler`] — the object-safe twin used behind registry
//!   erasure; every `RequestHandler` is one automatically.

use crate::error::BoxError;
use crate::request::Request;
use std::{future::Future, pin::Pin};
use tokio_util::sync::CancellationToken;

/// A handler for requests of type `R`.
///
/// Cancellation is advisory and cooperative: the token is forwarded by the
/// dispatcher unmodified, and responsiveness to it is entirely the handler's
/// business. Failures are returned as [`BoxError`] and reach the caller
/// verbatim.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `RequestHandler<{R}>` implementation",
    note = "Implement `handle` for `{R}`, or use an async closure `Fn({R}, CancellationToken) -> Result<Response, BoxError>`."
)]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    /// Process the request, producing its declared response.
    fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

// Blanket impl for async closures
impl<F, R, Fut> RequestHandler<R> for F
where
    R: Request,
    F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R::Response, BoxError>> + Send,
{
    fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send {
        (self)(request, cancel)
    }
}

/// Object-safe version of [`RequestHandler`] for type-erased storage.
///
/// Registries hold handlers as `Arc<dyn DynRequestHandler<R>>`; the
/// dispatcher recovers that type at the registry boundary and invokes
/// `handle` directly.
pub trait DynRequestHandler<R: Request>: Send + Sync {
    /// Process the request, producing its declared response.
    fn handle<'a>(
        &'a self,
        request: R,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>>;
}

impl<T, R> DynRequestHandler<R> for T
where
    T: RequestHandler<R>,
    R: Request,
{
    fn handle<'a>(
        &'a self,
        request: R,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>> {
        Box::pin(RequestHandler::handle(self, request, cancel))
    }
}
