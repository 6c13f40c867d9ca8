//! The mediator: resolve-then-invoke dispatch against a handler registry.

use crate::cache::ResolutionCache;
use courier_core::{
    DispatchError, DynRequestHandler, HandlerRegistry, Request, Unit,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Dispatches requests to the single handler registered for their type.
///
/// A mediator owns two things: the registry it resolves handlers from and a
/// per-request-type resolution cache. It never owns handler instances, never
/// spawns work, and keeps no per-call state — each dispatch is an
/// independent round trip against that shared state.
///
/// Construct one mediator per registry and pass it explicitly to callers;
/// it is safe to share behind an `Arc` across any number of threads.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .register::<Ping, _>(PingHandler)
///     .build();
/// let mediator = Mediator::new(registry);
///
/// let pong = mediator.dispatch(Ping, CancellationToken::new()).await?;
/// ```
pub struct Mediator<P: HandlerRegistry> {
    registry: P,
    cache: ResolutionCache,
}

impl<P: HandlerRegistry> Mediator<P> {
    /// Create a mediator over the given registry.
    pub fn new(registry: P) -> Self {
        Self {
            registry,
            cache: ResolutionCache::new(),
        }
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &P {
        &self.registry
    }

    /// Dispatch a request, returning the response its handler produces.
    ///
    /// The contract key for `R` is looked up in the cache (derived and
    /// inserted on first sight), the registry resolves the handler for that
    /// key, and the handler runs with the original request and the caller's
    /// cancellation token, both unmodified. The handler's result or failure
    /// flows back verbatim.
    ///
    /// An already-cancelled token does not pre-empt the call; observing it
    /// is the handler's responsibility.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NotRegistered`] if the registry has no entry for
    ///   the request's contract. The handler is never invoked.
    /// - [`DispatchError::ContractMismatch`] if the registry entry does not
    ///   downcast to the handler interface for `R`.
    /// - [`DispatchError::Handler`] wrapping the handler's own failure
    ///   transparently.
    pub async fn dispatch<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response, DispatchError> {
        let key = self.cache.contract_for::<R>();

        #[cfg(feature = "tracing")]
        tracing::trace!(request = key.request_name(), "resolving handler");

        let entry = self
            .registry
            .resolve(&key)
            .ok_or_else(|| DispatchError::NotRegistered {
                request: key.request_name(),
            })?;

        // Typed downcast at the registry boundary; the owned Arc means no
        // registry or cache lock is held across the handler await.
        let handler = entry
            .downcast_ref::<Arc<dyn DynRequestHandler<R>>>()
            .cloned()
            .ok_or_else(|| DispatchError::ContractMismatch {
                request: key.request_name(),
            })?;

        handler
            .handle(request, cancel)
            .await
            .map_err(DispatchError::Handler)
    }

    /// Dispatch a request that produces no meaningful response.
    ///
    /// Equivalent to [`dispatch`](Self::dispatch) specialized to [`Unit`],
    /// with the unit value discarded.
    pub async fn dispatch_void<R>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<(), DispatchError>
    where
        R: Request<Response = Unit>,
    {
        self.dispatch(request, cancel).await.map(|_| ())
    }
}
