//! Testing utilities for Courier.
//!
//! This module provides doubles for exercising dispatch behavior without
//! real handlers or registries.
//!
//! - [`RecordingHandler`]: records requests and observed cancellation tokens,
//!   returns a programmed response
//! - [`FailingHandler`]: always fails with a given message
//! - [`EmptyRegistry`]: a registry with nothing in it
//! - [`SpyRegistry`]: wraps a registry and records every key it resolves

use courier_core::{BoxError, ContractKey, HandlerRegistry, Request, RequestHandler};
use std::any::Any;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records everything it is invoked with.
///
/// Each invocation stores a clone of the request and the cancellation token
/// it observed, then returns the programmed response. Clones of the handler
/// share the recorded state.
///
/// # Example
///
/// ```rust,ignore
/// let handler = RecordingHandler::returning(Pong { value: "pong".into() });
/// let probe = handler.clone();
///
/// // Register and dispatch...
///
/// assert_eq!(probe.call_count(), 1);
/// assert!(probe.last_token().unwrap().is_cancelled());
/// ```
pub struct RecordingHandler<R: Request> {
    requests: Arc<Mutex<Vec<R>>>,
    tokens: Arc<Mutex<Vec<CancellationToken>>>,
    response: Arc<Mutex<R::Response>>,
}

impl<R> RecordingHandler<R>
where
    R: Request + Clone,
    R::Response: Clone,
{
    /// Create a recording handler that returns the given response.
    pub fn returning(response: R::Response) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            tokens: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<R> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of invocations.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Get the cancellation token observed by the most recent invocation.
    pub fn last_token(&self) -> Option<CancellationToken> {
        self.tokens.lock().unwrap().last().cloned()
    }

    /// Replace the programmed response.
    pub fn set_response(&self, response: R::Response) {
        *self.response.lock().unwrap() = response;
    }
}

impl<R: Request> Clone for RecordingHandler<R> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            tokens: self.tokens.clone(),
            response: self.response.clone(),
        }
    }
}

impl<R> RequestHandler<R> for RecordingHandler<R>
where
    R: Request + Clone,
    R::Response: Clone,
{
    async fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response, BoxError> {
        self.requests.lock().unwrap().push(request);
        self.tokens.lock().unwrap().push(cancel);
        let response = self.response.lock().unwrap().clone();
        Ok(response)
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the given message.
pub struct FailingHandler<R> {
    message: String,
    _marker: PhantomData<fn(R)>,
}

impl<R> FailingHandler<R> {
    /// Create a failing handler.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<R: Request> RequestHandler<R> for FailingHandler<R> {
    async fn handle(
        &self,
        _request: R,
        _cancel: CancellationToken,
    ) -> Result<R::Response, BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Empty Registry
// ============================================================================

/// A registry that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl HandlerRegistry for EmptyRegistry {
    fn resolve(&self, _key: &ContractKey) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }
}

// ============================================================================
// Spy Registry
// ============================================================================

/// A registry wrapper that records every contract key it is asked to resolve.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyRegistry::new(registry);
/// let keys = spy.keys();
/// assert_eq!(keys[0], keys[1], "same request type, same derived key");
/// ```
pub struct SpyRegistry<P> {
    inner: P,
    seen: Arc<Mutex<Vec<ContractKey>>>,
}

impl<P> SpyRegistry<P> {
    /// Wrap a registry.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the keys resolved so far, in call order.
    pub fn keys(&self) -> Vec<ContractKey> {
        self.seen.lock().unwrap().clone()
    }

    /// Get the number of resolve calls.
    pub fn resolve_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Get a probe sharing this spy's recorded state.
    pub fn probe(&self) -> SpyProbe {
        SpyProbe {
            seen: self.seen.clone(),
        }
    }
}

impl<P: HandlerRegistry> HandlerRegistry for SpyRegistry<P> {
    fn resolve(&self, key: &ContractKey) -> Option<Arc<dyn Any + Send + Sync>> {
        self.seen.lock().unwrap().push(*key);
        self.inner.resolve(key)
    }
}

/// A read-only view of a [`SpyRegistry`]'s recorded keys.
///
/// Useful when the spy itself has been moved into a dispatcher.
#[derive(Clone)]
pub struct SpyProbe {
    seen: Arc<Mutex<Vec<ContractKey>>>,
}

impl SpyProbe {
    /// Get a clone of the keys resolved so far, in call order.
    pub fn keys(&self) -> Vec<ContractKey> {
        self.seen.lock().unwrap().clone()
    }

    /// Get the number of resolve calls.
    pub fn resolve_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}
