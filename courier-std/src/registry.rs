//! Registry module for handler registration.
//!
//! This module provides a builder pattern for registering handlers and a
//! frozen map for immutable, thread-safe resolution.

use courier_core::{ContractKey, DynRequestHandler, HandlerRegistry, Request, RequestHandler};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// RegistryBuilder - for constructing handler maps
// ============================================================================

/// Builder for constructing a [`HandlerMap`].
///
/// Use this to register handlers, then call `.build()` to create an
/// immutable, thread-safe `HandlerMap`.
///
/// The first registration for a contract wins; later registrations for the
/// same request type are ignored. Keeping exactly one handler per request
/// type is the registrant's responsibility — the dispatcher assumes it.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register::<Ping, _>(PingHandler)
///     .register::<Notify, _>(NotifyHandler)
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: HashMap<ContractKey, Arc<dyn Any + Send + Sync>>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a handler for request type `R`.
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        self.register_mut::<R, H>(handler);
        self
    }

    /// Register a handler for request type `R` (mutable version).
    pub fn register_mut<R, H>(&mut self, handler: H)
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let erased: Arc<dyn DynRequestHandler<R>> = Arc::new(handler);
        self.entries
            .entry(ContractKey::of::<R>())
            .or_insert_with(|| Arc::new(erased));
    }

    /// Get the number of registered contracts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no handlers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the immutable [`HandlerMap`].
    pub fn build(self) -> HandlerMap {
        HandlerMap {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HandlerMap - immutable, thread-safe handler storage
// ============================================================================

/// An immutable, thread-safe registry of handlers.
///
/// Created by calling [`RegistryBuilder::build`]. The map is frozen after
/// construction, so concurrent resolution needs no locking; share it across
/// callers via `Arc`.
pub struct HandlerMap {
    entries: HashMap<ContractKey, Arc<dyn Any + Send + Sync>>,
}

impl HandlerMap {
    /// Create a builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Check whether a handler is registered for request type `R`.
    pub fn contains<R: Request>(&self) -> bool {
        self.entries.contains_key(&ContractKey::of::<R>())
    }

    /// Get the number of registered contracts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HandlerRegistry for HandlerMap {
    fn resolve(&self, key: &ContractKey) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{BoxError, Unit};
    use tokio_util::sync::CancellationToken;

    #[derive(Clone)]
    struct Ping;

    #[derive(Clone, PartialEq, Debug)]
    struct Pong(&'static str);

    impl Request for Ping {
        type Response = Pong;
    }

    struct Notify;

    impl Request for Notify {
        type Response = Unit;
    }

    struct PingHandler(&'static str);

    impl RequestHandler<Ping> for PingHandler {
        async fn handle(
            &self,
            _request: Ping,
            _cancel: CancellationToken,
        ) -> Result<Pong, BoxError> {
            Ok(Pong(self.0))
        }
    }

    #[test]
    fn registered_contract_resolves() {
        let registry = RegistryBuilder::new().register::<Ping, _>(PingHandler("pong")).build();

        assert!(registry.contains::<Ping>());
        assert!(registry.resolve(&ContractKey::of::<Ping>()).is_some());
        assert!(registry.resolve(&ContractKey::of::<Notify>()).is_none());
    }

    #[test]
    fn resolved_entry_downcasts_to_the_contract() {
        let registry = RegistryBuilder::new().register::<Ping, _>(PingHandler("pong")).build();

        let entry = registry.resolve(&ContractKey::of::<Ping>()).unwrap();
        assert!(
            entry
                .downcast_ref::<Arc<dyn DynRequestHandler<Ping>>>()
                .is_some()
        );
    }

    #[tokio::test]
    async fn first_registration_wins() {
        let registry = RegistryBuilder::new()
            .register::<Ping, _>(PingHandler("first"))
            .register::<Ping, _>(PingHandler("second"))
            .build();

        assert_eq!(registry.len(), 1);

        let entry = registry.resolve(&ContractKey::of::<Ping>()).unwrap();
        let handler = entry
            .downcast_ref::<Arc<dyn DynRequestHandler<Ping>>>()
            .unwrap()
            .clone();
        let response = handler.handle(Ping, CancellationToken::new()).await.unwrap();
        assert_eq!(response, Pong("first"));
    }

    #[test]
    fn empty_builder_builds_empty_map() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
