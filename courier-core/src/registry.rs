//! The handler registry capability consumed by the dispatcher.

use crate::contract::ContractKey;
use std::any::Any;
use std::sync::Arc;

/// A source of handler instances, looked up by contract key.
///
/// This is the read side of handler registration; how handlers get
/// associated with contracts (builders, containers, scanning) is the
/// implementation's business. The dispatcher only requires `resolve`.
///
/// # Entry shape
///
/// The erased entry for a key derived from request type `R` must have the
/// concrete type `Arc<dyn DynRequestHandler<R>>`. The dispatcher performs
/// the typed downcast at this boundary and fails the dispatch if the entry
/// does not match the contract.
///
/// # Concurrency
///
/// `resolve` must be safe to call from any number of threads. Returning an
/// owned `Arc` (rather than a borrow) keeps any internal synchronization of
/// the registry out of the handler invocation that follows.
///
/// [`DynRequestHandler<R>`]: crate::DynRequestHandler
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid HandlerRegistry",
    label = "missing `HandlerRegistry` implementation",
    note = "Implement `resolve` to map contract keys to erased handler entries."
)]
pub trait HandlerRegistry: Send + Sync {
    /// Resolve the handler entry registered for the given contract key.
    ///
    /// Returns `None` when no handler is registered for the contract.
    fn resolve(&self, key: &ContractKey) -> Option<Arc<dyn Any + Send + Sync>>;
}

impl<T: HandlerRegistry + ?Sized> HandlerRegistry for Arc<T> {
    fn resolve(&self, key: &ContractKey) -> Option<Arc<dyn Any + Send + Sync>> {
        (**self).resolve(key)
    }
}
