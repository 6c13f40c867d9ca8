//! Resolution cache mapping request types to contract keys.

use courier_core::{ContractKey, Request};
use dashmap::DashMap;
use std::any::TypeId;

/// Lazily populated map from a request type's runtime identity to its
/// derived contract key.
///
/// The map lives as long as the mediator that owns it and is never evicted;
/// it is bounded in practice by the number of distinct request types in the
/// program. Concurrent first lookups for the same type may each derive the
/// key, which is pure and idempotent, so whichever write lands is correct.
pub(crate) struct ResolutionCache {
    contracts: DashMap<TypeId, ContractKey>,
}

impl ResolutionCache {
    pub(crate) fn new() -> Self {
        Self {
            contracts: DashMap::new(),
        }
    }

    /// Look up the contract key for `R`, deriving and inserting it on miss.
    ///
    /// The shard lock is released before this returns; nothing downstream of
    /// key derivation runs under it.
    pub(crate) fn contract_for<R: Request>(&self) -> ContractKey {
        *self
            .contracts
            .entry(TypeId::of::<R>())
            .or_insert_with(ContractKey::of::<R>)
    }
}
