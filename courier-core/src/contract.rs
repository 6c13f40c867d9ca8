//! Contract keys identifying (request type, response type) pairings.

use crate::request::Request;
use std::any::{self, TypeId};
use std::fmt;

/// The key identifying which handler contract serves a concrete request type.
///
/// A key pairs the runtime identity of a request type with the identity of
/// its declared response type. Derivation via [`ContractKey::of`] is a pure
/// function of the request type's `Request` impl: computing it twice, at any
/// time, on any thread, yields the same key.
///
/// Keys are small `Copy` values; registries use them as map keys and the
/// dispatcher caches them per request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractKey {
    request: TypeId,
    response: TypeId,
    request_name: &'static str,
}

impl ContractKey {
    /// Derive the contract key for a request type.
    pub fn of<R: Request>() -> Self {
        Self {
            request: TypeId::of::<R>(),
            response: TypeId::of::<R::Response>(),
            request_name: any::type_name::<R>(),
        }
    }

    /// The runtime identity of the request type.
    pub fn request_id(&self) -> TypeId {
        self.request
    }

    /// The runtime identity of the declared response type.
    pub fn response_id(&self) -> TypeId {
        self.response
    }

    /// The request type's name, for diagnostics.
    pub fn request_name(&self) -> &'static str {
        self.request_name
    }
}

impl fmt::Display for ContractKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.request_name)
    }
}
