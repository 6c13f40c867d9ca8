//! Error types for Courier.
//!
//! Dispatch either fully succeeds with the handler's response or fully fails
//! with one [`DispatchError`]; nothing is retried, logged, or swallowed on
//! the way back to the caller.

use thiserror::Error;

/// A boxed error type for handler-raised failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The registry has no handler for the request's contract.
    ///
    /// Missing wiring, not a transient condition: the dispatcher never
    /// retries and has no fallback or default handler.
    #[error("no handler registered for request type `{request}`")]
    NotRegistered {
        /// Name of the concrete request type that failed to resolve.
        request: &'static str,
    },

    /// The registry returned an entry that does not satisfy the contract.
    ///
    /// The erased entry failed the typed downcast to the handler interface
    /// derived from the request type. This is a registration bug and is
    /// reproducible deterministically on every dispatch of that type.
    #[error("registry entry for `{request}` does not satisfy its handler contract")]
    ContractMismatch {
        /// Name of the concrete request type whose entry was mis-typed.
        request: &'static str,
    },

    /// The handler itself failed; the failure passes through unmodified.
    #[error(transparent)]
    Handler(BoxError),
}
