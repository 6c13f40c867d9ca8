//! # courier-core
//!
//! Core traits for the Courier request dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates and registry implementations that don't need the full
//! `courier` dispatcher.
//!
//! # Contract model
//!
//! A [`Request`] is pure data declaring the response type it expects via its
//! `Response` associated type; void-style requests declare [`Unit`]. A
//! [`RequestHandler`] implements the contract pairing one request type with
//! that declared response type. The pairing itself is a value — a
//! [`ContractKey`] — derived purely from the request type and used to look
//! handlers up in a [`HandlerRegistry`].
//!
//! The dispatcher lives in the `courier` crate and consumes these pieces:
//! it derives the key for a request's concrete type, resolves an erased
//! handler entry from the registry, downcasts it back to the typed
//! [`DynRequestHandler`] interface, and invokes it with the caller's
//! cancellation token.
//!
//! # Error types
//!
//! - [`DispatchError`] - dispatch failures (absent handler, mis-typed entry,
//!   handler-raised)
//! - [`BoxError`] - boxed handler failure payload

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod contract;
mod error;
mod handler;
mod registry;
mod request;

// Re-exports
pub use contract::ContractKey;
pub use error::{BoxError, DispatchError};
pub use handler::{DynRequestHandler, RequestHandler};
pub use registry::HandlerRegistry;
pub use request::{Request, Unit};
