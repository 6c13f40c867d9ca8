//! # courier-std
//!
//! Standard implementations for the Courier request dispatch library.
//!
//! - [`registry`]: a build-then-freeze [`HandlerMap`] registry
//! - [`testing`]: handler and registry doubles for tests
//!
//! [`HandlerMap`]: registry::HandlerMap

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod registry;
pub mod testing;

pub use registry::{HandlerMap, RegistryBuilder};
