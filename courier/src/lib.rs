//! # courier - In-Process Request Dispatch
//!
//! `courier` decouples the producers of requests from the modules that
//! handle them. A caller hands the [`Mediator`] a typed request; the
//! mediator derives which handler contract serves that request's concrete
//! type, resolves an instance from a [`HandlerRegistry`], invokes it with
//! the caller's cancellation token, and returns its result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! struct Ping;
//! struct Pong { value: String }
//!
//! impl Request for Ping {
//!     type Response = Pong;
//! }
//!
//! struct PingHandler;
//!
//! impl RequestHandler<Ping> for PingHandler {
//!     async fn handle(&self, _req: Ping, _cancel: CancellationToken) -> Result<Pong, BoxError> {
//!         Ok(Pong { value: "pong".into() })
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Ping, _>(PingHandler).build();
//! let mediator = Mediator::new(registry);
//! let pong = mediator.dispatch(Ping, CancellationToken::new()).await?;
//! ```
//!
//! ## Scope
//!
//! Exactly one handler per request type; the registry is responsible for
//! that uniqueness. There is no pipeline, no fan-out, no retry and no
//! timeout — cancellation is a forwarded, cooperative signal and nothing
//! more.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod cache;
mod mediator;

pub use mediator::Mediator;

pub use courier_core::{
    // Contract model
    BoxError,
    ContractKey,
    // Errors
    DispatchError,
    // Handler
    DynRequestHandler,
    // Registry capability
    HandlerRegistry,
    Request,
    RequestHandler,
    Unit,
};

// Standard registry implementation
pub use courier_std::{HandlerMap, RegistryBuilder};

/// The cancellation signal forwarded to handlers.
pub use tokio_util::sync::CancellationToken;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use courier_std::testing::*;
}

/// Prelude module - common imports for Courier.
///
/// # Usage
///
/// ```rust,ignore
/// use courier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError,
        CancellationToken,
        DispatchError,
        HandlerMap,
        HandlerRegistry,
        Mediator,
        RegistryBuilder,
        Request,
        RequestHandler,
        Unit,
    };
}

#[cfg(feature = "macros")]
pub use courier_macros::Request;
