#![allow(dead_code)]

use courier::{BoxError, CancellationToken, Request, RequestHandler, Unit};

// ============================================================================
// Test Request Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Ping;

#[derive(Clone, Debug, PartialEq)]
pub struct Pong {
    pub value: String,
}

impl Request for Ping {
    type Response = Pong;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notify;

impl Request for Notify {
    type Response = Unit;
}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct PingHandler;

impl RequestHandler<Ping> for PingHandler {
    async fn handle(&self, _request: Ping, _cancel: CancellationToken) -> Result<Pong, BoxError> {
        Ok(Pong {
            value: "pong".to_string(),
        })
    }
}

pub struct NotifyHandler;

impl RequestHandler<Notify> for NotifyHandler {
    async fn handle(
        &self,
        _request: Notify,
        _cancel: CancellationToken,
    ) -> Result<Unit, BoxError> {
        Ok(Unit)
    }
}
