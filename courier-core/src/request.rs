//! Request trait and the canonical empty response type.

/// A request carrying a declared response type.
///
/// A request is pure data describing an intent; it owns no behavior and is
/// consumed by exactly one handler. The `Response` associated type is the
/// structural link between a request type and the handler contract that
/// serves it — a type without this impl does not qualify as a request.
///
/// Requests that produce no meaningful result declare [`Unit`] as their
/// response type, so the dispatch surface stays uniform.
///
/// # Example
///
/// ```rust,ignore
/// struct Ping;
/// struct Pong { value: String }
///
/// impl Request for Ping {
///     type Response = Pong;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "missing `Request` implementation",
    note = "Declare the expected response via `impl Request for {Self} { type Response = ...; }`."
)]
pub trait Request: Send + 'static {
    /// The response type the handler for this request produces.
    type Response: Send + 'static;
}

/// Canonical single-valued response for requests with no meaningful result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unit;
