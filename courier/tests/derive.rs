//! The `#[derive(Request)]` macro: explicit response types and the `Unit`
//! default for void-style requests.

use courier::{BoxError, CancellationToken, Mediator, RegistryBuilder, Unit};

#[derive(Clone, Debug, PartialEq)]
struct Pong {
    value: String,
}

#[derive(courier_macros::Request)]
#[response(Pong)]
struct Ping;

#[derive(courier_macros::Request)]
struct Notify;

#[tokio::test]
async fn derived_request_dispatches_with_its_declared_response() {
    let registry = RegistryBuilder::new()
        .register::<Ping, _>(|_request: Ping, _cancel: CancellationToken| async {
            Ok::<_, BoxError>(Pong {
                value: "pong".to_string(),
            })
        })
        .build();
    let mediator = Mediator::new(registry);

    let pong = mediator
        .dispatch(Ping, CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(pong.value, "pong");
}

#[tokio::test]
async fn derive_without_response_attribute_defaults_to_unit() {
    let registry = RegistryBuilder::new()
        .register::<Notify, _>(|_request: Notify, _cancel: CancellationToken| async {
            Ok::<_, BoxError>(Unit)
        })
        .build();
    let mediator = Mediator::new(registry);

    mediator
        .dispatch_void(Notify, CancellationToken::new())
        .await
        .unwrap();
}
