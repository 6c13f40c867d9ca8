//! Contract key resolution: per-type caching and concurrent first dispatches.

use courier::testing::SpyRegistry;
use courier::{BoxError, CancellationToken, Mediator, RegistryBuilder, Request};
use std::sync::Arc;

mod common;
use common::{Ping, PingHandler};

#[tokio::test]
async fn same_request_type_always_derives_the_same_key() {
    let registry = RegistryBuilder::new().register::<Ping, _>(PingHandler).build();
    let spy = SpyRegistry::new(registry);
    let probe = spy.probe();
    let mediator = Mediator::new(spy);

    mediator
        .dispatch(Ping, CancellationToken::new())
        .await
        .unwrap();
    mediator
        .dispatch(Ping, CancellationToken::new())
        .await
        .unwrap();

    let keys = probe.keys();
    assert_eq!(keys.len(), 2, "registry is consulted on every dispatch");
    assert_eq!(keys[0], keys[1], "cached key matches the derived key");
}

macro_rules! echo_request {
    ($name:ident, $reply:literal) => {
        #[derive(Clone, Debug)]
        struct $name;

        impl Request for $name {
            type Response = &'static str;
        }

        impl $name {
            async fn handle(_request: $name, _cancel: CancellationToken) -> Result<&'static str, BoxError> {
                Ok($reply)
            }
        }
    };
}

echo_request!(EchoA, "a");
echo_request!(EchoB, "b");
echo_request!(EchoC, "c");
echo_request!(EchoD, "d");

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_dispatches_do_not_cross_contaminate() {
    let registry = RegistryBuilder::new()
        .register::<EchoA, _>(EchoA::handle)
        .register::<EchoB, _>(EchoB::handle)
        .register::<EchoC, _>(EchoC::handle)
        .register::<EchoD, _>(EchoD::handle)
        .build();
    let mediator = Arc::new(Mediator::new(registry));

    // All four request types are previously unseen; their first resolutions
    // race across worker threads.
    let a = tokio::spawn({
        let m = mediator.clone();
        async move { m.dispatch(EchoA, CancellationToken::new()).await }
    });
    let b = tokio::spawn({
        let m = mediator.clone();
        async move { m.dispatch(EchoB, CancellationToken::new()).await }
    });
    let c = tokio::spawn({
        let m = mediator.clone();
        async move { m.dispatch(EchoC, CancellationToken::new()).await }
    });
    let d = tokio::spawn({
        let m = mediator.clone();
        async move { m.dispatch(EchoD, CancellationToken::new()).await }
    });

    assert_eq!(a.await.unwrap().unwrap(), "a");
    assert_eq!(b.await.unwrap().unwrap(), "b");
    assert_eq!(c.await.unwrap().unwrap(), "c");
    assert_eq!(d.await.unwrap().unwrap(), "d");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_first_dispatches_of_one_type_agree_on_the_key() {
    let registry = RegistryBuilder::new().register::<Ping, _>(PingHandler).build();
    let spy = SpyRegistry::new(registry);
    let probe = spy.probe();
    let mediator = Arc::new(Mediator::new(spy));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let m = mediator.clone();
        handles.push(tokio::spawn(async move {
            m.dispatch(Ping, CancellationToken::new()).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let keys = probe.keys();
    assert_eq!(keys.len(), 8);
    assert!(keys.windows(2).all(|pair| pair[0] == pair[1]));
}
