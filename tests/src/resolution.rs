#![cfg(test)]
use crate::utils::{entry, lister, route, v4, v6};
use async_trait::async_trait;
use lanlist_common::config::ListOptions;
use lanlist_common::error::NetworkError;
use lanlist_common::network::interface::InterfaceAddr;
use lanlist_common::network::snapshot::NetworkSnapshot;
use lanlist_core::{GatewayResolver, IpLister};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn gateway() -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, 1)
}

#[tokio::test]
async fn fails_when_interface_is_missing() {
    let result = lister(route(gateway(), "en0"), vec![]).list(&ListOptions::default()).await;
    let err = result.unwrap_err();
    assert_eq!(err, NetworkError::InterfaceNotFound("en0".to_string()));
    assert_eq!(err.to_string(), "interface not found: en0");
}

#[tokio::test]
async fn fails_when_v4_family_is_missing() {
    let table = vec![entry("en0", &[v6("fe80::146a:7118:260f:62a6", 64)])];
    let result = lister(route(gateway(), "en0"), table).list(&ListOptions::default()).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "v4 family not found in interface en0"
    );
}

#[tokio::test]
async fn fails_when_prefix_is_missing() {
    let table = vec![entry(
        "en0",
        &[InterfaceAddr::V4 {
            address: Ipv4Addr::new(192, 168, 1, 11),
            prefix: None,
        }],
    )];
    let result = lister(route(gateway(), "en0"), table).list(&ListOptions::default()).await;
    assert!(matches!(result, Err(NetworkError::PrefixNotFound(_))));
}

#[tokio::test]
async fn other_interfaces_do_not_leak_in() {
    let table = vec![
        entry("eth1", &[v4(10, 0, 0, 5, 8)]),
        entry("en0", &[v4(192, 168, 1, 11, 30)]),
    ];
    let result = lister(route(gateway(), "en0"), table)
        .list(&ListOptions::default())
        .await
        .unwrap();
    assert_eq!(result, vec!["192.168.1.1", "192.168.1.2", "192.168.1.3"]);
}

struct CountingResolver {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GatewayResolver for CountingResolver {
    async fn resolve(&self) -> Result<NetworkSnapshot, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        NetworkSnapshot::from_cidr("10.1.0.1", "wlan0", "10.1.0.77/28")
    }
}

#[tokio::test]
async fn resolver_is_asked_once_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lister = IpLister::new(Box::new(CountingResolver {
        calls: calls.clone(),
    }));

    let first = lister.list(&ListOptions::default()).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.len(), 15);

    let second = lister.list(&ListOptions::default()).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(first, second);
}
