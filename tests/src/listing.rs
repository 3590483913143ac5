#![cfg(test)]
use crate::utils::{ethernet_lister, expected, wifi_lister};
use lanlist_common::config::ListOptions;
use lanlist_common::network::element::NetworkElement;
use std::net::Ipv4Addr;

/*************************************************************
              Wi-Fi interface, 192.168.1.1 gateway, /24
**************************************************************/

#[tokio::test]
async fn wifi_lists_whole_network() {
    let result = wifi_lister().list(&ListOptions::default()).await.unwrap();
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 1, 1), 255));
}

#[tokio::test]
async fn wifi_without_gateway() {
    let result = wifi_lister()
        .list(&ListOptions::omit([NetworkElement::Gateway]))
        .await
        .unwrap();
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 1, 2), 254));
}

#[tokio::test]
async fn wifi_without_current_device() {
    let result = wifi_lister()
        .list(&ListOptions::omit([NetworkElement::CurrentDevice]))
        .await
        .unwrap();

    let mut want = expected(Ipv4Addr::new(192, 168, 1, 1), 255);
    want.retain(|ip| ip != "192.168.1.11");
    assert_eq!(result, want);
}

#[tokio::test]
async fn wifi_without_broadcast() {
    let result = wifi_lister()
        .list(&ListOptions::omit([NetworkElement::Broadcast]))
        .await
        .unwrap();
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 1, 1), 254));
    assert!(!result.contains(&"192.168.1.255".to_string()));
}

#[tokio::test]
async fn wifi_without_everything() {
    let result = wifi_lister()
        .list(&ListOptions::omit(NetworkElement::ALL))
        .await
        .unwrap();
    assert_eq!(result.len(), 252);
    assert!(
        ["192.168.1.1", "192.168.1.11", "192.168.1.255"]
            .iter()
            .all(|item| !result.contains(&item.to_string()))
    );
}

/*************************************************************
           Ethernet interface, 192.168.2.1 gateway, /23
**************************************************************/

#[tokio::test]
async fn ethernet_lists_whole_network() {
    let result = ethernet_lister().list(&ListOptions::default()).await.unwrap();
    assert_eq!(result.len(), 511);
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 2, 1), 511));

    let rollover = result.iter().position(|ip| ip == "192.168.2.255").unwrap();
    assert_eq!(result[rollover + 1], "192.168.3.0");
    assert_eq!(result.last().map(String::as_str), Some("192.168.3.255"));
}

#[tokio::test]
async fn ethernet_without_gateway() {
    let result = ethernet_lister()
        .list(&ListOptions::omit([NetworkElement::Gateway]))
        .await
        .unwrap();
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 2, 2), 510));
}

#[tokio::test]
async fn ethernet_without_current_device() {
    let result = ethernet_lister()
        .list(&ListOptions::omit([NetworkElement::CurrentDevice]))
        .await
        .unwrap();
    assert_eq!(result.len(), 510);
    assert!(!result.contains(&"192.168.3.220".to_string()));
}

#[tokio::test]
async fn ethernet_without_broadcast() {
    let result = ethernet_lister()
        .list(&ListOptions::omit([NetworkElement::Broadcast]))
        .await
        .unwrap();
    assert_eq!(result, expected(Ipv4Addr::new(192, 168, 2, 1), 510));
    assert_eq!(result.last().map(String::as_str), Some("192.168.3.254"));
}

/*************************************************************
                        General properties
**************************************************************/

#[tokio::test]
async fn only_valid_unique_addresses() {
    let result = ethernet_lister()
        .list(&ListOptions::omit([NetworkElement::CurrentDevice]))
        .await
        .unwrap();

    let parsed: Vec<Ipv4Addr> = result
        .iter()
        .map(|ip| ip.parse::<Ipv4Addr>().expect("valid dotted-decimal"))
        .collect();
    assert!(parsed.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn concurrent_calls_agree() {
    let lister = wifi_lister();
    let options = ListOptions::omit([NetworkElement::Gateway, NetworkElement::Broadcast]);

    let (first, second) = tokio::join!(lister.list(&options), lister.list(&options));
    assert_eq!(first.unwrap(), second.unwrap());
}
