//! Endpoint derivation, table-driven.

use netpipe::endpoint::PageLocation;
use rstest::rstest;

#[rstest]
#[case("localhost:8080", "/abc", false, "ws://localhost:8080/ws/abc")]
#[case("gillchristian.xyz", "/netpipe/abc", true, "wss://gillchristian.xyz/netpipe/ws/abc")]
#[case("localhost:3000", "/netpipe/abc", false, "ws://localhost:3000/ws/abc")]
#[case("example.org", "/xyz", true, "wss://example.org/netpipe/ws/xyz")]
#[case("example.org", "/xyz", false, "ws://example.org/netpipe/ws/xyz")]
#[case("localhost:8080", "/abc/", false, "ws://localhost:8080/ws/abc")]
fn ws_endpoint_cases(
    #[case] host: &str,
    #[case] path: &str,
    #[case] secure: bool,
    #[case] expected: &str,
) {
    assert_eq!(PageLocation::new(host, path, secure).ws_endpoint(), expected);
}

#[rstest]
#[case("/abc", "abc")]
#[case("/netpipe/abc", "abc")]
#[case("/abc/", "abc")]
#[case("/netpipework", "netpipework")]
fn channel_id_cases(#[case] path: &str, #[case] expected: &str) {
    let loc = PageLocation::new("example.org", path, true);
    assert_eq!(loc.channel_id(), expected);
}

#[rstest]
#[case("abc", "gillchristian.xyz", false, "wss://gillchristian.xyz/netpipe/ws/abc")]
#[case("abc", "localhost:8080", false, "ws://localhost:8080/ws/abc")]
#[case("abc", "gillchristian.xyz", true, "ws://gillchristian.xyz/netpipe/ws/abc")]
#[case(
    "https://gillchristian.xyz/netpipe/abc",
    "ignored",
    false,
    "wss://gillchristian.xyz/netpipe/ws/abc"
)]
#[case("ws://localhost:8080/abc", "ignored", false, "ws://localhost:8080/ws/abc")]
fn parsed_target_cases(
    #[case] target: &str,
    #[case] fallback_host: &str,
    #[case] insecure: bool,
    #[case] expected: &str,
) {
    let loc = PageLocation::parse(target, fallback_host, insecure).unwrap();
    assert_eq!(loc.ws_endpoint(), expected);
}

#[test]
fn derivation_is_idempotent() {
    let loc = PageLocation::parse("https://gillchristian.xyz/netpipe/abc", "x", false).unwrap();
    assert_eq!(loc.ws_endpoint(), loc.ws_endpoint());
    assert_eq!(loc.create_endpoint(), loc.create_endpoint());
}

#[test]
fn for_host_respects_local_and_insecure() {
    assert!(!PageLocation::for_host("localhost:8080", false).secure);
    assert!(PageLocation::for_host("gillchristian.xyz", false).secure);
    assert!(!PageLocation::for_host("gillchristian.xyz", true).secure);
}
