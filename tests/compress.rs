//! End-to-end compression tables.

use hostlist::{compress, CompressError};
use test_case::test_case;

#[test_case(&[], ""; "empty list")]
#[test_case(&["aaaaa"], "aaaaa"; "single host")]
#[test_case(&["aa", "ab"], "a[a,b]"; "two leaves under one prefix")]
#[test_case(&["7", "8", "9", "10", "11"], "[7-11]"; "bare numbers cross width boundary")]
#[test_case(&["a7", "a8", "a9", "a10", "a11"], "a[7-11]"; "prefixed numbers cross width boundary")]
#[test_case(&["99b", "98b", "100b", "101b"], "[98-101]b"; "suffixed range widens")]
#[test_case(&["99b", "98b", "100b", "0101b"], "[98-100,0101]b"; "zero padding breaks the range")]
#[test_case(&["7a", "7b", "8a", "8b"], "[7-8][a,b]"; "identical suffixes group for ranging")]
#[test_case(&["01", "02", "90", "10"], "[01-02,10,90]"; "sparse padded numbers")]
#[test_case(
    &["192.168.1.1", "192.168.1.2", "192.168.1.120"],
    "192.168.1.[1-2,120]";
    "last octet only"
)]
#[test_case(
    &["192.168.1.1", "192.168.1.2", "192.168.2.1", "192.168.2.2"],
    "192.168.[1-2].[1-2]";
    "two octets range independently"
)]
#[test_case(&["1.0.3", "1.0.4", "2.0.3", "2.0.4"], "[1-2].0.[3-4]"; "numeric grid")]
#[test_case(
    &["abcd", "abef", "abeg", "xyz", "x1z", "x2z"],
    "ab[cd,e[f,g]],x[yz,[1-2]z]";
    "mixed alphabetic branches"
)]
#[test_case(
    &[
        "host-01", "a", "b", "host-03", "host-02", "10-host-120", "11-host-120",
        "zz-01-a", "yz-01-b", "yz-02-v", "yz-02x",
    ],
    "a,b,host-[01-03],yz-[01-b,02[-v,x]],zz-01-a,[10-11]-host-120";
    "kitchen sink"
)]
fn compresses(hosts: &[&str], expected: &str) {
    assert_eq!(compress(hosts).unwrap(), expected);
}

#[test]
fn empty_hostname_is_rejected() {
    assert_eq!(
        compress(&["a", ""]).unwrap_err(),
        CompressError::EmptyHostname
    );
}
