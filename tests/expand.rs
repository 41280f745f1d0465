//! End-to-end expansion tables.

use hostlist::{expand, ExpandError};
use test_case::test_case;

#[test_case("host1", &["host1"]; "plain hostname")]
#[test_case("host[1,2,3]", &["host1", "host2", "host3"]; "alternative list")]
#[test_case("host[1,,3]", &["host1", "host", "host3"]; "empty alternative")]
#[test_case("host_[1-3]", &["host_1", "host_2", "host_3"]; "underscore in prefix")]
#[test_case("host-[1-4]", &["host-1", "host-2", "host-3", "host-4"]; "simple range")]
#[test_case(
    "host-[001-004,a]",
    &["host-001", "host-002", "host-003", "host-004", "host-a"];
    "padded range mixed with literal"
)]
#[test_case(
    "192.168.[0-1].[100-101]",
    &["192.168.0.100", "192.168.0.101", "192.168.1.100", "192.168.1.101"];
    "ip style octets"
)]
#[test_case(
    "host-[001-004,a],host2-[08-11]",
    &[
        "host-001", "host-002", "host-003", "host-004", "host-a",
        "host2-08", "host2-09", "host2-10", "host2-11",
    ];
    "two expressions concatenate in order"
)]
#[test_case("p[1-2][3-4]s", &["p13s", "p14s", "p23s", "p24s"]; "cartesian pair leftmost slowest")]
#[test_case("p1,p2,p3", &["p1", "p2", "p3"]; "comma separated literals")]
#[test_case(
    "p[1-2][3-4]s[01-02]",
    &["p13s01", "p13s02", "p14s01", "p14s02", "p23s01", "p23s02", "p24s01", "p24s02"];
    "cartesian triple"
)]
#[test_case(
    "prefix-[005-010]-suffix",
    &[
        "prefix-005-suffix", "prefix-006-suffix", "prefix-007-suffix",
        "prefix-008-suffix", "prefix-009-suffix", "prefix-010-suffix",
    ];
    "infix range keeps surrounding literals"
)]
#[test_case("100-10", &["100-10"]; "hyphenated literal outside brackets")]
fn expands(expression: &str, expected: &[&str]) {
    assert_eq!(expand(expression).unwrap(), expected);
}

#[test_case("", ExpandError::EmptyExpression; "empty input")]
#[test_case("a,", ExpandError::EmptyExpression; "trailing comma leaves empty piece")]
#[test_case(
    "host-[ 001-004,a]",
    ExpandError::InvalidToken { ch: ' ', position: 7 };
    "whitespace is invalid"
)]
#[test_case(
    "hos]t-[1-4]",
    ExpandError::InvalidToken { ch: ']', position: 4 };
    "stray close bracket"
)]
#[test_case("host-[1-4", ExpandError::ExpectedCloseBracket; "unterminated bracket")]
#[test_case("host-[1-4[2-5]]", ExpandError::NestedRangeExpression; "nested brackets")]
#[test_case("n[100-10]", ExpandError::InvalidRange; "backwards range")]
#[test_case("n[0-9999999]", ExpandError::ExpansionTooLarge; "range past the output cap")]
fn rejects(expression: &str, expected: ExpandError) {
    assert_eq!(expand(expression).unwrap_err(), expected);
}
