// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn terminated(s: &str, capacity: usize) -> Vec<u8> {
    let mut buf = vec![0xAA; capacity];
    buf[..s.len()].copy_from_slice(s.as_bytes());
    buf[s.len()] = 0;
    buf
}

#[test]
fn min_and_max_pick_the_expected_operand() {
    assert_eq!(min(3, 7), 3);
    assert_eq!(min(-4, 2), -4);
    assert_eq!(max(3, 7), 7);
    assert_eq!(max(i32::MIN, i32::MAX), i32::MAX);
    assert_eq!(min(5, 5), 5);
}

#[test]
fn memclr_returns_the_cleared_buffer() {
    let mut buf = [1u8, 2, 3, 4, 5];
    let cleared = memclr(&mut buf[..3]);
    assert_eq!(cleared, &[0, 0, 0]);
    assert_eq!(buf, [0, 0, 0, 4, 5]);
}

#[test]
fn memclr_of_empty_slice_is_harmless() {
    let mut buf: [u8; 0] = [];
    assert!(memclr(&mut buf).is_empty());
}

#[test]
fn isdigit_accepts_exactly_ascii_digits() {
    for c in 0..=u8::MAX {
        assert_eq!(isdigit(c), (b'0'..=b'9').contains(&c), "byte {}", c);
    }
}

#[test]
fn isdigit_rejects_neighbours_and_high_bytes() {
    assert!(!isdigit(b'/'));
    assert!(!isdigit(b':'));
    // 0xB0 and 0xB9 are '0' and '9' with the top bit set
    assert!(!isdigit(0xB0));
    assert!(!isdigit(0xB9));
}

#[test]
fn string_reverse_stops_at_terminator() {
    let mut buf = terminated("abc", 6);
    string_reverse(&mut buf).unwrap();
    assert_eq!(&buf[..4], b"cba\0");
    assert_eq!(&buf[4..], &[0xAA, 0xAA]);
}

#[test]
fn string_reverse_of_empty_string_succeeds() {
    let mut buf = [0u8; 1];
    assert!(string_reverse(&mut buf).is_ok());
    assert_eq!(buf, [0]);
}

#[test]
fn string_reverse_requires_terminator() {
    let mut buf = *b"abc";
    assert_eq!(string_reverse(&mut buf), Err(DalError::InvalidParameter));
    assert_eq!(&buf, b"abc");
}

#[parameterized(
    zero = { 0, "0" },
    single_digit = { 7, "7" },
    positive = { 1234, "1234" },
    negative = { -56, "-56" },
    max = { i32::MAX, "2147483647" },
    min = { i32::MIN, "-2147483648" },
)]
fn itoa_formats_decimal(n: i32, expected: &str) {
    let mut buf = [0xFFu8; 12];
    let len = itoa(n, &mut buf).unwrap();
    assert_eq!(len, expected.len());
    assert_eq!(&buf[..len], expected.as_bytes());
    assert_eq!(buf[len], 0);
}

#[test]
fn itoa_fits_exactly_sized_buffer() {
    let mut buf = [0xFFu8; 4];
    assert_eq!(itoa(-12, &mut buf), Ok(3));
    assert_eq!(&buf, b"-12\0");
}

#[test]
fn itoa_rejects_short_buffer_without_writing() {
    let mut buf = [0xFFu8; 3];
    assert_eq!(itoa(-12, &mut buf), Err(DalError::InvalidParameter));
    assert_eq!(buf, [0xFF; 3]);

    let mut empty: [u8; 0] = [];
    assert_eq!(itoa(0, &mut empty), Err(DalError::InvalidParameter));
}

#[test]
fn pi_is_exported() {
    assert_eq!((PI * 1e4).round(), 31416.0);
}

proptest! {
    #[test]
    fn min_is_one_of_its_operands(a in any::<i32>(), b in any::<i32>()) {
        let m = min(a, b);
        prop_assert!(m <= a && m <= b);
        prop_assert!(m == a || m == b);
    }

    #[test]
    fn max_is_one_of_its_operands(a in any::<i32>(), b in any::<i32>()) {
        let m = max(a, b);
        prop_assert!(m >= a && m >= b);
        prop_assert!(m == a || m == b);
    }

    #[test]
    fn memclr_zeroes_requested_prefix(
        mut buf in proptest::collection::vec(any::<u8>(), 0..64),
        n in 0usize..64,
    ) {
        let n = n.min(buf.len());
        let tail = buf[n..].to_vec();
        memclr(&mut buf[..n]);
        prop_assert!(buf[..n].iter().all(|&b| b == 0));
        prop_assert_eq!(&buf[n..], &tail[..]);
    }

    #[test]
    fn itoa_agrees_with_display(n in any::<i32>()) {
        let mut buf = [0u8; 12];
        let len = itoa(n, &mut buf).unwrap();
        prop_assert_eq!(std::str::from_utf8(&buf[..len]).unwrap(), n.to_string());
    }

    #[test]
    fn string_reverse_twice_is_identity(s in "[a-z0-9]{0,16}") {
        let mut buf = terminated(&s, s.len() + 1);
        string_reverse(&mut buf).unwrap();
        string_reverse(&mut buf).unwrap();
        prop_assert_eq!(&buf[..s.len()], s.as_bytes());
    }
}
