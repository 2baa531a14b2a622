// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Portability helpers and shared constants
//!
//! String helpers work on caller-supplied byte buffers holding
//! NUL-terminated strings and never allocate.

use crate::error::DalError;

pub use std::f64::consts::PI;

/// Determines the smallest of the two numbers
pub fn min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Determines the largest of the two numbers
pub fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Sets every byte of the given buffer to zero and hands it back.
///
/// To clear only a prefix, pass `&mut buf[..n]`.
pub fn memclr(buf: &mut [u8]) -> &mut [u8] {
    buf.fill(0);
    buf
}

/// Determines if the given byte is a printable ASCII decimal digit (0..9)
pub fn isdigit(c: u8) -> bool {
    c > 47 && c < 58
}

/// Reverses, in place, the NUL-terminated string held in `s`.
///
/// Bytes after the terminator are left untouched. Fails with
/// `InvalidParameter` if `s` holds no terminator.
pub fn string_reverse(s: &mut [u8]) -> Result<(), DalError> {
    let len = s
        .iter()
        .position(|&b| b == 0)
        .ok_or(DalError::InvalidParameter)?;
    s[..len].reverse();
    Ok(())
}

/// Writes the decimal form of `n` into `s` as a NUL-terminated string.
///
/// Returns the number of characters written, not counting the terminator.
/// If `s` is too short for the digits, sign and terminator it is left
/// unmodified and `InvalidParameter` is returned.
pub fn itoa(n: i32, s: &mut [u8]) -> Result<usize, DalError> {
    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();
    let len = digit_count(magnitude) + usize::from(negative);

    if s.len() <= len {
        return Err(DalError::InvalidParameter);
    }

    // Least significant digit first, then flip the whole string.
    let mut i = 0;
    loop {
        s[i] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        i += 1;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        s[i] = b'-';
        i += 1;
    }
    s[i] = 0;

    string_reverse(s)?;
    Ok(i)
}

fn digit_count(mut magnitude: u32) -> usize {
    let mut count = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
#[path = "compat_tests.rs"]
mod tests;
