//! Digit classification for product IDs
//!
//! An ID is "invalid" when its decimal form is made of a repeated block of
//! digits. Two rules are supported:
//!
//! - [`MirroredHalves`]: even length and the first half equals the second half
//!   (`1212`, `55`, `100100`).
//! - [`RepeatedPattern`]: any block repeated two or more times (`111`,
//!   `1212`, `123123123`).
//!
//! Both rules render the number into a fixed stack buffer, so the hot path
//! never touches the heap.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maximum number of decimal digits in a `u64` (`18446744073709551615`).
pub const MAX_DIGITS: usize = 20;

/// Writes the decimal digits of `n` into `buf` and returns the digit count.
///
/// Digits are stored least significant first. Comparing blocks of a reversed
/// string gives the same answer as comparing the blocks of the original, so
/// callers never need to reverse the buffer.
#[inline]
fn render_digits(mut n: u64, buf: &mut [u8; MAX_DIGITS]) -> usize {
    let mut len = 0;
    loop {
        buf[len] = (n % 10) as u8;
        n /= 10;
        len += 1;
        if n == 0 {
            return len;
        }
    }
}

/// Returns true when `n` has an even digit count and both halves match.
///
/// `0` renders as the single digit `"0"` and is therefore never invalid.
#[inline]
pub fn is_invalid(n: u64) -> bool {
    let mut buf = [0u8; MAX_DIGITS];
    let len = render_digits(n, &mut buf);
    if len % 2 != 0 {
        return false;
    }

    let (first, second) = buf[..len].split_at(len / 2);
    first == second
}

/// Returns true when `n` is some block of digits repeated at least twice.
#[inline]
pub fn is_repeated_pattern(n: u64) -> bool {
    let mut buf = [0u8; MAX_DIGITS];
    let len = render_digits(n, &mut buf);
    let digits = &buf[..len];

    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| {
            let (head, rest) = digits.split_at(block);
            rest.chunks_exact(block).all(|chunk| chunk == head)
        })
}

/// Decides whether a single ID counts toward the checksum.
///
/// Implementations must be cheap and side-effect free: the worker loop calls
/// `is_invalid` once per integer in every chunk.
pub trait IdClassifier: Sync {
    fn is_invalid(&self, id: u64) -> bool;
}

/// Even-length IDs whose first half equals the second half.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirroredHalves;

impl IdClassifier for MirroredHalves {
    #[inline]
    fn is_invalid(&self, id: u64) -> bool {
        is_invalid(id)
    }
}

/// IDs made of one digit block repeated two or more times.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedPattern;

impl IdClassifier for RepeatedPattern {
    #[inline]
    fn is_invalid(&self, id: u64) -> bool {
        is_repeated_pattern(id)
    }
}

/// Classification rule selected through config or `--rule`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// First half equals second half
    #[default]
    Halves,
    /// Any block repeated two or more times
    Repeated,
}

impl Rule {
    /// Classify a single ID under this rule
    pub fn is_invalid(self, id: u64) -> bool {
        match self {
            Rule::Halves => is_invalid(id),
            Rule::Repeated => is_repeated_pattern(id),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Halves => write!(f, "halves"),
            Rule::Repeated => write!(f, "repeated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the number whose decimal form is `block` written `times` times.
    fn repeat_block(block: u64, times: usize) -> u64 {
        block.to_string().repeat(times).parse().unwrap()
    }

    #[test]
    fn test_single_digits_are_valid() {
        for n in 0..10 {
            assert!(!is_invalid(n), "{n} should be valid");
        }
    }

    #[test]
    fn test_odd_length_is_never_invalid() {
        for n in (100..1000).chain(10_000..100_000) {
            assert!(!is_invalid(n), "{n} has odd length");
        }
        assert!(!is_invalid(1_234_567_890_123_456_789));
    }

    #[test]
    fn test_doubled_blocks_are_invalid() {
        for block in 1..10_000 {
            let n = repeat_block(block, 2);
            assert!(is_invalid(n), "{n} is {block} written twice");
        }
        assert!(is_invalid(1_234_567_890_1_234_567_890));
    }

    #[test]
    fn test_halves_compare_as_digit_strings() {
        assert!(is_invalid(11));
        assert!(!is_invalid(10));
        assert!(is_invalid(100100));
        assert!(!is_invalid(1001));
        assert!(!is_invalid(1188));
        assert!(!is_invalid(1191));
        assert!(is_invalid(1212));
    }

    #[test]
    fn test_u64_extremes() {
        assert!(!is_invalid(u64::MAX));
        assert!(!is_repeated_pattern(u64::MAX));
        assert!(is_invalid(18_446_744_071_844_674_407));
        assert!(!is_invalid(9_999_999_999_999_999_999));
    }

    #[test]
    fn test_repeated_pattern_rule() {
        assert!(is_repeated_pattern(11));
        assert!(is_repeated_pattern(111));
        assert!(is_repeated_pattern(1212));
        assert!(is_repeated_pattern(123_123_123));
        assert!(is_repeated_pattern(1_188_511_885));
        assert!(!is_repeated_pattern(7));
        assert!(!is_repeated_pattern(12));
        assert!(!is_repeated_pattern(1231));
        assert!(!is_repeated_pattern(101));
    }

    #[test]
    fn test_repeated_pattern_covers_halves() {
        for n in 0..200_000 {
            if is_invalid(n) {
                assert!(is_repeated_pattern(n), "{n} mirrored but not repeated");
            }
        }
    }

    #[test]
    fn test_rule_dispatch() {
        assert!(Rule::Halves.is_invalid(1212));
        assert!(!Rule::Halves.is_invalid(111));
        assert!(Rule::Repeated.is_invalid(111));
        assert_eq!(Rule::default(), Rule::Halves);
        assert_eq!(Rule::Repeated.to_string(), "repeated");
    }
}
