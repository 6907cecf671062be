//! Base16 (hex) encoding and decoding as described in [RFC 4648 § 8],
//! with a constant-time decode path.
//!
//! Hex-encoded input to a decoder is frequently key material, so whether
//! this function returns an error must not be observable through its
//! timing. In [`TimingMode::Constant`] the whole input is always scanned,
//! validity is accumulated branch-free across every symbol pair, and the
//! failure is reported only after the scan completes. [`TimingMode::Variable`]
//! trades that guarantee for an early exit on the first invalid pair.
//!
//! [RFC 4648 § 8]: https://datatracker.ietf.org/doc/html/rfc4648#section-8

use alloc::string::String;
use alloc::vec::Vec;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, NO_SYMBOL, RESERVED_WHITESPACE};
use crate::base32::DecodingMode;
use crate::errors::{DecodeError, Result};

/// Timing disciplines for [`decode`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimingMode {
    /// Always scan the whole input and defer any failure to the end, so
    /// that execution time does not depend on where, or whether, invalid
    /// input occurs.
    Constant,
    /// Exit on the first invalid symbol pair.
    Variable,
}

/// Encodes `data` as two symbols per byte, high nibble first.
///
/// No padding concept applies; empty input encodes to empty output.
pub fn encode(data: &[u8], alphabet: &Alphabet<16>) -> String {
    let symbols = alphabet.symbols();
    let mut encoded = String::with_capacity(data.len() * 2);
    for &byte in data {
        encoded.push(symbols[usize::from(byte >> 4)] as char);
        encoded.push(symbols[usize::from(byte & 0x0f)] as char);
    }
    encoded
}

/// Decodes hex text with the given alphabet.
///
/// Reserved whitespace is compacted away first in both modes through a
/// branch-free skip table; the amount of whitespace is treated as public,
/// the remaining bytes as secret. [`DecodingMode::Strict`] admits only the
/// alphabet's own case, [`DecodingMode::Forgiving`] admits both ASCII
/// cases; unmappable symbols are an error in either mode. Odd-length input
/// is invalid input, never a panic, and in [`TimingMode::Constant`] it
/// consumes the same work as the matching even length.
pub fn decode(
    encoded: &str,
    alphabet: &Alphabet<16>,
    mode: DecodingMode,
    timing: TimingMode,
) -> Result<Vec<u8>> {
    let input = encoded.as_bytes();

    let mut skip = [0u8; 256];
    for &byte in RESERVED_WHITESPACE.iter() {
        skip[usize::from(byte)] = 1;
    }

    // One spare byte so an odd-length tail can be squared off below.
    let mut compact = Zeroizing::new(vec![0u8; input.len() + 1]);
    let mut len = 0;
    for &byte in input {
        compact[len] = byte;
        len += usize::from(skip[usize::from(byte)] == 0);
    }

    let odd = len % 2 != 0;
    if odd {
        if timing == TimingMode::Variable {
            return Err(DecodeError::InvalidLength);
        }
        compact[len] = 0;
        len += 1;
    }

    let table = alphabet.decode_table(mode == DecodingMode::Forgiving);
    let mut valid = Choice::from(u8::from(!odd));
    let mut decoded = Vec::with_capacity(len / 2);
    for pair in compact[..len].chunks_exact(2) {
        let hi = table[usize::from(pair[0])];
        let lo = table[usize::from(pair[1])];
        valid &= !hi.ct_eq(&NO_SYMBOL) & !lo.ct_eq(&NO_SYMBOL);
        // Assembled unconditionally; only returned when the scan stayed valid.
        decoded.push((hi & 0x0f) << 4 | (lo & 0x0f));
        if timing == TimingMode::Variable && !bool::from(valid) {
            return Err(DecodeError::UnknownCharacter);
        }
    }

    if odd {
        return Err(DecodeError::InvalidLength);
    }
    if !bool::from(valid) {
        return Err(DecodeError::UnknownCharacter);
    }
    Ok(decoded)
}
