#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

//! Pure Rust implementation of the [RFC 4648] Base32 and Base16 (hex)
//! encodings, with configurable alphabets, strict and forgiving decoding
//! disciplines, and a constant-time decode path for hex.
//!
//! # Supported encodings
//!
//! - Base32 over the RFC 4648 standard and extended-hex alphabets (padded
//!   with `=`), plus the unpadded Crockford and z-base-32 alphabets, or any
//!   custom 32-symbol alphabet accepted by [`Alphabet::new`].
//! - Base16 over upper- or lower-case hex digits, decodable in constant
//!   time.
//!
//! # Usage
//!
//! ## Base32
//!
//! ```
//! # fn main() -> rfc4648::Result<()> {
//! use rfc4648::{base32, Alphabet, DecodingMode};
//!
//! let encoded = base32::encode(b"foobar", &Alphabet::RFC4648);
//! assert_eq!(encoded, "MZXW6YTBOI======");
//!
//! let decoded = base32::decode(&encoded, &Alphabet::RFC4648, DecodingMode::Strict)?;
//! assert_eq!(decoded, b"foobar");
//! # Ok(())
//! # }
//! ```
//!
//! ## Forgiving decoding
//!
//! Strict decoding rejects anything the encoder could not have produced.
//! Forgiving decoding folds case, strips whitespace, repairs padding and
//! drops unknown symbols instead:
//!
//! ```
//! # fn main() -> rfc4648::Result<()> {
//! use rfc4648::{base32, Alphabet, DecodingMode};
//!
//! let decoded = base32::decode("mzxw\n6yq=", &Alphabet::RFC4648, DecodingMode::Forgiving)?;
//! assert_eq!(decoded, b"foob");
//! # Ok(())
//! # }
//! ```
//!
//! ## Base16 with timing modes
//!
//! ```
//! # fn main() -> rfc4648::Result<()> {
//! use rfc4648::{base16, Alphabet, DecodingMode, TimingMode};
//!
//! let encoded = base16::encode(b"Hello", &Alphabet::UPPER);
//! assert_eq!(encoded, "48656C6C6F");
//!
//! let decoded = base16::decode(&encoded, &Alphabet::UPPER, DecodingMode::Strict, TimingMode::Constant)?;
//! assert_eq!(decoded, b"Hello");
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 4648]: https://datatracker.ietf.org/doc/html/rfc4648

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod base16;
pub mod base32;
pub mod errors;

pub use crate::{
    alphabet::{Alphabet, Base16Variant, Base32Variant},
    base16::TimingMode,
    base32::DecodingMode,
    errors::{AlphabetError, DecodeError, Result},
};

use alloc::string::String;
use alloc::vec::Vec;

/// Encodes `data` with the RFC 4648 standard Base32 alphabet.
pub fn base32_encode(data: &[u8]) -> String {
    base32::encode(data, &Alphabet::RFC4648)
}

/// Strictly decodes `encoded` against the RFC 4648 standard Base32
/// alphabet, collapsing the error detail into `None`.
///
/// Callers that need to know why decoding failed should use
/// [`base32::decode`] directly.
pub fn base32_decode(encoded: &str) -> Option<Vec<u8>> {
    base32::decode(encoded, &Alphabet::RFC4648, DecodingMode::Strict).ok()
}

/// Encodes `data` as upper-case hex.
pub fn base16_encode(data: &[u8]) -> String {
    base16::encode(data, &Alphabet::UPPER)
}

/// Strictly decodes upper-case hex in constant time, collapsing the error
/// detail into `None`.
///
/// Callers that need the error kind, the lower-case alphabet or variable
/// timing should use [`base16::decode`] directly.
pub fn base16_decode(encoded: &str) -> Option<Vec<u8>> {
    base16::decode(
        encoded,
        &Alphabet::UPPER,
        DecodingMode::Strict,
        TimingMode::Constant,
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_forward_to_the_preset_alphabets() {
        assert_eq!(base32_encode(b"fooba"), "MZXW6YTB");
        assert_eq!(base32_decode("MZXW6YTB").unwrap(), b"fooba");
        assert_eq!(base32_decode("MZXW6YTB="), None);
        assert_eq!(base16_encode(b"\x01\xab"), "01AB");
        assert_eq!(base16_decode("01AB").unwrap(), [0x01, 0xab]);
        assert_eq!(base16_decode("01ab"), None);
    }
}
