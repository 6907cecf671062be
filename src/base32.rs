//! Base32 encoding and decoding as described in [RFC 4648 § 6].
//!
//! Encoding packs the input bitstream into 5-bit symbols, most significant
//! bits first, and pads the final block when the alphabet defines a padding
//! character. Decoding comes in two disciplines: [`DecodingMode::Strict`]
//! rejects anything the encoder could not have produced, while
//! [`DecodingMode::Forgiving`] normalizes and repairs the input and never
//! fails.
//!
//! [RFC 4648 § 6]: https://datatracker.ietf.org/doc/html/rfc4648#section-6

use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::{is_reserved_whitespace, Alphabet, NO_SYMBOL};
use crate::errors::{DecodeError, Result};

/// Decoding disciplines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodingMode {
    /// Reject any deviation from the encoder's exact output shape.
    Strict,
    /// Fold case, repair padding and drop unknown symbols instead of
    /// failing.
    Forgiving,
}

const BITS: usize = Alphabet::<32>::BITS;
const BLOCK_BYTES: usize = Alphabet::<32>::BLOCK_BYTES;
const BLOCK_SYMBOLS: usize = Alphabet::<32>::BLOCK_SYMBOLS;

/// Encodes `data` with the given alphabet.
///
/// For padded alphabets the output length is always a multiple of eight
/// symbols; padless alphabets produce exactly the data symbols. Empty input
/// encodes to empty output with no padding.
pub fn encode(data: &[u8], alphabet: &Alphabet<32>) -> String {
    let mut encoded = String::with_capacity(data.len().div_ceil(BLOCK_BYTES) * BLOCK_SYMBOLS);
    for chunk in data.chunks(BLOCK_BYTES) {
        let mut block = [0u8; BLOCK_BYTES];
        block[..chunk.len()].copy_from_slice(chunk);
        // 40 data bits, most significant first; the zero fill past the end
        // of a short chunk never becomes a data symbol.
        let acc = u64::from_be_bytes([0, 0, 0, block[0], block[1], block[2], block[3], block[4]]);
        let data_symbols = (chunk.len() * 8).div_ceil(BITS);
        for position in 0..BLOCK_SYMBOLS {
            if position < data_symbols {
                let shift = (BLOCK_SYMBOLS - 1 - position) * BITS;
                let index = (acc >> shift) as usize & (32 - 1);
                encoded.push(alphabet.symbols()[index] as char);
            } else if let Some(pad) = alphabet.padding() {
                encoded.push(pad as char);
            }
        }
    }
    encoded
}

/// Encodes `data` without the trailing padding run.
pub fn encode_unpadded(data: &[u8], alphabet: &Alphabet<32>) -> String {
    let mut encoded = encode(data, alphabet);
    if let Some(pad) = alphabet.padding() {
        let trimmed = encoded.trim_end_matches(pad as char).len();
        encoded.truncate(trimmed);
    }
    encoded
}

/// Decodes `encoded` with the given alphabet.
///
/// Reserved whitespace (CR, LF, tab, space) is stripped in both modes, so
/// line-wrapped input decodes even strictly. Everything else depends on the
/// mode: strict decoding returns the first violated condition as a typed
/// error, checked in the order length, padding-run length, misplaced
/// padding, unknown character; forgiving decoding repairs the input and
/// returns, at worst, an empty vector.
pub fn decode(encoded: &str, alphabet: &Alphabet<32>, mode: DecodingMode) -> Result<Vec<u8>> {
    let mut symbols: Vec<u8> = encoded
        .bytes()
        .filter(|byte| !is_reserved_whitespace(*byte))
        .collect();

    let table = match mode {
        DecodingMode::Strict => {
            let table = alphabet.decode_table(false);
            validate(&symbols, alphabet, &table)?;
            table
        }
        DecodingMode::Forgiving => {
            let table = alphabet.decode_table(true);
            normalize(&mut symbols, alphabet, &table);
            table
        }
    };

    Ok(unpack(&symbols, &table, alphabet.padding()))
}

/// Strict-mode validation; `table` is the exact-case lookup table.
fn validate(symbols: &[u8], alphabet: &Alphabet<32>, table: &[u8; 256]) -> Result<()> {
    let data_end = match alphabet.padding() {
        Some(pad) => {
            if symbols.len() % BLOCK_SYMBOLS != 0 {
                return Err(DecodeError::InvalidLength);
            }
            let data_end = trailing_run_start(symbols, pad);
            if !Alphabet::<32>::is_legal_padding_run(symbols.len() - data_end) {
                return Err(DecodeError::InvalidPaddingLength);
            }
            if symbols[..data_end].contains(&pad) {
                return Err(DecodeError::MisplacedPadding);
            }
            data_end
        }
        None => {
            if !Alphabet::<32>::is_legal_tail(symbols.len() % BLOCK_SYMBOLS) {
                return Err(DecodeError::InvalidLength);
            }
            symbols.len()
        }
    };
    if symbols[..data_end]
        .iter()
        .any(|&symbol| table[usize::from(symbol)] == NO_SYMBOL)
    {
        return Err(DecodeError::UnknownCharacter);
    }
    Ok(())
}

/// Forgiving-mode normalization; `table` is the case-folded lookup table.
///
/// Repairs, in order: canonicalize the padding character's case, right-pad
/// to a whole number of blocks, move interior padding out of the data
/// region, then drop every byte the alphabet does not know.
fn normalize(symbols: &mut Vec<u8>, alphabet: &Alphabet<32>, table: &[u8; 256]) {
    let padding = alphabet.padding();
    if let Some(pad) = padding {
        for byte in symbols.iter_mut() {
            if byte.eq_ignore_ascii_case(&pad) {
                *byte = pad;
            }
        }
        if symbols.len() % BLOCK_SYMBOLS != 0 {
            let target = symbols.len().next_multiple_of(BLOCK_SYMBOLS);
            symbols.resize(target, pad);
        }
        let data_end = trailing_run_start(symbols, pad);
        if symbols[..data_end].contains(&pad) {
            let run = symbols.len() - data_end;
            symbols.truncate(data_end);
            symbols.retain(|&byte| byte != pad);
            symbols.extend(core::iter::repeat(pad).take(run));
        }
    }
    symbols.retain(|&byte| table[usize::from(byte)] != NO_SYMBOL || Some(byte) == padding);
}

/// Offset of the trailing padding run (`symbols.len()` when there is none).
fn trailing_run_start(symbols: &[u8], pad: u8) -> usize {
    symbols
        .iter()
        .rposition(|&byte| byte != pad)
        .map_or(0, |last| last + 1)
}

/// Reverses the encoder's bit packing, stopping at the trailing padding.
///
/// Callers guarantee that every symbol before the padding maps through
/// `table`; sub-byte bits left over at the end are fill and are dropped.
fn unpack(symbols: &[u8], table: &[u8; 256], padding: Option<u8>) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(symbols.len() * BITS / 8);
    let mut acc = 0u32;
    let mut bits = 0;
    for &symbol in symbols {
        if padding == Some(symbol) {
            break;
        }
        let value = table[usize::from(symbol)];
        debug_assert_ne!(value, NO_SYMBOL);
        acc = (acc << BITS) | u32::from(value);
        bits += BITS;
        if bits >= 8 {
            bits -= 8;
            decoded.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }
    decoded
}
