//! Alphabet tables, named presets and their validation.

use crate::errors::AlphabetError;

/// Whitespace bytes stripped from encoded input and banned from alphabets
/// and padding: carriage return, line feed, tab and space.
pub(crate) const RESERVED_WHITESPACE: [u8; 4] = [b'\r', b'\n', b'\t', b' '];

/// Marker for decode-table entries with no corresponding symbol.
pub(crate) const NO_SYMBOL: u8 = 0xff;

pub(crate) fn is_reserved_whitespace(byte: u8) -> bool {
    RESERVED_WHITESPACE.contains(&byte)
}

/// A validated symbol table plus optional padding character.
///
/// `BASE` is the alphabet size: 32 for Base32, 16 for Base16. A value of
/// this type can only be obtained from a vetted preset or from [`Alphabet::new`],
/// so the encode and decode paths never have to re-validate it. Alphabets
/// are immutable and freely shareable across concurrent calls.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const BASE: usize> {
    symbols: [u8; BASE],
    padding: Option<u8>,
}

impl<const BASE: usize> Alphabet<BASE> {
    /// Bits carried by one symbol.
    pub(crate) const BITS: usize = BASE.trailing_zeros() as usize;

    /// Symbols per encoded block: the smallest symbol count covering a
    /// whole number of bytes (eight for Base32, two for Base16).
    pub(crate) const BLOCK_SYMBOLS: usize = {
        let mut symbols = 1;
        while (symbols * Self::BITS) % 8 != 0 {
            symbols += 1;
        }
        symbols
    };

    /// Bytes covered by one encoded block.
    pub(crate) const BLOCK_BYTES: usize = Self::BLOCK_SYMBOLS * Self::BITS / 8;

    /// Validates `symbols` and `padding` as a usable alphabet.
    ///
    /// The symbol table must consist of exactly `BASE` printable ASCII
    /// bytes, pairwise distinct under ASCII case folding. The padding
    /// character, when given, must be a single non-whitespace byte outside
    /// the symbol table. Violations surface here as [`AlphabetError`]s,
    /// never later at encode or decode time.
    pub fn new(symbols: &str, padding: Option<char>) -> Result<Self, AlphabetError> {
        const { assert!(BASE == 16 || BASE == 32) };

        let padding = match padding {
            None => None,
            Some(character) => {
                if character.len_utf8() != 1 {
                    return Err(AlphabetError::BadPaddingLength);
                }
                let byte = character as u8;
                if is_reserved_whitespace(byte) {
                    return Err(AlphabetError::ReservedPaddingCharacter);
                }
                Some(byte)
            }
        };

        if symbols.len() != BASE {
            return Err(AlphabetError::WrongAlphabetLength);
        }
        let mut table = [0u8; BASE];
        table.copy_from_slice(symbols.as_bytes());

        for (index, &symbol) in table.iter().enumerate() {
            if !symbol.is_ascii_graphic() {
                return Err(AlphabetError::ReservedSymbol);
            }
            if let Some(pad) = padding {
                if symbol.eq_ignore_ascii_case(&pad) {
                    return Err(AlphabetError::PaddingInAlphabet);
                }
            }
            if table[..index].iter().any(|seen| seen.eq_ignore_ascii_case(&symbol)) {
                return Err(AlphabetError::DuplicateSymbol);
            }
        }

        Ok(Self { symbols: table, padding })
    }

    /// Symbol table in value order.
    pub fn symbols(&self) -> &[u8; BASE] {
        &self.symbols
    }

    /// Padding byte, when this alphabet pads its output.
    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Builds the symbol-to-value table, admitting both ASCII cases of
    /// every symbol when `fold_case` is set.
    ///
    /// Rebuilt per call on the stack; there is no global cache to race on.
    pub(crate) fn decode_table(&self, fold_case: bool) -> [u8; 256] {
        let mut table = [NO_SYMBOL; 256];
        for (value, &symbol) in self.symbols.iter().enumerate() {
            if fold_case {
                table[symbol.to_ascii_uppercase() as usize] = value as u8;
                table[symbol.to_ascii_lowercase() as usize] = value as u8;
            } else {
                table[symbol as usize] = value as u8;
            }
        }
        table
    }

    /// Whether a final partial block may consist of `count` data symbols.
    ///
    /// Derived from the packing arithmetic: `r` leftover bytes occupy
    /// `ceil(8r / BITS)` symbols, so for Base32 the legal counts are
    /// `{0, 2, 4, 5, 7}` and for Base16 only `{0}`.
    pub(crate) fn is_legal_tail(count: usize) -> bool {
        count == 0
            || (1..Self::BLOCK_BYTES).any(|bytes| (8 * bytes).div_ceil(Self::BITS) == count)
    }

    /// Whether a trailing padding run of `length` symbols can terminate
    /// encoder output: the complement of a legal tail within one block
    /// (`{0, 1, 3, 4, 6}` for Base32).
    pub(crate) fn is_legal_padding_run(length: usize) -> bool {
        length == 0
            || (1..Self::BLOCK_BYTES).any(|bytes| {
                Self::BLOCK_SYMBOLS - (8 * bytes).div_ceil(Self::BITS) == length
            })
    }
}

impl Alphabet<32> {
    /// RFC 4648 §6 standard alphabet, padded with `=`.
    pub const RFC4648: Self = Self {
        symbols: *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
        padding: Some(b'='),
    };

    /// RFC 4648 §7 "base32hex" alphabet, padded with `=`.
    pub const RFC4648_HEX: Self = Self {
        symbols: *b"0123456789ABCDEFGHIJKLMNOPQRSTUV",
        padding: Some(b'='),
    };

    /// Crockford's human-oriented alphabet; no padding.
    pub const CROCKFORD: Self = Self {
        symbols: *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ",
        padding: None,
    };

    /// z-base-32 alphabet; no padding.
    pub const Z_BASE32: Self = Self {
        symbols: *b"ybndrfg8ejkmcpqxot1uwisza345h769",
        padding: None,
    };
}

impl Alphabet<16> {
    /// Upper-case hexadecimal digits.
    pub const UPPER: Self = Self {
        symbols: *b"0123456789ABCDEF",
        padding: None,
    };

    /// Lower-case hexadecimal digits.
    pub const LOWER: Self = Self {
        symbols: *b"0123456789abcdef",
        padding: None,
    };
}

/// Named Base32 alphabet presets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Base32Variant {
    /// RFC 4648 §6 standard alphabet.
    Rfc4648,
    /// RFC 4648 §7 extended-hex alphabet.
    Rfc4648Hex,
    /// Crockford's alphabet.
    Crockford,
    /// z-base-32.
    ZBase32,
}

impl Base32Variant {
    /// Resolves the variant to its alphabet.
    pub const fn alphabet(self) -> &'static Alphabet<32> {
        match self {
            Self::Rfc4648 => &Alphabet::RFC4648,
            Self::Rfc4648Hex => &Alphabet::RFC4648_HEX,
            Self::Crockford => &Alphabet::CROCKFORD,
            Self::ZBase32 => &Alphabet::Z_BASE32,
        }
    }
}

/// Named Base16 alphabet presets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Base16Variant {
    /// Upper-case hexadecimal digits.
    Upper,
    /// Lower-case hexadecimal digits.
    Lower,
}

impl Base16Variant {
    /// Resolves the variant to its alphabet.
    pub const fn alphabet(self) -> &'static Alphabet<16> {
        match self {
            Self::Upper => &Alphabet::UPPER,
            Self::Lower => &Alphabet::LOWER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    #[test]
    fn presets_pass_their_own_validation() {
        for variant in [
            Base32Variant::Rfc4648,
            Base32Variant::Rfc4648Hex,
            Base32Variant::Crockford,
            Base32Variant::ZBase32,
        ] {
            let preset = variant.alphabet();
            let symbols = core::str::from_utf8(preset.symbols()).unwrap();
            let padding = preset.padding().map(char::from);
            assert_eq!(Alphabet::<32>::new(symbols, padding).unwrap(), *preset);
        }
        for variant in [Base16Variant::Upper, Base16Variant::Lower] {
            let preset = variant.alphabet();
            let symbols = core::str::from_utf8(preset.symbols()).unwrap();
            assert_eq!(Alphabet::<16>::new(symbols, None).unwrap(), *preset);
        }
    }

    #[test]
    fn multibyte_padding_is_rejected() {
        assert_eq!(
            Alphabet::<32>::new(STANDARD, Some('é')),
            Err(AlphabetError::BadPaddingLength)
        );
    }

    #[test]
    fn reserved_padding_is_rejected() {
        for reserved in ['\r', '\n', '\t', ' '] {
            assert_eq!(
                Alphabet::<32>::new(STANDARD, Some(reserved)),
                Err(AlphabetError::ReservedPaddingCharacter)
            );
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            Alphabet::<32>::new("1234567890asdfghjklzxcvbnm", Some('=')),
            Err(AlphabetError::WrongAlphabetLength)
        );
        assert_eq!(
            Alphabet::<16>::new(STANDARD, None),
            Err(AlphabetError::WrongAlphabetLength)
        );
    }

    #[test]
    fn reserved_symbols_are_rejected() {
        let with_newline = STANDARD.replace('7', "\n");
        assert_eq!(
            Alphabet::<32>::new(&with_newline, Some('=')),
            Err(AlphabetError::ReservedSymbol)
        );
        let with_del = STANDARD.replace('7', "\u{7f}");
        assert_eq!(
            Alphabet::<32>::new(&with_del, Some('=')),
            Err(AlphabetError::ReservedSymbol)
        );
    }

    #[test]
    fn padding_in_alphabet_is_rejected() {
        let with_star = STANDARD.replace('A', "*");
        assert_eq!(
            Alphabet::<32>::new(&with_star, Some('*')),
            Err(AlphabetError::PaddingInAlphabet)
        );
        // case-insensitive: pad 'a' collides with symbol 'A'
        assert_eq!(
            Alphabet::<32>::new(STANDARD, Some('a')),
            Err(AlphabetError::PaddingInAlphabet)
        );
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let duplicated = STANDARD.replace('B', "A");
        assert_eq!(
            Alphabet::<32>::new(&duplicated, Some('=')),
            Err(AlphabetError::DuplicateSymbol)
        );
        // case folding applies: 'a' duplicates 'A'
        let folded = STANDARD.replace('B', "a");
        assert_eq!(
            Alphabet::<32>::new(&folded, Some('=')),
            Err(AlphabetError::DuplicateSymbol)
        );
    }

    #[test]
    fn padless_alphabet_accepts_former_padding_symbols() {
        let with_equals = STANDARD.replace('A', "=");
        assert!(Alphabet::<32>::new(&with_equals, None).is_ok());
    }

    #[test]
    fn tail_and_padding_run_legality_match_rfc4648() {
        let legal_runs: Vec<usize> = (0..=8)
            .filter(|&run| Alphabet::<32>::is_legal_padding_run(run))
            .collect();
        assert_eq!(legal_runs, [0, 1, 3, 4, 6]);

        let legal_tails: Vec<usize> = (0..8)
            .filter(|&count| Alphabet::<32>::is_legal_tail(count))
            .collect();
        assert_eq!(legal_tails, [0, 2, 4, 5, 7]);

        assert!(Alphabet::<16>::is_legal_padding_run(0));
        assert!(!Alphabet::<16>::is_legal_padding_run(1));
        assert!(Alphabet::<16>::is_legal_tail(0));
        assert!(!Alphabet::<16>::is_legal_tail(1));
    }

    #[test]
    fn block_shape_is_derived_from_the_symbol_width() {
        assert_eq!(Alphabet::<32>::BITS, 5);
        assert_eq!(Alphabet::<32>::BLOCK_SYMBOLS, 8);
        assert_eq!(Alphabet::<32>::BLOCK_BYTES, 5);
        assert_eq!(Alphabet::<16>::BITS, 4);
        assert_eq!(Alphabet::<16>::BLOCK_SYMBOLS, 2);
        assert_eq!(Alphabet::<16>::BLOCK_BYTES, 1);
    }
}
