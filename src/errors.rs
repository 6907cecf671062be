//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with this crate's [`DecodeError`].
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Errors detected while validating a candidate alphabet.
///
/// All of these are fatal to [`Alphabet`](crate::Alphabet) construction and
/// never recoverable by retrying with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlphabetError {
    /// The padding character does not encode to a single byte.
    BadPaddingLength,
    /// The padding character is carriage return, line feed, tab or space.
    ReservedPaddingCharacter,
    /// The symbol table does not have the alphabet's expected size.
    WrongAlphabetLength,
    /// A symbol is reserved whitespace or not printable ASCII.
    ReservedSymbol,
    /// A symbol equals the padding character, ignoring ASCII case.
    PaddingInAlphabet,
    /// A symbol occurs more than once, ignoring ASCII case.
    DuplicateSymbol,
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPaddingLength => {
                write!(f, "the padding character must be a single byte")
            }
            Self::ReservedPaddingCharacter => {
                write!(f, "the padding character can not be a reserved character")
            }
            Self::WrongAlphabetLength => {
                write!(f, "the alphabet does not have the expected number of symbols")
            }
            Self::ReservedSymbol => {
                write!(f, "the alphabet can not contain a reserved character")
            }
            Self::PaddingInAlphabet => {
                write!(f, "the alphabet can not contain the padding character")
            }
            Self::DuplicateSymbol => {
                write!(f, "the alphabet must contain unique characters")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlphabetError {}

/// Errors detected while decoding in strict mode.
///
/// Forgiving-mode Base32 decoding repairs its input instead of returning
/// these. No partial output is ever produced alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The encoded length can not be the output of any encode call.
    InvalidLength,
    /// A character is not an exact member of the alphabet or padding.
    UnknownCharacter,
    /// The trailing padding run has a length no final block can produce.
    InvalidPaddingLength,
    /// The padding character occurs outside the trailing padding run.
    MisplacedPadding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => {
                write!(f, "the encoded data length is invalid")
            }
            Self::UnknownCharacter => {
                write!(f, "the encoded data contains characters unknown to the alphabet")
            }
            Self::InvalidPaddingLength => {
                write!(f, "the encoded data ends with an invalid padding sequence length")
            }
            Self::MisplacedPadding => {
                write!(f, "the padding character is used in an invalid place")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
