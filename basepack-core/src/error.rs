//! Structured error types shared by the basepack codecs.

use thiserror::Error;

/// Unified error type for all basepack operations.
///
/// Every variant is terminal for the operation that raised it: the codecs
/// never return partial or best-effort results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasepackError {
    /// An input character is not part of the codec's symbol table.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// 1-based position of the offending character.
        position: usize,
        /// The offending character, as supplied by the caller.
        symbol: char,
    },

    /// Input length is outside the range a codec can represent.
    #[error("length {length} out of range [{min}, {max}]")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    /// A binary payload is smaller (or larger) than its length field implies.
    #[error("binary frame size mismatch: expected {needed} bytes, found {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// A decoded bit pattern has no valid inverse mapping.
    #[error("corrupt packed data: code {code:#06b} at position {position}")]
    CorruptData { position: usize, code: u8 },
}

/// Convenience alias used throughout the basepack crates.
pub type Result<T> = std::result::Result<T, BasepackError>;
