//! Fixed-capacity ambiguity k-mers packed into two 64-bit words.
//!
//! Up to 32 IUPAC symbols at 4 bits per symbol. Symbols 0..16 live in the
//! `high` word, symbols 16..32 in `low`, most-significant-nibble first.
//! Whichever half is partially filled is left-aligned so the first symbol
//! always sits in the top nibble of `high`; trailing nibbles are zero.

use std::fmt;
use std::str::FromStr;

use basepack_core::{BasepackError, Result, WireFormat};

use crate::alphabet::{bits_to_iupac, iupac_to_bits};
use crate::wire::FrameReader;

/// Maximum ambiguity k-mer length representable in two 64-bit words.
pub const MAX_QKMER_LEN: usize = 32;

/// An ambiguity k-mer of 1 to 32 IUPAC symbols packed into two `u64`s.
///
/// Each nibble is a candidate set: bit *b* set means base *b* matches
/// (A=bit0, C=bit1, G=bit2, T=bit3), so `N` is `0b1111`. The wire format is
/// a 2-byte big-endian length followed by the big-endian `high` and `low`
/// words, 18 bytes in all.
///
/// # Example
///
/// ```
/// use basepack_seq::QKmer;
///
/// let qkmer = QKmer::encode(b"ANGT").unwrap();
/// assert_eq!(qkmer.decode().unwrap(), b"ANGT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QKmer {
    high: u64,
    low: u64,
    len: u16,
}

impl QKmer {
    /// Encode an ASCII IUPAC sequence of 1 to 32 symbols. Case-insensitive.
    ///
    /// # Errors
    ///
    /// [`BasepackError::LengthOutOfRange`] for an empty or over-long input,
    /// [`BasepackError::InvalidSymbol`] for a byte outside the 15-symbol
    /// IUPAC table.
    pub fn encode(seq: &[u8]) -> Result<Self> {
        let len = seq.len();
        if len == 0 || len > MAX_QKMER_LEN {
            return Err(BasepackError::LengthOutOfRange {
                length: len,
                min: 1,
                max: MAX_QKMER_LEN,
            });
        }

        let mut high: u64 = 0;
        let mut low: u64 = 0;
        for (i, &sym) in seq.iter().enumerate() {
            let bits = iupac_to_bits(sym).ok_or(BasepackError::InvalidSymbol {
                position: i + 1,
                symbol: sym as char,
            })?;
            if i < 16 {
                high = (high << 4) | u64::from(bits);
            } else {
                low = (low << 4) | u64::from(bits);
            }
        }

        // Left-align the partially filled half; a full half needs no shift.
        if len <= 16 {
            high <<= 4 * (16 - len);
        } else if len < 32 {
            low <<= 4 * (32 - len);
        }

        Ok(Self {
            high,
            low,
            len: len as u16,
        })
    }

    /// Decode back to ASCII IUPAC symbols, uppercase.
    ///
    /// # Errors
    ///
    /// [`BasepackError::CorruptData`] if an extracted nibble is `0b0000`,
    /// which no valid encode produces, and [`BasepackError::LengthOutOfRange`]
    /// if the stored length is outside `[1, 32]`. Both are reachable only for
    /// values built from an untrusted wire frame.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let len = self.len as usize;
        if len == 0 || len > MAX_QKMER_LEN {
            return Err(BasepackError::LengthOutOfRange {
                length: len,
                min: 1,
                max: MAX_QKMER_LEN,
            });
        }

        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let nibble = self.nibble_at(i);
            let sym = bits_to_iupac(nibble).ok_or(BasepackError::CorruptData {
                position: i + 1,
                code: nibble,
            })?;
            result.push(sym);
        }
        Ok(result)
    }

    /// Get the symbol at a specific position.
    ///
    /// Returns `None` past the end or for a corrupt (zero) nibble.
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= (self.len as usize).min(MAX_QKMER_LEN) {
            return None;
        }
        bits_to_iupac(self.nibble_at(index))
    }

    /// Number of symbols in the k-mer.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the k-mer is empty (never true for encoded values).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed `(high, low)` words.
    pub fn halves(&self) -> (u64, u64) {
        (self.high, self.low)
    }

    #[inline]
    fn nibble_at(&self, i: usize) -> u8 {
        let word = if i < 16 {
            self.high >> ((15 - i) * 4)
        } else {
            self.low >> ((31 - i) * 4)
        };
        (word & 0xF) as u8
    }
}

impl WireFormat for QKmer {
    fn to_wire(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(18);
        buf.extend_from_slice(&self.len.to_be_bytes());
        buf.extend_from_slice(&self.high.to_be_bytes());
        buf.extend_from_slice(&self.low.to_be_bytes());
        Ok(buf)
    }

    /// Read a 2-byte big-endian length and the two 8-byte words.
    ///
    /// Beyond requiring the exact 18-byte frame, no validation is performed
    /// here; callers that need on-the-wire integrity re-run
    /// [`decode`](QKmer::decode), which surfaces corruption.
    fn from_wire(data: &[u8]) -> Result<Self> {
        let mut reader = FrameReader::new(data);
        let len = reader.read_u16()?;
        let high = reader.read_u64()?;
        let low = reader.read_u64()?;
        reader.finish()?;
        Ok(Self { high, low, len })
    }
}

impl FromStr for QKmer {
    type Err = BasepackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::encode(s.as_bytes())
    }
}

impl fmt::Display for QKmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.decode().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8(bytes).unwrap_or_default())
    }
}

impl TryFrom<&str> for QKmer {
    type Error = BasepackError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<&QKmer> for String {
    fn from(qkmer: &QKmer) -> String {
        qkmer.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QKmer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let bytes = self.decode().map_err(serde::ser::Error::custom)?;
        let s = String::from_utf8(bytes).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QKmer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
