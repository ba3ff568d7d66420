//! Fixed-capacity k-mers packed into a single 64-bit word.
//!
//! Up to 32 bases at 2 bits per base. Base *i* (0-indexed) occupies bit
//! positions `[(len-i-1)*2, (len-i-1)*2+1]`: the first base sits in the
//! highest occupied bit pair and all bits above `len*2` are zero.

use std::fmt;
use std::str::FromStr;

use basepack_core::{BasepackError, Result, WireFormat};

use crate::alphabet::{base_to_code, code_to_base};
use crate::wire::FrameReader;

/// Maximum k-mer length representable in one 64-bit word.
pub const MAX_KMER_LEN: usize = 32;

/// A k-mer of 1 to 32 bases packed into a `u64`.
///
/// The wire format is a 1-byte length followed by the 8-byte big-endian word.
///
/// # Example
///
/// ```
/// use basepack_seq::Kmer;
///
/// let kmer = Kmer::encode(b"AC").unwrap();
/// assert_eq!(kmer.value(), 0b0001);
/// assert_eq!(kmer.decode(), b"AC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kmer {
    value: u64,
    len: u8,
}

impl Kmer {
    /// Encode an ASCII k-mer of 1 to 32 bases. Case-insensitive.
    ///
    /// # Errors
    ///
    /// [`BasepackError::LengthOutOfRange`] for an empty or over-long input,
    /// [`BasepackError::InvalidSymbol`] for a byte outside A, C, G, T.
    pub fn encode(seq: &[u8]) -> Result<Self> {
        if seq.is_empty() || seq.len() > MAX_KMER_LEN {
            return Err(BasepackError::LengthOutOfRange {
                length: seq.len(),
                min: 1,
                max: MAX_KMER_LEN,
            });
        }

        let mut value: u64 = 0;
        for (i, &base) in seq.iter().enumerate() {
            let code = base_to_code(base).ok_or(BasepackError::InvalidSymbol {
                position: i + 1,
                symbol: base as char,
            })?;
            value = (value << 2) | u64::from(code);
        }

        Ok(Self {
            value,
            len: seq.len() as u8,
        })
    }

    /// Decode back to ASCII bases, uppercase.
    ///
    /// Infallible: a 2-bit mask leaves only the four valid codes.
    pub fn decode(&self) -> Vec<u8> {
        let len = self.len as usize;
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let shift = (len - i - 1) * 2;
            let code = ((self.value >> shift) & 0b11) as u8;
            result.push(code_to_base(code));
        }
        result
    }

    /// Get the base at a specific position.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<u8> {
        let len = self.len as usize;
        if index >= len {
            return None;
        }
        let shift = (len - index - 1) * 2;
        Some(code_to_base(((self.value >> shift) & 0b11) as u8))
    }

    /// Number of bases in the k-mer.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the k-mer is empty (never true for encoded values).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed word. Occupied bits are the `len * 2` low-order bits.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl WireFormat for Kmer {
    fn to_wire(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(9);
        buf.push(self.len);
        buf.extend_from_slice(&self.value.to_be_bytes());
        Ok(buf)
    }

    /// Read a 1-byte length and the 8-byte big-endian word.
    ///
    /// The length byte is validated against `[1, 32]`; the word's bits are
    /// trusted.
    fn from_wire(data: &[u8]) -> Result<Self> {
        let mut reader = FrameReader::new(data);
        let len = reader.read_u8()?;
        if len == 0 || len as usize > MAX_KMER_LEN {
            return Err(BasepackError::LengthOutOfRange {
                length: len as usize,
                min: 1,
                max: MAX_KMER_LEN,
            });
        }
        let value = reader.read_u64()?;
        reader.finish()?;
        Ok(Self { value, len })
    }
}

impl FromStr for Kmer {
    type Err = BasepackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::encode(s.as_bytes())
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8(self.decode()).unwrap_or_default();
        f.write_str(&s)
    }
}

impl TryFrom<&str> for Kmer {
    type Error = BasepackError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<&Kmer> for String {
    fn from(kmer: &Kmer) -> String {
        kmer.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Kmer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Kmer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
