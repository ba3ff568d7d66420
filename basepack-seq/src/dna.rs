//! Arbitrary-length 2-bit packed DNA sequences.
//!
//! Packs DNA (A, C, G, T only) into 2 bits per base, 4 bases per byte,
//! achieving 4x compression over ASCII. Bases fill each byte from the most
//! significant bits: the first base occupies bits 7..6, the second 5..4,
//! and so on. Unused low-order bit pairs of the final byte are always zero.

use std::fmt;
use std::str::FromStr;

use basepack_core::{BasepackError, Result, WireFormat};

use crate::alphabet::{base_to_code, code_to_base};
use crate::wire::FrameReader;

/// A DNA sequence stored in 2-bit packed representation.
///
/// Immutable after construction. The wire format is a 4-byte big-endian
/// base count followed by the packed bytes.
///
/// # Example
///
/// ```
/// use basepack_seq::Dna;
///
/// let seq = Dna::encode(b"ACGT").unwrap();
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.decode(), b"ACGT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dna {
    data: Vec<u8>,
    len: usize,
}

impl Dna {
    /// Encode an ASCII DNA sequence into 2-bit packed representation.
    ///
    /// Only unambiguous bases (A, C, G, T) are supported. Case-insensitive.
    /// An empty input produces an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BasepackError::InvalidSymbol`] with the 1-based position
    /// of the first unrecognized byte; no partial result is produced.
    pub fn encode(seq: &[u8]) -> Result<Self> {
        let len = seq.len();
        let mut data = vec![0u8; len.div_ceil(4)];

        for (i, &base) in seq.iter().enumerate() {
            let code = base_to_code(base).ok_or(BasepackError::InvalidSymbol {
                position: i + 1,
                symbol: base as char,
            })?;
            let bit_offset = 6 - (i % 4) * 2; // 6, 4, 2, 0
            data[i / 4] |= code << bit_offset;
        }

        Ok(Self { data, len })
    }

    /// Decode back to ASCII DNA bytes.
    ///
    /// Always produces uppercase A, C, G, T. The extracted 2-bit codes are
    /// masked, so every value has an inverse and decoding cannot fail.
    pub fn decode(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.len);
        for i in 0..self.len {
            let bit_offset = 6 - (i % 4) * 2;
            let code = (self.data[i / 4] >> bit_offset) & 0b11;
            result.push(code_to_base(code));
        }
        result
    }

    /// Get the base at a specific position.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        let bit_offset = 6 - (index % 4) * 2;
        let code = (self.data[index / 4] >> bit_offset) & 0b11;
        Some(code_to_base(code))
    }

    /// Number of bases in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes, `len.div_ceil(4)` of them.
    pub fn packed_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl WireFormat for Dna {
    fn to_wire(&self) -> Result<Vec<u8>> {
        let len = u32::try_from(self.len).map_err(|_| BasepackError::LengthOutOfRange {
            length: self.len,
            min: 0,
            max: u32::MAX as usize,
        })?;
        let mut buf = Vec::with_capacity(4 + self.data.len());
        buf.extend_from_slice(&len.to_be_bytes());
        buf.extend_from_slice(&self.data);
        Ok(buf)
    }

    /// Read a 4-byte big-endian base count, then exactly `count.div_ceil(4)`
    /// packed bytes. No symbol validation is performed at this layer; the
    /// bytes are trusted to come from a conforming encoder.
    fn from_wire(data: &[u8]) -> Result<Self> {
        let mut reader = FrameReader::new(data);
        let len = reader.read_u32()? as usize;
        let packed = reader.read_bytes(len.div_ceil(4))?.to_vec();
        reader.finish()?;
        Ok(Self { data: packed, len })
    }
}

impl FromStr for Dna {
    type Err = BasepackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::encode(s.as_bytes())
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8(self.decode()).unwrap_or_default();
        f.write_str(&s)
    }
}

impl TryFrom<&str> for Dna {
    type Error = BasepackError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<&Dna> for String {
    fn from(seq: &Dna) -> String {
        seq.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dna {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dna {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let original = b"ACGTACGT";
        let encoded = Dna::encode(original).unwrap();
        assert_eq!(encoded.decode(), original);
    }

    #[test]
    fn acgt_packs_to_expected_byte() {
        // A=00, C=01, G=10, T=11 packed high-to-low
        let seq = Dna::encode(b"ACGT").unwrap();
        assert_eq!(seq.packed_bytes(), &[0b0001_1011]);
    }

    #[test]
    fn partial_final_byte_pads_with_zeros() {
        let seq = Dna::encode(b"TTT").unwrap();
        assert_eq!(seq.packed_bytes(), &[0b1111_1100]);
        assert_eq!(seq.decode(), b"TTT");
    }

    #[test]
    fn encode_decode_non_multiple_of_four() {
        for s in [&b"A"[..], b"CG", b"ACT", b"ACGTA"] {
            let seq = Dna::encode(s).unwrap();
            assert_eq!(seq.len(), s.len());
            assert_eq!(seq.decode(), s);
        }
    }

    #[test]
    fn encode_case_insensitive() {
        let upper = Dna::encode(b"ACGT").unwrap();
        let lower = Dna::encode(b"acgt").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.decode(), b"ACGT");
    }

    #[test]
    fn invalid_symbol_reports_one_based_position() {
        // the 'X' is the second character, reported as position 2
        let err = Dna::encode(b"AXGT").unwrap_err();
        assert_eq!(
            err,
            BasepackError::InvalidSymbol {
                position: 2,
                symbol: 'X'
            }
        );

        let err = Dna::encode(b"ACGN").unwrap_err();
        assert_eq!(
            err,
            BasepackError::InvalidSymbol {
                position: 4,
                symbol: 'N'
            }
        );
    }

    #[test]
    fn empty_sequence() {
        let seq = Dna::encode(b"").unwrap();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(seq.packed_bytes().is_empty());
        assert_eq!(seq.decode(), Vec::<u8>::new());
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn get_individual_bases() {
        let seq = Dna::encode(b"TAGCAA").unwrap();
        assert_eq!(seq.get(0), Some(b'T'));
        assert_eq!(seq.get(1), Some(b'A'));
        assert_eq!(seq.get(2), Some(b'G'));
        assert_eq!(seq.get(3), Some(b'C'));
        assert_eq!(seq.get(5), Some(b'A'));
        assert_eq!(seq.get(6), None);
    }

    #[test]
    fn compact_storage() {
        assert_eq!(Dna::encode(b"ACGTACGT").unwrap().packed_bytes().len(), 2);
        assert_eq!(Dna::encode(b"ACGTACGTA").unwrap().packed_bytes().len(), 3);
    }

    #[test]
    fn wire_frame_layout() {
        let seq = Dna::encode(b"ACGTT").unwrap();
        let frame = seq.to_wire().unwrap();
        assert_eq!(frame, vec![0, 0, 0, 5, 0b0001_1011, 0b1100_0000]);
    }

    #[test]
    fn wire_roundtrip() {
        for s in [&b""[..], b"A", b"ACGT", b"ACGTACGTACGTACGTT"] {
            let seq = Dna::encode(s).unwrap();
            let back = Dna::from_wire(&seq.to_wire().unwrap()).unwrap();
            assert_eq!(back, seq);
        }
    }

    #[test]
    fn wire_empty_frame() {
        let frame = Dna::encode(b"").unwrap().to_wire().unwrap();
        assert_eq!(frame, vec![0, 0, 0, 0]);
        assert!(Dna::from_wire(&frame).unwrap().is_empty());
    }

    #[test]
    fn wire_truncated_rejected() {
        // declares 5 bases (2 packed bytes) but carries only 1
        let frame = [0u8, 0, 0, 5, 0b0001_1011];
        let err = Dna::from_wire(&frame).unwrap_err();
        assert!(matches!(err, BasepackError::TruncatedInput { .. }));
    }

    #[test]
    fn wire_trailing_bytes_rejected() {
        let mut frame = Dna::encode(b"ACGT").unwrap().to_wire().unwrap();
        frame.push(0xFF);
        assert!(Dna::from_wire(&frame).is_err());
    }

    #[test]
    fn wire_does_not_validate_symbols() {
        // arbitrary packed bits are trusted; every 2-bit slice decodes
        let seq = Dna::from_wire(&[0, 0, 0, 4, 0xFF]).unwrap();
        assert_eq!(seq.decode(), b"TTTT");
    }

    #[test]
    fn parse_and_display() {
        let seq: Dna = "acgtACGT".parse().unwrap();
        assert_eq!(seq.to_string(), "ACGTACGT");
        assert_eq!(String::from(&seq), "ACGTACGT");
        assert!(Dna::try_from("ACGX").is_err());
    }

    #[test]
    fn long_sequence_roundtrip() {
        let bases = b"ACGT";
        let long: Vec<u8> = (0..1000).map(|i| bases[i % 4]).collect();
        let seq = Dna::encode(&long).unwrap();
        assert_eq!(seq.len(), 1000);
        assert_eq!(seq.decode(), long);
        let back = Dna::from_wire(&seq.to_wire().unwrap()).unwrap();
        assert_eq!(back.decode(), long);
    }
}
