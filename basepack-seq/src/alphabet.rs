//! Bidirectional symbol tables for the packed encodings.
//!
//! Two alphabets are defined:
//!
//! - the 4-symbol nucleotide alphabet `ACGT`, 2 bits per base
//!   (A=00, C=01, G=10, T=11), shared by [`crate::Dna`] and [`crate::Kmer`];
//! - the 15-symbol IUPAC alphabet, 4 bits per symbol, used by
//!   [`crate::QKmer`]. Bit *b* of a nibble is set iff base *b* is a
//!   candidate (A=bit0, C=bit1, G=bit2, T=bit3), so `R` (A or G) is `0b0101`
//!   and `N` (any) is `0b1111`. The nibble `0b0000` is never produced and is
//!   treated as corruption on decode.
//!
//! All lookups are case-insensitive on input and produce uppercase on output.

/// 2-bit code to uppercase base. Total over the masked domain.
pub(crate) const CODE_TO_BASE: [u8; 4] = *b"ACGT";

/// Encode a single ASCII base to its 2-bit code.
#[inline]
pub(crate) fn base_to_code(b: u8) -> Option<u8> {
    match b {
        b'A' | b'a' => Some(0b00),
        b'C' | b'c' => Some(0b01),
        b'G' | b'g' => Some(0b10),
        b'T' | b't' => Some(0b11),
        _ => None,
    }
}

/// Decode a masked 2-bit code back to its uppercase ASCII base.
#[inline]
pub(crate) fn code_to_base(code: u8) -> u8 {
    CODE_TO_BASE[(code & 0b11) as usize]
}

/// The 15 IUPAC symbols and their candidate-set nibbles.
const IUPAC_SYMBOLS: [(u8, u8); 15] = [
    (b'A', 0b0001),
    (b'C', 0b0010),
    (b'G', 0b0100),
    (b'T', 0b1000),
    (b'M', 0b0011),
    (b'R', 0b0101),
    (b'W', 0b1001),
    (b'S', 0b0110),
    (b'Y', 0b1010),
    (b'K', 0b1100),
    (b'V', 0b0111),
    (b'H', 0b1011),
    (b'D', 0b1101),
    (b'B', 0b1110),
    (b'N', 0b1111),
];

const fn build_iupac_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < IUPAC_SYMBOLS.len() {
        let (sym, bits) = IUPAC_SYMBOLS[i];
        table[sym as usize] = bits;
        table[sym.to_ascii_lowercase() as usize] = bits;
        i += 1;
    }
    table
}

/// ASCII byte to IUPAC nibble; 0 marks an invalid symbol.
const IUPAC_TO_BITS: [u8; 256] = build_iupac_table();

/// Nibble to uppercase IUPAC symbol; slot 0 is the invalid sentinel.
const BITS_TO_IUPAC: [u8; 16] = [
    0, b'A', b'C', b'M', b'G', b'R', b'S', b'V', b'T', b'W', b'Y', b'H', b'K', b'D', b'B', b'N',
];

/// Encode a single ASCII symbol to its IUPAC nibble.
#[inline]
pub(crate) fn iupac_to_bits(b: u8) -> Option<u8> {
    match IUPAC_TO_BITS[b as usize] {
        0 => None,
        bits => Some(bits),
    }
}

/// Decode a masked nibble back to its uppercase IUPAC symbol.
///
/// Returns `None` for `0b0000`, which no valid encode ever produces.
#[inline]
pub(crate) fn bits_to_iupac(bits: u8) -> Option<u8> {
    match BITS_TO_IUPAC[(bits & 0b1111) as usize] {
        0 => None,
        sym => Some(sym),
    }
}
