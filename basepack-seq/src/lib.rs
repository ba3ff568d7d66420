//! Compact binary encodings for nucleotide sequences.
//!
//! Three independent packed value types, each with a validating text parser,
//! an uppercase text formatter, and a stable big-endian wire format:
//!
//! - **[`Dna`]** — arbitrary-length sequences at 2 bits per base (A, C, G, T),
//!   4 bases per byte
//! - **[`Kmer`]** — k-mers of 1 to 32 bases packed into a single `u64`
//! - **[`QKmer`]** — ambiguity k-mers of 1 to 32 IUPAC symbols at 4 bits per
//!   symbol, packed into two `u64`s
//!
//! All parsing is case-insensitive; all output is uppercase. Errors carry the
//! 1-based position of the offending symbol and never yield partial values.
//!
//! # Example
//!
//! ```
//! use basepack_core::WireFormat;
//! use basepack_seq::{Dna, Kmer, QKmer};
//!
//! // Text round trip (lowercase input is normalized)
//! let seq: Dna = "acgtACGT".parse().unwrap();
//! assert_eq!(seq.to_string(), "ACGTACGT");
//!
//! // Binary round trip
//! let kmer = Kmer::encode(b"GATTACA").unwrap();
//! let frame = kmer.to_wire().unwrap();
//! assert_eq!(Kmer::from_wire(&frame).unwrap(), kmer);
//!
//! // IUPAC ambiguity codes
//! let qkmer = QKmer::encode(b"ACGTN").unwrap();
//! assert_eq!(qkmer.decode().unwrap(), b"ACGTN");
//! ```

mod alphabet;
pub mod dna;
pub mod kmer;
pub mod qkmer;
mod wire;

pub use dna::Dna;
pub use kmer::{Kmer, MAX_KMER_LEN};
pub use qkmer::{QKmer, MAX_QKMER_LEN};
