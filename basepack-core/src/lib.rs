//! Shared primitives for the basepack nucleotide-encoding crates.
//!
//! `basepack-core` provides the foundation the codec crates build on:
//!
//! - **Error types** — [`BasepackError`] and [`Result`] for structured error handling
//! - **Traits** — [`WireFormat`], the binary serialization contract

pub mod error;
pub mod traits;

pub use error::{BasepackError, Result};
pub use traits::WireFormat;
