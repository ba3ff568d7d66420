//! Core trait definitions for the basepack crates.

/// A value with a stable binary wire representation.
///
/// The byte layout produced by `to_wire` is a compatibility contract:
/// persisted or transmitted frames must decode identically across versions.
pub trait WireFormat: Sized {
    /// Serialize to the wire representation.
    fn to_wire(&self) -> crate::Result<Vec<u8>>;

    /// Deserialize from a complete wire frame.
    ///
    /// Implementations consume the whole buffer; a frame whose size does not
    /// match its declared length is rejected.
    fn from_wire(data: &[u8]) -> crate::Result<Self>;
}
