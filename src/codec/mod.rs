//! Record Codec
//!
//! Encoding and decoding of `Server` records for storage.
//!
//! ## Value Format (V1)
//! ```text
//! ┌────────────┬────────────┬─────────────────────────────┐
//! │Version (1) │ CRC32 (4)  │   Payload (bincode Server)  │
//! └────────────┴────────────┴─────────────────────────────┘
//! ```
//!
//! - Version byte lets a reader reject values written by an unknown format
//! - CRC32 (big-endian) covers the payload only
//! - Payload is the bincode serialization of the full record, id included

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{InventoryError, Result};
use crate::model::Server;

/// Current value format version
pub const FORMAT_VERSION: u8 = 1;

/// Header size: 1 byte version + 4 bytes checksum
pub const HEADER_SIZE: usize = 5;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record to its stored byte form
pub fn encode(server: &Server) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(server).map_err(|e| InventoryError::Encoding(e.to_string()))?;

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    buf.put_u8(FORMAT_VERSION);
    buf.put_u32(crc32fast::hash(&payload));
    buf.put_slice(&payload);

    Ok(buf.to_vec())
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a single stored value
pub fn decode(bytes: &[u8]) -> Result<Server> {
    if bytes.len() < HEADER_SIZE {
        return Err(InventoryError::CorruptRecord(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let mut header = &bytes[..HEADER_SIZE];
    let version = header.get_u8();
    let expected_crc = header.get_u32();

    if version != FORMAT_VERSION {
        return Err(InventoryError::CorruptRecord(format!(
            "Unknown format version: 0x{:02x}",
            version
        )));
    }

    let payload = &bytes[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(InventoryError::CorruptRecord(format!(
            "Checksum mismatch: expected 0x{:08x}, got 0x{:08x}",
            expected_crc, actual_crc
        )));
    }

    bincode::deserialize(payload).map_err(|e| InventoryError::CorruptRecord(e.to_string()))
}

/// Decode a cursor of stored values, in cursor order
///
/// Stops at the first cursor error or corrupt value.
pub fn decode_all<I, B>(values: I) -> Result<Vec<Server>>
where
    I: IntoIterator<Item = Result<B>>,
    B: AsRef<[u8]>,
{
    values
        .into_iter()
        .map(|value| value.and_then(|bytes| decode(bytes.as_ref())))
        .collect()
}
