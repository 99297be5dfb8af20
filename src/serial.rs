// Per-record serial decoding.
//
// Stored bytes are running sums (mod 256) of the plaintext serial bytes.
// Decoding takes the first difference of each byte with its predecessor
// (a virtual zero before byte 0) and keeps the first SERIAL_LEN values.

use std::str::Utf8Error;

use crate::record::{RECORD_LEN, SERIAL_LEN};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error produced when rendering a decoded record as text.
#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    /// The decoded bytes are not valid UTF-8.
    #[error("invalid UTF-8 in decoded serial: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

// ---------------------------------------------------------------------------
// Delta decoding
// ---------------------------------------------------------------------------

/// Invert the cumulative-sum transform of one record.
///
/// Output byte `i` is `record[i].wrapping_sub(record[i - 1])`, with the
/// predecessor of byte 0 defined as zero. Only the first [`SERIAL_LEN`]
/// differences are kept; record bytes 14 and 15 never influence the
/// result. Pure and total: any 16-byte input decodes without error.
pub fn decode_record(record: &[u8; RECORD_LEN]) -> [u8; SERIAL_LEN] {
    let mut out = [0u8; SERIAL_LEN];
    let mut prev = 0u8;
    for (slot, &b) in out.iter_mut().zip(record.iter()) {
        *slot = b.wrapping_sub(prev);
        prev = b;
    }
    out
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Interpret a decoded record as a UTF-8 serial string.
pub fn render(serial: &[u8; SERIAL_LEN]) -> Result<String, SerialError> {
    Ok(std::str::from_utf8(serial)?.to_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
