// File-level helpers for dumping an Inf26.bin store.
//
// `decode_file()` reads the whole file into memory in one scoped read (the
// handle is closed before decoding starts), then decodes every record in
// input order. Any failure aborts the whole dump; there is no per-record
// recovery.

use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::record::{self, RECORD_LEN};
use crate::serial::{self, SerialError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for a whole-file dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// I/O error (file open, read).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A record decoded to bytes that are not valid text.
    #[error("record {index}: {source}")]
    Record {
        /// Zero-based index of the offending record.
        index: usize,
        source: SerialError,
    },
}

// ---------------------------------------------------------------------------
// decode_bytes / decode_file
// ---------------------------------------------------------------------------

/// Decode every record of an in-memory Inf26.bin image, in input order.
pub fn decode_bytes(content: &[u8]) -> Result<Vec<String>, DumpError> {
    let recs = record::records(content);
    if recs.has_short_tail() {
        warn!(
            "input length {} is not a multiple of {RECORD_LEN}, zero-filling final record",
            content.len()
        );
    }

    let serials = recs
        .enumerate()
        .map(|(index, rec)| {
            let decoded = serial::decode_record(&rec);
            serial::render(&decoded).map_err(|source| DumpError::Record { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "decoded {} records from {} input bytes",
        serials.len(),
        content.len()
    );
    Ok(serials)
}

/// Read an Inf26.bin store from disk and decode all serials it contains.
pub fn decode_file(path: &Path) -> Result<Vec<String>, DumpError> {
    let content = std::fs::read(path)?;
    decode_bytes(&content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
