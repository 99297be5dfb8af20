//! Inf26: decoder for the Tech-Air `Inf26.bin` serial-number store.
//!
//! The file is a sequence of fixed 16-byte records. Each record holds a
//! 14-character serial number under a cumulative-sum byte transform: the
//! stored bytes are the running sums (mod 256) of the plaintext bytes.
//! Decoding takes first differences and keeps the first 14 values; record
//! bytes 14 and 15 are discarded (trailer of unknown meaning, preserved
//! as-is by the original tool).
//!
//! The crate provides:
//! - Fixed-record chunking (`record`)
//! - Per-record delta decoding and UTF-8 rendering (`serial`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use inf26::record::RECORD_LEN;
//! use inf26::serial::{decode_record, render};
//!
//! // Forward transform: running sums of "ABCDEFGHIJKLMN", 2 trailer bytes.
//! let mut rec = [0u8; RECORD_LEN];
//! let mut acc = 0u8;
//! for (slot, b) in rec.iter_mut().zip(b"ABCDEFGHIJKLMN") {
//!     acc = acc.wrapping_add(*b);
//!     *slot = acc;
//! }
//!
//! let serial = render(&decode_record(&rec)).unwrap();
//! assert_eq!(serial, "ABCDEFGHIJKLMN");
//! ```

pub mod io;
pub mod record;
pub mod serial;

#[cfg(feature = "cli")]
pub mod cli;
