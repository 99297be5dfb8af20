// Fixed-record chunking of the raw Inf26.bin contents.
//
// The file carries no header, length field, or checksum: it is a bare
// concatenation of 16-byte records. Chunking is lazy and left-to-right;
// a short final block is zero-filled to full length so every record the
// iterator yields has exactly RECORD_LEN bytes.

/// Size of one encoded record in the input file.
pub const RECORD_LEN: usize = 16;

/// Length of the decoded serial number carried by each record.
///
/// Record bytes at indices 14 and 15 are not part of the serial and are
/// discarded by the decoder.
pub const SERIAL_LEN: usize = 14;

/// Lazily chunk `data` into non-overlapping [`RECORD_LEN`]-byte records.
///
/// Empty input yields an empty iterator. If the input length is not a
/// multiple of [`RECORD_LEN`], the final record is zero-filled; the source
/// file is expected to always be an exact multiple, so a padded record
/// indicates a truncated dump.
pub fn records(data: &[u8]) -> Records<'_> {
    Records { data }
}

/// Iterator over fixed-size records of a byte slice. See [`records`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
}

impl Records<'_> {
    /// Whether the iterator will have to zero-fill its final record.
    pub fn has_short_tail(&self) -> bool {
        !self.data.len().is_multiple_of(RECORD_LEN)
    }
}

impl Iterator for Records<'_> {
    type Item = [u8; RECORD_LEN];

    fn next(&mut self) -> Option<[u8; RECORD_LEN]> {
        if self.data.is_empty() {
            return None;
        }
        let mut rec = [0u8; RECORD_LEN];
        let take = self.data.len().min(RECORD_LEN);
        rec[..take].copy_from_slice(&self.data[..take]);
        self.data = &self.data[take..];
        Some(rec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.data.len().div_ceil(RECORD_LEN);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Records<'_> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_yields_full_records() {
        let data: Vec<u8> = (0..48).collect();
        let recs: Vec<_> = records(&data).collect();
        assert_eq!(recs.len(), 3);
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(&rec[..], &data[i * RECORD_LEN..(i + 1) * RECORD_LEN]);
        }
    }

    #[test]
    fn short_tail_is_zero_filled() {
        let data = [0xAAu8; 20];
        let recs: Vec<_> = records(&data).collect();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], [0xAA; 16]);
        assert_eq!(&recs[1][..4], &[0xAA; 4]);
        assert_eq!(&recs[1][4..], &[0u8; 12]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(records(&[]).count(), 0);
    }

    #[test]
    fn size_hint_is_exact() {
        assert_eq!(records(&[0u8; 32]).len(), 2);
        assert_eq!(records(&[0u8; 33]).len(), 3);
        assert!(!records(&[0u8; 32]).has_short_tail());
        assert!(records(&[0u8; 33]).has_short_tail());
    }
}
