use inf26::record::{RECORD_LEN, SERIAL_LEN, records};
use inf26::serial::decode_record;
use proptest::prelude::*;

// Forward cumulative-sum transform over the first 14 bytes, with an
// arbitrary 2-byte trailer.
fn encode(plain: &[u8; SERIAL_LEN], trailer: [u8; 2]) -> [u8; RECORD_LEN] {
    let mut rec = [0u8; RECORD_LEN];
    let mut acc = 0u8;
    for (slot, &b) in rec.iter_mut().zip(plain.iter()) {
        acc = acc.wrapping_add(b);
        *slot = acc;
    }
    rec[14] = trailer[0];
    rec[15] = trailer[1];
    rec
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        plain in proptest::array::uniform14(any::<u8>()),
        trailer in proptest::array::uniform2(any::<u8>())
    ) {
        let rec = encode(&plain, trailer);
        prop_assert_eq!(decode_record(&rec), plain);
    }

    #[test]
    fn prop_trailer_bytes_never_influence_output(
        mut rec in proptest::array::uniform16(any::<u8>()),
        trailer in proptest::array::uniform2(any::<u8>())
    ) {
        let base = decode_record(&rec);
        rec[14] = trailer[0];
        rec[15] = trailer[1];
        prop_assert_eq!(decode_record(&rec), base);
    }

    #[test]
    fn prop_decode_output_length_is_fixed(rec in proptest::array::uniform16(any::<u8>())) {
        prop_assert_eq!(decode_record(&rec).len(), SERIAL_LEN);
    }

    #[test]
    fn prop_chunking_covers_input_in_order(
        data in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let recs: Vec<_> = records(&data).collect();
        prop_assert_eq!(recs.len(), data.len().div_ceil(RECORD_LEN));

        let flat: Vec<u8> = recs.iter().flatten().copied().collect();
        // Chunks reproduce the input exactly, then zero padding to the end.
        prop_assert_eq!(&flat[..data.len()], &data[..]);
        prop_assert!(flat[data.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_exact_multiple_has_no_padding(
        data in proptest::collection::vec(any::<u8>(), 0..64)
            .prop_map(|v| v.repeat(RECORD_LEN))
    ) {
        // `v.repeat(16)` always has length 16 * v.len().
        let recs: Vec<_> = records(&data).collect();
        prop_assert_eq!(recs.len() * RECORD_LEN, data.len());
        let flat: Vec<u8> = recs.iter().flatten().copied().collect();
        prop_assert_eq!(flat, data);
    }
}
