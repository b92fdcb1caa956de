use proptest::prelude::*;

use openjam_hid_common::{
    read_i16_le, read_i8, read_u16_le, read_u8, test_bit, HidCommonError, ReportView,
};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Reads past the buffer end always come back zero, never panic.
    #[test]
    fn prop_out_of_range_reads_are_zero(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        offset in 0usize..256,
    ) {
        if offset >= data.len() {
            prop_assert_eq!(read_u8(&data, offset), 0);
            prop_assert_eq!(read_i8(&data, offset), 0);
            prop_assert!(!test_bit(&data, offset, 0xFF));
        }
        if offset + 1 >= data.len() {
            // At most one byte in range; the high byte reads as zero.
            prop_assert!(read_u16_le(&data, offset) <= 0xFF);
        }
    }

    /// In-range reads agree with direct indexing.
    #[test]
    fn prop_in_range_reads_match_indexing(
        data in proptest::collection::vec(any::<u8>(), 2..64),
        offset in 0usize..62,
    ) {
        prop_assume!(offset + 1 < data.len());
        prop_assert_eq!(read_u8(&data, offset), data[offset]);
        prop_assert_eq!(
            read_u16_le(&data, offset),
            u16::from_le_bytes([data[offset], data[offset + 1]])
        );
        prop_assert_eq!(
            read_i16_le(&data, offset),
            i16::from_le_bytes([data[offset], data[offset + 1]])
        );
    }

    /// `test_bit` is exactly "any masked bit set".
    #[test]
    fn prop_test_bit_matches_mask(byte in any::<u8>(), mask in any::<u8>()) {
        let buf = [byte];
        prop_assert_eq!(test_bit(&buf, 0, mask), byte & mask != 0);
    }

    /// View construction accepts exactly the buffers long enough for the
    /// declared length.
    #[test]
    fn prop_view_length_gate(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        declared in 0usize..64,
    ) {
        match ReportView::new(&data, declared) {
            Ok(view) => {
                prop_assert!(data.len() >= declared);
                prop_assert_eq!(view.len(), data.len());
            }
            Err(HidCommonError::ReportTooShort { needed, actual }) => {
                prop_assert_eq!(needed, declared);
                prop_assert_eq!(actual, data.len());
                prop_assert!(actual < needed);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
