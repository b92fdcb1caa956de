use proptest::prelude::*;

use hid_xinput_protocol::{
    buttons, parse_alt_five_fret_report, parse_five_fret_report, parse_four_lane_report,
    parse_six_fret_report, parse_turntable_report, REPORT_LEN,
};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Every parser accepts exactly the buffers of at least the fixed report
    /// length, and never panics on anything shorter or longer.
    #[test]
    fn prop_length_gate_is_uniform(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let long_enough = data.len() >= REPORT_LEN;
        prop_assert_eq!(parse_five_fret_report(&data).is_some(), long_enough);
        prop_assert_eq!(parse_alt_five_fret_report(&data).is_some(), long_enough);
        prop_assert_eq!(parse_six_fret_report(&data).is_some(), long_enough);
        prop_assert_eq!(parse_four_lane_report(&data).is_some(), long_enough);
        prop_assert_eq!(parse_turntable_report(&data).is_some(), long_enough);
    }

    /// Fret and flag booleans depend only on the button mask at bytes 2-3.
    #[test]
    fn prop_five_fret_buttons_only_from_mask(
        mask in any::<u16>(),
        noise in proptest::collection::vec(any::<u8>(), 16),
    ) {
        let mut data = [0u8; 20];
        data[2] = (mask & 0xFF) as u8;
        data[3] = (mask >> 8) as u8;
        data[4..20].copy_from_slice(&noise);
        let state = parse_five_fret_report(&data).unwrap();
        prop_assert_eq!(state.green, mask & buttons::A != 0);
        prop_assert_eq!(state.red, mask & buttons::B != 0);
        prop_assert_eq!(state.yellow, mask & buttons::Y != 0);
        prop_assert_eq!(state.blue, mask & buttons::X != 0);
        prop_assert_eq!(state.orange, mask & buttons::LEFT_SHOULDER != 0);
        prop_assert_eq!(state.solo_flag, mask & buttons::LEFT_THUMB != 0);
    }

    /// The six-fret strum bar is the signed reinterpretation of byte 9.
    #[test]
    fn prop_six_fret_strum_is_signed_byte(data in proptest::collection::vec(any::<u8>(), 20)) {
        let state = parse_six_fret_report(&data).unwrap();
        prop_assert_eq!(state.strum_bar, data[9] as i8);
    }

    /// Turntable table groups never leak bits above the 3-bit field.
    #[test]
    fn prop_turntable_table_bits_bounded(data in proptest::collection::vec(any::<u8>(), 20)) {
        let state = parse_turntable_report(&data).unwrap();
        prop_assert!(state.left_table <= 0x07);
        prop_assert!(state.right_table <= 0x07);
    }

    /// Drum velocities come straight from bytes 6-9 in red, yellow, blue,
    /// green order.
    #[test]
    fn prop_four_lane_velocities_positional(data in proptest::collection::vec(any::<u8>(), 20)) {
        let state = parse_four_lane_report(&data).unwrap();
        prop_assert_eq!(state.velocities, [data[6], data[7], data[8], data[9]]);
    }
}
