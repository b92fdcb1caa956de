//! XInput input report parsing.
//!
//! All functions are pure and allocation-free. Each instrument variant is a
//! fixed-layout view over the 20-byte gamepad report: the button mask and
//! axis bytes are the same wire positions for every variant, but what they
//! mean differs per instrument, so each variant gets its own parse function
//! and state struct.

use crate::ids::{buttons, offsets, REPORT_LEN};
use openjam_hid_common::bitfield::{read_u16_le, read_u8};

/// Common menu buttons shared by every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputMenuButtons {
    pub start: bool,
    pub back: bool,
    pub guide: bool,
}

fn parse_menu(mask: u16) -> XInputMenuButtons {
    XInputMenuButtons {
        start: mask & buttons::START != 0,
        back: mask & buttons::BACK != 0,
        guide: mask & buttons::GUIDE != 0,
    }
}

/// Parsed state from an XInput five-fret guitar report.
///
/// Flag-style solo hardware: one shared set of fret bits plus the solo flag
/// on the left-thumb-click bit. The pickup switch rides the left trigger
/// byte and emits 0xFF once the hardware considers the switch at rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputFiveFretState {
    pub green: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub orange: bool,
    pub solo_flag: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub menu: XInputMenuButtons,
    pub whammy: u8,
    pub tilt: u8,
    pub pickup_raw: u8,
}

/// Parse an XInput five-fret guitar report (20 bytes).
///
/// Returns `None` if `data` is shorter than the fixed report size.
pub fn parse_five_fret_report(data: &[u8]) -> Option<XInputFiveFretState> {
    if data.len() < REPORT_LEN {
        return None;
    }
    let mask = read_u16_le(data, 2);
    Some(XInputFiveFretState {
        green: mask & buttons::A != 0,
        red: mask & buttons::B != 0,
        yellow: mask & buttons::Y != 0,
        blue: mask & buttons::X != 0,
        orange: mask & buttons::LEFT_SHOULDER != 0,
        solo_flag: mask & buttons::LEFT_THUMB != 0,
        dpad_up: mask & buttons::DPAD_UP != 0,
        dpad_down: mask & buttons::DPAD_DOWN != 0,
        dpad_left: mask & buttons::DPAD_LEFT != 0,
        dpad_right: mask & buttons::DPAD_RIGHT != 0,
        menu: parse_menu(mask),
        whammy: read_u8(data, offsets::THUMB_RX + 1),
        tilt: read_u8(data, offsets::THUMB_RY + 1),
        pickup_raw: read_u8(data, offsets::LEFT_TRIGGER),
    })
}

/// Parsed state from the alternate five-fret guitar layout.
///
/// Same fret bits as the standard layout, but whammy moves to the right
/// stick Y high byte (rest sentinel 0x80) and tilt collapses to the
/// right-thumb-click boolean. No pickup switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputAltFiveFretState {
    pub green: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub orange: bool,
    pub solo_flag: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub menu: XInputMenuButtons,
    pub whammy: u8,
    pub tilt_active: bool,
}

/// Parse the alternate five-fret guitar report (20 bytes).
pub fn parse_alt_five_fret_report(data: &[u8]) -> Option<XInputAltFiveFretState> {
    if data.len() < REPORT_LEN {
        return None;
    }
    let mask = read_u16_le(data, 2);
    Some(XInputAltFiveFretState {
        green: mask & buttons::A != 0,
        red: mask & buttons::B != 0,
        yellow: mask & buttons::Y != 0,
        blue: mask & buttons::X != 0,
        orange: mask & buttons::LEFT_SHOULDER != 0,
        solo_flag: mask & buttons::LEFT_THUMB != 0,
        dpad_up: mask & buttons::DPAD_UP != 0,
        dpad_down: mask & buttons::DPAD_DOWN != 0,
        dpad_left: mask & buttons::DPAD_LEFT != 0,
        dpad_right: mask & buttons::DPAD_RIGHT != 0,
        menu: parse_menu(mask),
        whammy: read_u8(data, offsets::THUMB_RY + 1),
        tilt_active: mask & buttons::RIGHT_THUMB != 0,
    })
}

/// Parsed state from an XInput six-fret guitar report.
///
/// The strum bar is a signed axis: negative = strum-down, positive =
/// strum-up, zero = idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputSixFretState {
    pub black1: bool,
    pub black2: bool,
    pub black3: bool,
    pub white1: bool,
    pub white2: bool,
    pub white3: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub menu: XInputMenuButtons,
    pub strum_bar: i8,
    pub whammy: u8,
    pub tilt: u8,
}

/// Parse an XInput six-fret guitar report (20 bytes).
pub fn parse_six_fret_report(data: &[u8]) -> Option<XInputSixFretState> {
    if data.len() < REPORT_LEN {
        return None;
    }
    let mask = read_u16_le(data, 2);
    Some(XInputSixFretState {
        black1: mask & buttons::A != 0,
        black2: mask & buttons::B != 0,
        black3: mask & buttons::Y != 0,
        white1: mask & buttons::X != 0,
        white2: mask & buttons::LEFT_SHOULDER != 0,
        white3: mask & buttons::RIGHT_SHOULDER != 0,
        dpad_up: mask & buttons::DPAD_UP != 0,
        dpad_down: mask & buttons::DPAD_DOWN != 0,
        dpad_left: mask & buttons::DPAD_LEFT != 0,
        dpad_right: mask & buttons::DPAD_RIGHT != 0,
        menu: parse_menu(mask),
        strum_bar: read_u8(data, offsets::THUMB_LY + 1) as i8,
        whammy: read_u8(data, offsets::THUMB_RX + 1),
        tilt: read_u8(data, offsets::THUMB_RY + 1),
    })
}

/// Parsed state from an XInput four-lane drum kit report.
///
/// `pad_flag`/`cymbal_flag` are the disambiguation inputs: when both are set
/// in one sample, yellow/blue/green color bits are ambiguous and the d-pad
/// state decides (see the translator). Velocities are unsigned, 0 = no hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputFourLaneState {
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub green: bool,
    pub pad_flag: bool,
    pub cymbal_flag: bool,
    pub kick1: bool,
    pub kick2: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub menu: XInputMenuButtons,
    /// Velocities in red, yellow, blue, green order.
    pub velocities: [u8; 4],
}

/// Parse an XInput four-lane drum report (20 bytes).
pub fn parse_four_lane_report(data: &[u8]) -> Option<XInputFourLaneState> {
    if data.len() < REPORT_LEN {
        return None;
    }
    let mask = read_u16_le(data, 2);
    Some(XInputFourLaneState {
        red: mask & buttons::B != 0,
        yellow: mask & buttons::Y != 0,
        blue: mask & buttons::X != 0,
        green: mask & buttons::A != 0,
        pad_flag: mask & buttons::LEFT_SHOULDER != 0,
        cymbal_flag: mask & buttons::RIGHT_SHOULDER != 0,
        kick1: mask & buttons::LEFT_THUMB != 0,
        kick2: mask & buttons::RIGHT_THUMB != 0,
        dpad_up: mask & buttons::DPAD_UP != 0,
        dpad_down: mask & buttons::DPAD_DOWN != 0,
        dpad_left: mask & buttons::DPAD_LEFT != 0,
        dpad_right: mask & buttons::DPAD_RIGHT != 0,
        menu: parse_menu(mask),
        velocities: [
            read_u8(data, offsets::THUMB_LX),
            read_u8(data, offsets::THUMB_LX + 1),
            read_u8(data, offsets::THUMB_LY),
            read_u8(data, offsets::THUMB_LY + 1),
        ],
    })
}

/// Parsed state from an XInput turntable report.
///
/// Table button groups are 3-bit fields packed into stick bytes; platter
/// velocities are signed deltas. Face colors share physical switches with
/// the table buttons on some decks (suppression happens in the translator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XInputTurntableState {
    pub face_green: bool,
    pub face_red: bool,
    pub face_blue: bool,
    pub euphoria: bool,
    /// Left table green/red/blue in bits 0-2.
    pub left_table: u8,
    /// Right table green/red/blue in bits 0-2.
    pub right_table: u8,
    pub left_velocity: i8,
    pub right_velocity: i8,
    pub crossfader: u8,
    pub effects_dial: u8,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub menu: XInputMenuButtons,
}

/// Parse an XInput turntable report (20 bytes).
pub fn parse_turntable_report(data: &[u8]) -> Option<XInputTurntableState> {
    if data.len() < REPORT_LEN {
        return None;
    }
    let mask = read_u16_le(data, 2);
    Some(XInputTurntableState {
        face_green: mask & buttons::A != 0,
        face_red: mask & buttons::B != 0,
        face_blue: mask & buttons::X != 0,
        euphoria: mask & buttons::Y != 0,
        left_table: read_u8(data, offsets::THUMB_LX) & 0x07,
        right_table: read_u8(data, offsets::THUMB_LY) & 0x07,
        left_velocity: read_u8(data, offsets::THUMB_LX + 1) as i8,
        right_velocity: read_u8(data, offsets::THUMB_LY + 1) as i8,
        crossfader: read_u8(data, offsets::THUMB_RX + 1),
        effects_dial: read_u8(data, offsets::THUMB_RY + 1),
        dpad_up: mask & buttons::DPAD_UP != 0,
        dpad_down: mask & buttons::DPAD_DOWN != 0,
        dpad_left: mask & buttons::DPAD_LEFT != 0,
        dpad_right: mask & buttons::DPAD_RIGHT != 0,
        menu: parse_menu(mask),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_buttons(mask: u16) -> [u8; 20] {
        let mut data = [0u8; 20];
        data[2] = (mask & 0xFF) as u8;
        data[3] = (mask >> 8) as u8;
        data
    }

    #[test]
    fn test_five_fret_frets_and_solo_flag() -> Result<(), Box<dyn std::error::Error>> {
        let data = report_with_buttons(buttons::A | buttons::B | buttons::LEFT_THUMB);
        let state = parse_five_fret_report(&data).ok_or("parse failed")?;
        assert!(state.green && state.red && state.solo_flag);
        assert!(!state.yellow && !state.blue && !state.orange);
        Ok(())
    }

    #[test]
    fn test_five_fret_axes() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = report_with_buttons(0);
        data[4] = 0xFF; // pickup at rest
        data[11] = 0xC0; // whammy
        data[13] = 0x20; // tilt
        let state = parse_five_fret_report(&data).ok_or("parse failed")?;
        assert_eq!(state.pickup_raw, 0xFF);
        assert_eq!(state.whammy, 0xC0);
        assert_eq!(state.tilt, 0x20);
        Ok(())
    }

    #[test]
    fn test_five_fret_rejects_short_report() {
        assert!(parse_five_fret_report(&[0u8; 19]).is_none());
    }

    #[test]
    fn test_alt_five_fret_tilt_button_and_whammy() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = report_with_buttons(buttons::RIGHT_THUMB);
        data[13] = 0x90;
        let state = parse_alt_five_fret_report(&data).ok_or("parse failed")?;
        assert!(state.tilt_active);
        assert_eq!(state.whammy, 0x90);
        Ok(())
    }

    #[test]
    fn test_six_fret_strum_bar_sign() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = report_with_buttons(buttons::A | buttons::RIGHT_SHOULDER);
        data[9] = 0xCE; // -50
        let state = parse_six_fret_report(&data).ok_or("parse failed")?;
        assert!(state.black1 && state.white3);
        assert_eq!(state.strum_bar, -50);

        data[9] = 50;
        let state = parse_six_fret_report(&data).ok_or("parse failed")?;
        assert_eq!(state.strum_bar, 50);
        Ok(())
    }

    #[test]
    fn test_four_lane_flags_and_velocities() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = report_with_buttons(
            buttons::Y | buttons::LEFT_SHOULDER | buttons::RIGHT_SHOULDER | buttons::DPAD_UP,
        );
        data[7] = 0x64; // yellow velocity
        let state = parse_four_lane_report(&data).ok_or("parse failed")?;
        assert!(state.yellow && state.pad_flag && state.cymbal_flag && state.dpad_up);
        assert_eq!(state.velocities, [0, 0x64, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_four_lane_kick_bits() -> Result<(), Box<dyn std::error::Error>> {
        let data = report_with_buttons(buttons::LEFT_THUMB | buttons::RIGHT_THUMB);
        let state = parse_four_lane_report(&data).ok_or("parse failed")?;
        assert!(state.kick1 && state.kick2);
        Ok(())
    }

    /// Kill mutant: `& 0x07` → `| 0x07` in table bit extraction.
    #[test]
    fn test_turntable_table_bits_masked() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = report_with_buttons(buttons::Y);
        data[6] = 0xF9; // upper bits set, table bits = 0b001
        data[8] = 0x00;
        data[7] = 0xA6; // left velocity = -90
        let state = parse_turntable_report(&data).ok_or("parse failed")?;
        assert!(state.euphoria);
        assert_eq!(state.left_table, 0x01, "upper bits must be masked off");
        assert_eq!(state.right_table, 0x00);
        assert_eq!(state.left_velocity, -90);
        Ok(())
    }
}
