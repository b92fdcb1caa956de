//! PS3/Wii HID input report parsing.
//!
//! All functions are pure and allocation-free. Every instrument shares the
//! same 27-byte report body; Wii dongles prepend report ID 0x00. Parse
//! functions take `has_report_id` so one decoder serves both enumerations —
//! the presence flag is probed once at connect time, never per event.

use crate::ids::{buttons0, buttons1, offsets, BODY_LEN, REPORT_ID};
use openjam_hid_common::bitfield::{read_i8, read_u8, test_bit};
use openjam_hid_common::hat::{decode_hat, HatDpad};

/// Menu buttons shared by every PS3/Wii instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3MenuButtons {
    pub start: bool,
    pub select: bool,
    pub system: bool,
}

/// Strip the optional report-ID byte and validate the body length.
fn body(data: &[u8], has_report_id: bool) -> Option<&[u8]> {
    if has_report_id {
        if data.len() < BODY_LEN + 1 || data[0] != REPORT_ID {
            return None;
        }
        Some(&data[1..])
    } else {
        if data.len() < BODY_LEN {
            return None;
        }
        Some(data)
    }
}

fn parse_menu(body: &[u8]) -> Ps3MenuButtons {
    Ps3MenuButtons {
        start: test_bit(body, 1, buttons1::START),
        select: test_bit(body, 1, buttons1::SELECT),
        system: test_bit(body, 1, buttons1::SYSTEM),
    }
}

fn parse_dpad(body: &[u8]) -> HatDpad {
    decode_hat(read_u8(body, offsets::HAT) & 0x0F)
}

/// Parsed state from a PS3/Wii five-fret guitar report.
///
/// Flag-style solo hardware: one shared set of fret bits; `solo_flag` says
/// whether they currently mean solo frets. The whammy emits 0x7F after a
/// period of no movement and the pickup switch emits 0xFF at rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3FiveFretState {
    pub green: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub orange: bool,
    pub solo_flag: bool,
    pub dpad: HatDpad,
    pub menu: Ps3MenuButtons,
    pub whammy: u8,
    pub tilt: u8,
    pub pickup_raw: u8,
}

/// Parse a PS3/Wii five-fret guitar report.
///
/// Returns `None` if the buffer is too short or the report ID (when
/// expected) does not match.
pub fn parse_five_fret_report(data: &[u8], has_report_id: bool) -> Option<Ps3FiveFretState> {
    let body = body(data, has_report_id)?;
    Some(Ps3FiveFretState {
        green: test_bit(body, 0, buttons0::CROSS),
        red: test_bit(body, 0, buttons0::CIRCLE),
        yellow: test_bit(body, 0, buttons0::TRIANGLE),
        blue: test_bit(body, 0, buttons0::SQUARE),
        orange: test_bit(body, 0, buttons0::L1),
        solo_flag: test_bit(body, 1, buttons1::SOLO_FLAG),
        dpad: parse_dpad(body),
        menu: parse_menu(body),
        whammy: read_u8(body, offsets::WHAMMY),
        tilt: read_u8(body, offsets::TILT),
        pickup_raw: read_u8(body, offsets::PICKUP),
    })
}

/// Parsed state from a PS3/Wii four-lane drum report.
///
/// Flag-era kits assert `pad_flag`/`cymbal_flag`; legacy kits never do, and
/// the translator treats every hit on such kits as a pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3FourLaneState {
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub green: bool,
    pub kick1: bool,
    pub kick2: bool,
    pub pad_flag: bool,
    pub cymbal_flag: bool,
    pub dpad: HatDpad,
    pub menu: Ps3MenuButtons,
    /// Velocities in red, yellow, blue, green order (wire order differs).
    pub velocities: [u8; 4],
}

/// Parse a PS3/Wii four-lane drum report.
pub fn parse_four_lane_report(data: &[u8], has_report_id: bool) -> Option<Ps3FourLaneState> {
    let body = body(data, has_report_id)?;
    // Wire velocity order is yellow, red, green, blue.
    let v = offsets::DRUM_VELOCITIES;
    Some(Ps3FourLaneState {
        red: test_bit(body, 0, buttons0::CIRCLE),
        yellow: test_bit(body, 0, buttons0::TRIANGLE),
        blue: test_bit(body, 0, buttons0::SQUARE),
        green: test_bit(body, 0, buttons0::CROSS),
        kick1: test_bit(body, 0, buttons0::R1),
        kick2: test_bit(body, 0, buttons0::L2),
        pad_flag: test_bit(body, 1, buttons1::L3),
        cymbal_flag: test_bit(body, 1, buttons1::R3),
        dpad: parse_dpad(body),
        menu: parse_menu(body),
        velocities: [
            read_u8(body, v + 1),
            read_u8(body, v),
            read_u8(body, v + 3),
            read_u8(body, v + 2),
        ],
    })
}

/// Parsed state from a PS3/Wii U six-fret guitar report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3SixFretState {
    pub black1: bool,
    pub black2: bool,
    pub black3: bool,
    pub white1: bool,
    pub white2: bool,
    pub white3: bool,
    pub dpad: HatDpad,
    pub menu: Ps3MenuButtons,
    /// Strum bar recentered from the 0x80-idle wire byte: negative =
    /// strum-down, positive = strum-up, 0 = idle.
    pub strum_bar: i8,
    pub whammy: u8,
    pub tilt: u8,
}

/// Parse a PS3/Wii U six-fret guitar report.
pub fn parse_six_fret_report(data: &[u8], has_report_id: bool) -> Option<Ps3SixFretState> {
    let body = body(data, has_report_id)?;
    let raw_strum = read_u8(body, offsets::STRUM_BAR);
    Some(Ps3SixFretState {
        black1: test_bit(body, 0, buttons0::CROSS),
        black2: test_bit(body, 0, buttons0::CIRCLE),
        black3: test_bit(body, 0, buttons0::TRIANGLE),
        white1: test_bit(body, 0, buttons0::SQUARE),
        white2: test_bit(body, 0, buttons0::L1),
        white3: test_bit(body, 0, buttons0::R1),
        dpad: parse_dpad(body),
        menu: parse_menu(body),
        strum_bar: raw_strum.wrapping_sub(0x80) as i8,
        whammy: read_u8(body, offsets::WHAMMY),
        tilt: read_u8(body, offsets::TILT),
    })
}

/// Parsed state from a PS3 pro guitar report.
///
/// Strings report a velocity byte, not a press bit; strike detection is
/// edge-based and lives in the translator. Velocities are 7-bit on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3ProGuitarState {
    /// Per-string velocities, low string first (0-127).
    pub string_velocities: [u8; 6],
    /// Per-string held fret numbers, low string first.
    pub string_frets: [u8; 6],
    pub dpad: HatDpad,
    pub menu: Ps3MenuButtons,
    pub pickup_raw: u8,
}

/// Parse a PS3 pro guitar report.
pub fn parse_pro_guitar_report(data: &[u8], has_report_id: bool) -> Option<Ps3ProGuitarState> {
    let body = body(data, has_report_id)?;
    let mut string_velocities = [0u8; 6];
    let mut string_frets = [0u8; 6];
    for s in 0..6 {
        string_velocities[s] = read_u8(body, offsets::STRING_VELOCITIES + s) & 0x7F;
        string_frets[s] = read_u8(body, offsets::STRING_FRETS + s);
    }
    Some(Ps3ProGuitarState {
        string_velocities,
        string_frets,
        dpad: parse_dpad(body),
        menu: parse_menu(body),
        pickup_raw: read_u8(body, offsets::PICKUP),
    })
}

/// Parsed state from a PS3/Wii turntable report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps3TurntableState {
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
    pub dpad: HatDpad,
    pub menu: Ps3MenuButtons,
}

/// Parse a PS3/Wii turntable report.
pub fn parse_turntable_report(data: &[u8], has_report_id: bool) -> Option<Ps3TurntableState> {
    let body = body(data, has_report_id)?;
    Some(Ps3TurntableState {
        face_green: test_bit(body, 0, buttons0::CROSS),
        face_red: test_bit(body, 0, buttons0::CIRCLE),
        face_blue: test_bit(body, 0, buttons0::SQUARE),
        euphoria: test_bit(body, 0, buttons0::L1),
        left_table: read_u8(body, offsets::LEFT_TABLE) & 0x07,
        right_table: read_u8(body, offsets::RIGHT_TABLE) & 0x07,
        left_velocity: read_i8(body, offsets::LEFT_VELOCITY),
        right_velocity: read_i8(body, offsets::RIGHT_VELOCITY),
        crossfader: read_u8(body, offsets::CROSSFADER),
        effects_dial: read_u8(body, offsets::EFFECTS_DIAL),
        dpad: parse_dpad(body),
        menu: parse_menu(body),
    })
}
