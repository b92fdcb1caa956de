//! XInput rhythm instrument protocol: report layouts and decoders.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! It provides pure parse functions over the fixed 20-byte XInput gamepad
//! report, one per instrument variant, that can be tested without hardware
//! or OS-level input plumbing.
//!
//! The gamepad wire layout (button mask at bytes 2-3, trigger bytes at 4-5,
//! four i16 stick axes at 6-13) is shared by every variant; what differs per
//! instrument is which mask bits and axis bytes carry instrument data.
//! Instruments identify themselves through the XInput capability subtype
//! byte, not a USB VID/PID pair.

pub mod ids;
pub mod input;
pub mod types;

pub use ids::{buttons, offsets, subtypes, REPORT_LEN};
pub use input::{
    parse_alt_five_fret_report, parse_five_fret_report, parse_four_lane_report,
    parse_six_fret_report, parse_turntable_report, XInputAltFiveFretState, XInputFiveFretState,
    XInputFourLaneState, XInputMenuButtons, XInputSixFretState, XInputTurntableState,
};
pub use types::{sentinels, XInputModel, XINPUT_FORMAT};
