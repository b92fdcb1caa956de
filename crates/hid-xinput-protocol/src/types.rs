//! XInput instrument model identification.

use crate::ids::{subtypes, REPORT_LEN};
use openjam_hid_common::RawFormat;

/// Raw format tag for the XInput 20-byte gamepad report.
pub const XINPUT_FORMAT: RawFormat = RawFormat::new(0x01, REPORT_LEN);

/// Axis rest sentinels emitted by XInput instrument hardware.
pub mod sentinels {
    /// Five-fret pickup switch "at rest" byte (left trigger).
    pub const PICKUP_REST: u8 = 0xFF;
    /// Alternate-layout whammy "at rest" byte.
    pub const ALT_WHAMMY_REST: u8 = 0x80;
}

/// Known XInput rhythm instrument models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XInputModel {
    FiveFretGuitar,
    AltFiveFretGuitar,
    SixFretGuitar,
    FourLaneDrums,
    Turntable,
}

impl XInputModel {
    /// Map a capability subtype byte to a model, `None` for non-instruments.
    pub fn from_subtype(subtype: u8) -> Option<Self> {
        match subtype {
            subtypes::GUITAR | subtypes::GUITAR_BASS => Some(Self::FiveFretGuitar),
            subtypes::GUITAR_ALTERNATE => Some(Self::AltFiveFretGuitar),
            subtypes::GUITAR_LIVE => Some(Self::SixFretGuitar),
            subtypes::DRUM_KIT => Some(Self::FourLaneDrums),
            subtypes::TURNTABLE => Some(Self::Turntable),
            _ => None,
        }
    }
}
