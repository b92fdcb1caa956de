//! PS3/Wii instrument model identification and protocol constants.

use crate::ids::{ps3_product_ids, six_fret_product_ids, wii_product_ids, BODY_LEN};
use openjam_hid_common::RawFormat;

/// Raw format for the bare 27-byte body (PS3 enumeration).
pub const PS3_FORMAT: RawFormat = RawFormat::new(0x02, BODY_LEN);

/// Raw format for report-ID-prefixed reports (Wii enumeration).
pub const PS3_FORMAT_WITH_ID: RawFormat = RawFormat::new(0x03, BODY_LEN + 1);

/// Format for a given report-ID presence, as probed at connect time.
pub const fn ps3_format(has_report_id: bool) -> RawFormat {
    if has_report_id {
        PS3_FORMAT_WITH_ID
    } else {
        PS3_FORMAT
    }
}

/// Axis rest sentinels emitted by PS3/Wii instrument hardware.
pub mod sentinels {
    /// Five-fret whammy "at rest" byte, emitted after a period of no
    /// movement. The power-up default is 0x00, not this value.
    pub const WHAMMY_REST: u8 = 0x7F;
    /// Pickup switch "at rest" byte.
    pub const PICKUP_REST: u8 = 0xFF;
}

/// Known PS3/Wii rhythm instrument models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ps3Model {
    FiveFretGuitar,
    FourLaneDrums,
    /// Pre-cymbal kit: never asserts the pad/cymbal flag bits.
    LegacyFourLaneDrums,
    SixFretGuitar,
    ProGuitar,
    Turntable,
}

impl Ps3Model {
    /// Identify a PS3-enumerated product (VID 0x12BA).
    pub fn from_ps3_product(product_id: u16) -> Option<Self> {
        match product_id {
            ps3_product_ids::FIVE_FRET_GUITAR | ps3_product_ids::FIVE_FRET_GUITAR_V2 => {
                Some(Self::FiveFretGuitar)
            }
            ps3_product_ids::LEGACY_DRUMS => Some(Self::LegacyFourLaneDrums),
            ps3_product_ids::FOUR_LANE_DRUMS => Some(Self::FourLaneDrums),
            ps3_product_ids::PRO_GUITAR | ps3_product_ids::PRO_GUITAR_ALT => {
                Some(Self::ProGuitar)
            }
            ps3_product_ids::TURNTABLE => Some(Self::Turntable),
            _ => None,
        }
    }

    /// Identify a Wii-enumerated product (VID 0x1BAD).
    pub fn from_wii_product(product_id: u16) -> Option<Self> {
        match product_id {
            wii_product_ids::FIVE_FRET_GUITAR => Some(Self::FiveFretGuitar),
            wii_product_ids::FOUR_LANE_DRUMS => Some(Self::FourLaneDrums),
            wii_product_ids::TURNTABLE => Some(Self::Turntable),
            _ => None,
        }
    }

    /// Identify a six-fret dongle (VID 0x1430).
    pub fn from_dongle_product(product_id: u16) -> Option<Self> {
        match product_id {
            six_fret_product_ids::PS3_WIIU_DONGLE => Some(Self::SixFretGuitar),
            _ => None,
        }
    }
}
