//! PS4 instrument model identification and protocol constants.

use crate::ids::{product_ids, six_fret_product_ids, REPORT_LEN};
use openjam_hid_common::RawFormat;

/// Raw format for the 64-byte PS4 vendor report (report ID included).
pub const PS4_FORMAT: RawFormat = RawFormat::new(0x04, REPORT_LEN);

/// Axis rest sentinels emitted by PS4 instrument hardware.
pub mod sentinels {
    /// Pickup switch "at rest" byte.
    pub const PICKUP_REST: u8 = 0xFF;
}

/// Known PS4 rhythm instrument models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ps4Model {
    FiveFretGuitar,
    FourLaneDrums,
    SixFretGuitar,
}

impl Ps4Model {
    /// Identify a licensed PS4 instrument (VID 0x0E6F).
    pub fn from_product(product_id: u16) -> Option<Self> {
        match product_id {
            product_ids::FIVE_FRET_GUITAR => Some(Self::FiveFretGuitar),
            product_ids::FOUR_LANE_DRUMS => Some(Self::FourLaneDrums),
            _ => None,
        }
    }

    /// Identify a six-fret dongle (VID 0x1430).
    pub fn from_dongle_product(product_id: u16) -> Option<Self> {
        match product_id {
            six_fret_product_ids::PS4_DONGLE => Some(Self::SixFretGuitar),
            _ => None,
        }
    }
}
