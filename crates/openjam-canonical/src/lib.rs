//! Canonical controller state layouts.
//!
//! Every translator in the workspace converges on exactly one of the layouts
//! defined here per instrument class. The byte and bit offsets are the
//! contract downstream control bindings read against: they never vary with
//! the source hardware, and changing them is a breaking change for every
//! consumer.
//!
//! Layout format tags live in a separate number space from raw report
//! format tags (canonical tags have the high bit set) so a buffer can never
//! be mistaken for the wrong side of the translation.

pub mod fields;
pub mod flags;
pub mod layouts;

pub use fields::{slot_of, CanonicalField, FieldSlot};
pub use layouts::{
    FiveFretGuitarState, FourLaneDrumsState, PickupSwitchState, ProGuitarState,
    SixFretGuitarState, TurntableState,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one canonical layout: its tag byte and fixed body size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalFormat {
    pub tag: u8,
    pub size: usize,
}

/// Number of strings a pro instrument reports.
pub const PRO_STRING_COUNT: usize = 6;

/// Number of pickup-switch notches.
pub const PICKUP_NOTCH_COUNT: u8 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Buffer too small for layout 0x{tag:02X}: need {needed} bytes, got {actual}")]
    BufferTooSmall { tag: u8, needed: usize, actual: usize },
}

pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tags_are_distinct() {
        let tags = [
            FiveFretGuitarState::FORMAT.tag,
            SixFretGuitarState::FORMAT.tag,
            FourLaneDrumsState::FORMAT.tag,
            ProGuitarState::FORMAT.tag,
            TurntableState::FORMAT.tag,
            PickupSwitchState::FORMAT.tag,
        ];
        for (i, a) in tags.iter().enumerate() {
            assert!(a & 0x80 != 0, "canonical tags carry the high bit");
            for b in tags.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
