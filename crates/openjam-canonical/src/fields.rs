//! Named canonical fields and their byte/bit locations.
//!
//! The host's binding layer maps logical controls to canonical fields by
//! name; [`slot_of`] answers where a field lives inside a given layout. The
//! same enum is what translators accept on their single-field fast path.

use crate::layouts::{
    FiveFretGuitarState, FourLaneDrumsState, PickupSwitchState, ProGuitarState,
    SixFretGuitarState, TurntableState,
};
use crate::{flags, CanonicalFormat, PRO_STRING_COUNT};
use serde::{Deserialize, Serialize};

/// Every named field across all canonical layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Frets,
    SoloFrets,
    Dpad,
    MenuButtons,
    Whammy,
    Tilt,
    PickupNotch,
    Strum,
    Pads,
    Cymbals,
    Kick,
    HitVelocity,
    /// Fret number held on one pro string (0-based).
    StringFret(u8),
    /// Strike velocity of one pro string (0-based).
    StringVelocity(u8),
    StrummedStrings,
    LeftTable,
    RightTable,
    FaceButtons,
    DeckNav,
    LeftPlatterVelocity,
    RightPlatterVelocity,
    Crossfader,
    EffectsDial,
}

/// Location of a field inside a canonical buffer: a byte offset and, for
/// flag fields, the mask covering the field's bits within that byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSlot {
    pub byte: usize,
    /// `None` means the field owns the whole byte.
    pub mask: Option<u8>,
}

impl FieldSlot {
    const fn byte(byte: usize) -> Self {
        Self { byte, mask: None }
    }

    const fn bits(byte: usize, mask: u8) -> Self {
        Self {
            byte,
            mask: Some(mask),
        }
    }
}

/// Where `field` lives inside `format`, or `None` when the layout does not
/// carry that field.
pub fn slot_of(format: CanonicalFormat, field: CanonicalField) -> Option<FieldSlot> {
    use CanonicalField::*;
    match format {
        f if f == FiveFretGuitarState::FORMAT => match field {
            Frets => Some(FieldSlot::bits(0, flags::fret::ALL)),
            SoloFrets => Some(FieldSlot::bits(1, flags::fret::ALL)),
            Dpad => Some(FieldSlot::bits(2, 0x0F)),
            MenuButtons => Some(FieldSlot::bits(3, 0x07)),
            Whammy => Some(FieldSlot::byte(4)),
            Tilt => Some(FieldSlot::byte(5)),
            PickupNotch => Some(FieldSlot::byte(6)),
            _ => None,
        },
        f if f == SixFretGuitarState::FORMAT => match field {
            Frets => Some(FieldSlot::bits(0, flags::six_fret::ALL)),
            Strum => Some(FieldSlot::bits(1, 0x03)),
            Dpad => Some(FieldSlot::bits(2, 0x0F)),
            MenuButtons => Some(FieldSlot::bits(3, 0x07)),
            Whammy => Some(FieldSlot::byte(4)),
            Tilt => Some(FieldSlot::byte(5)),
            _ => None,
        },
        f if f == FourLaneDrumsState::FORMAT => match field {
            Pads => Some(FieldSlot::bits(0, 0x0F)),
            Cymbals => Some(FieldSlot::bits(1, 0x07)),
            Dpad => Some(FieldSlot::bits(2, 0x0F)),
            MenuButtons => Some(FieldSlot::bits(3, 0x07)),
            Kick => Some(FieldSlot::bits(4, 0x03)),
            HitVelocity => Some(FieldSlot::byte(5)),
            _ => None,
        },
        f if f == ProGuitarState::FORMAT => match field {
            StringFret(s) if (s as usize) < PRO_STRING_COUNT => {
                Some(FieldSlot::byte(s as usize))
            }
            StringVelocity(s) if (s as usize) < PRO_STRING_COUNT => {
                Some(FieldSlot::byte(PRO_STRING_COUNT + s as usize))
            }
            StrummedStrings => Some(FieldSlot::bits(12, 0x3F)),
            MenuButtons => Some(FieldSlot::bits(13, 0x07)),
            PickupNotch => Some(FieldSlot::byte(14)),
            _ => None,
        },
        f if f == TurntableState::FORMAT => match field {
            LeftTable => Some(FieldSlot::bits(0, 0x07)),
            RightTable => Some(FieldSlot::bits(1, 0x07)),
            FaceButtons => Some(FieldSlot::bits(2, 0x0F)),
            DeckNav => Some(FieldSlot::bits(3, 0x3F)),
            LeftPlatterVelocity => Some(FieldSlot::byte(4)),
            RightPlatterVelocity => Some(FieldSlot::byte(5)),
            Crossfader => Some(FieldSlot::byte(6)),
            EffectsDial => Some(FieldSlot::byte(7)),
            _ => None,
        },
        f if f == PickupSwitchState::FORMAT => match field {
            PickupNotch => Some(FieldSlot::byte(0)),
            _ => None,
        },
        _ => None,
    }
}
