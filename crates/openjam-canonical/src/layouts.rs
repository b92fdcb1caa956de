//! The fixed per-class output layouts.
//!
//! Each state struct packs to and unpacks from its wire body bit-for-bit.
//! `write_to` fills the entire declared size (reserved bytes are zeroed) so
//! translating into a reused buffer never leaks a previous sample.

use crate::{CanonicalFormat, LayoutError, LayoutResult, PRO_STRING_COUNT};
use serde::{Deserialize, Serialize};

fn check_len(tag: u8, needed: usize, actual: usize) -> LayoutResult<()> {
    if actual < needed {
        return Err(LayoutError::BufferTooSmall {
            tag,
            needed,
            actual,
        });
    }
    Ok(())
}

/// Five-fret guitar canonical state (tag 0x81, 8 bytes).
///
/// Invariant for flag-style sources: `frets` and `solo_frets` are mutually
/// exclusive — the translator forces the non-selected group to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveFretGuitarState {
    pub frets: u8,
    pub solo_frets: u8,
    pub dpad: u8,
    pub menu: u8,
    pub whammy: u8,
    pub tilt: u8,
    pub pickup_notch: u8,
}

impl FiveFretGuitarState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x81, size: 8 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[0] = self.frets;
        out[1] = self.solo_frets;
        out[2] = self.dpad;
        out[3] = self.menu;
        out[4] = self.whammy;
        out[5] = self.tilt;
        out[6] = self.pickup_notch;
        out[7] = 0;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        Ok(Self {
            frets: buf[0],
            solo_frets: buf[1],
            dpad: buf[2],
            menu: buf[3],
            whammy: buf[4],
            tilt: buf[5],
            pickup_notch: buf[6],
        })
    }
}

/// Six-fret guitar canonical state (tag 0x82, 8 bytes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixFretGuitarState {
    pub frets: u8,
    pub strum: u8,
    pub dpad: u8,
    pub menu: u8,
    pub whammy: u8,
    pub tilt: u8,
}

impl SixFretGuitarState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x82, size: 8 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[0] = self.frets;
        out[1] = self.strum;
        out[2] = self.dpad;
        out[3] = self.menu;
        out[4] = self.whammy;
        out[5] = self.tilt;
        out[6] = 0;
        out[7] = 0;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        Ok(Self {
            frets: buf[0],
            strum: buf[1],
            dpad: buf[2],
            menu: buf[3],
            whammy: buf[4],
            tilt: buf[5],
        })
    }
}

/// Four-lane drum kit canonical state (tag 0x83, 8 bytes).
///
/// `dpad` is the post-suppression directional state: bits consumed by the
/// pad/cymbal disambiguation are already cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourLaneDrumsState {
    pub pads: u8,
    pub cymbals: u8,
    pub dpad: u8,
    pub menu: u8,
    pub kick: u8,
    pub hit_velocity: u8,
}

impl FourLaneDrumsState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x83, size: 8 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[0] = self.pads;
        out[1] = self.cymbals;
        out[2] = self.dpad;
        out[3] = self.menu;
        out[4] = self.kick;
        out[5] = self.hit_velocity;
        out[6] = 0;
        out[7] = 0;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        Ok(Self {
            pads: buf[0],
            cymbals: buf[1],
            dpad: buf[2],
            menu: buf[3],
            kick: buf[4],
            hit_velocity: buf[5],
        })
    }
}

/// Pro guitar canonical state (tag 0x84, 16 bytes).
///
/// `strummed` is a one-sample pulse bitmask (string 1 = bit 0); it is
/// recomputed on every translation and never persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProGuitarState {
    pub string_frets: [u8; PRO_STRING_COUNT],
    pub string_velocities: [u8; PRO_STRING_COUNT],
    pub strummed: u8,
    pub menu: u8,
    pub pickup_notch: u8,
}

impl ProGuitarState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x84, size: 16 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[..PRO_STRING_COUNT].copy_from_slice(&self.string_frets);
        out[PRO_STRING_COUNT..2 * PRO_STRING_COUNT].copy_from_slice(&self.string_velocities);
        out[12] = self.strummed;
        out[13] = self.menu;
        out[14] = self.pickup_notch;
        out[15] = 0;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        let mut string_frets = [0u8; PRO_STRING_COUNT];
        let mut string_velocities = [0u8; PRO_STRING_COUNT];
        string_frets.copy_from_slice(&buf[..PRO_STRING_COUNT]);
        string_velocities.copy_from_slice(&buf[PRO_STRING_COUNT..2 * PRO_STRING_COUNT]);
        Ok(Self {
            string_frets,
            string_velocities,
            strummed: buf[12],
            menu: buf[13],
            pickup_notch: buf[14],
        })
    }
}

/// Turntable canonical state (tag 0x85, 8 bytes).
///
/// Platter velocities are signed deltas stored as raw bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurntableState {
    pub left_table: u8,
    pub right_table: u8,
    pub faces: u8,
    pub nav: u8,
    pub left_velocity: i8,
    pub right_velocity: i8,
    pub crossfader: u8,
    pub effects_dial: u8,
}

impl TurntableState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x85, size: 8 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[0] = self.left_table;
        out[1] = self.right_table;
        out[2] = self.faces;
        out[3] = self.nav;
        out[4] = self.left_velocity as u8;
        out[5] = self.right_velocity as u8;
        out[6] = self.crossfader;
        out[7] = self.effects_dial;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        Ok(Self {
            left_table: buf[0],
            right_table: buf[1],
            faces: buf[2],
            nav: buf[3],
            left_velocity: buf[4] as i8,
            right_velocity: buf[5] as i8,
            crossfader: buf[6],
            effects_dial: buf[7],
        })
    }
}

/// Standalone pickup-switch canonical state (tag 0x86, 1 byte).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupSwitchState {
    pub notch: u8,
}

impl PickupSwitchState {
    pub const FORMAT: CanonicalFormat = CanonicalFormat { tag: 0x86, size: 1 };

    pub fn write_to(&self, out: &mut [u8]) -> LayoutResult<()> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, out.len())?;
        out[0] = self.notch;
        Ok(())
    }

    pub fn read_from(buf: &[u8]) -> LayoutResult<Self> {
        check_len(Self::FORMAT.tag, Self::FORMAT.size, buf.len())?;
        Ok(Self { notch: buf[0] })
    }
}
