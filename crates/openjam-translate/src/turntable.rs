//! Turntable translator.
//!
//! Packs the two 3-bit table button groups, passes the signed platter
//! velocities through, and suppresses face-button colors that share a
//! physical switch with a table hit this sample. Stateless.

use crate::algorithms::suppress_shared_faces;
use crate::convert::menu_byte;
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateError, TranslateResult};
use openjam_canonical::{flags, CanonicalField, CanonicalFormat, TurntableState};
use openjam_hid_common::RawFormat;

use hid_ps3_protocol as ps3;
use hid_xinput_protocol as xinput;

/// Which hardware a [`TurntableTranslator`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurntableSource {
    XInput,
    Ps3 { has_report_id: bool },
}

impl TurntableSource {
    fn raw_format(self) -> RawFormat {
        match self {
            Self::XInput => xinput::XINPUT_FORMAT,
            Self::Ps3 { has_report_id } => ps3::ps3_format(has_report_id),
        }
    }
}

pub struct TurntableTranslator {
    source: TurntableSource,
    format: RawFormat,
}

impl TurntableTranslator {
    pub fn bind(source: TurntableSource, declared: RawFormat) -> TranslateResult<Self> {
        let format = source.raw_format();
        check_format(format, declared)?;
        Ok(Self { source, format })
    }

    fn mismatch(&self, actual: usize) -> TranslateError {
        TranslateError::FormatMismatch {
            expected_tag: self.format.tag,
            expected: self.format.size,
            actual,
        }
    }
}

fn face_bits(green: bool, red: bool, blue: bool, euphoria: bool) -> u8 {
    use flags::face::*;
    let mut bits = 0;
    if green {
        bits |= GREEN;
    }
    if red {
        bits |= RED;
    }
    if blue {
        bits |= BLUE;
    }
    if euphoria {
        bits |= EUPHORIA;
    }
    bits
}

fn nav_bits(up: bool, down: bool, left: bool, right: bool, menu: u8) -> u8 {
    use flags::deck_nav::*;
    let mut bits = 0;
    if up {
        bits |= UP;
    }
    if down {
        bits |= DOWN;
    }
    if left {
        bits |= LEFT;
    }
    if right {
        bits |= RIGHT;
    }
    if menu & flags::menu::START != 0 {
        bits |= START;
    }
    if menu & flags::menu::SELECT != 0 {
        bits |= SELECT;
    }
    bits
}

impl StateTranslator for TurntableTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        TurntableState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let state = match self.source {
            TurntableSource::XInput => {
                let s = xinput::parse_turntable_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                let faces = face_bits(s.face_green, s.face_red, s.face_blue, s.euphoria);
                TurntableState {
                    left_table: s.left_table,
                    right_table: s.right_table,
                    faces: suppress_shared_faces(faces, s.left_table, s.right_table),
                    nav: nav_bits(
                        s.dpad_up,
                        s.dpad_down,
                        s.dpad_left,
                        s.dpad_right,
                        menu_byte(s.menu.start, s.menu.back, s.menu.guide),
                    ),
                    left_velocity: s.left_velocity,
                    right_velocity: s.right_velocity,
                    crossfader: s.crossfader,
                    effects_dial: s.effects_dial,
                }
            }
            TurntableSource::Ps3 { has_report_id } => {
                let s = ps3::parse_turntable_report(raw, has_report_id)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                let faces = face_bits(s.face_green, s.face_red, s.face_blue, s.euphoria);
                TurntableState {
                    left_table: s.left_table,
                    right_table: s.right_table,
                    faces: suppress_shared_faces(faces, s.left_table, s.right_table),
                    nav: nav_bits(
                        s.dpad.up,
                        s.dpad.down,
                        s.dpad.left,
                        s.dpad.right,
                        menu_byte(s.menu.start, s.menu.select, s.menu.system),
                    ),
                    left_velocity: s.left_velocity,
                    right_velocity: s.right_velocity,
                    crossfader: s.crossfader,
                    effects_dial: s.effects_dial,
                }
            }
        };
        state.write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        match self.source {
            TurntableSource::XInput => match field {
                LeftTable => Some(RawSlot::bits(xinput::offsets::THUMB_LX, 0x07)),
                RightTable => Some(RawSlot::bits(xinput::offsets::THUMB_LY, 0x07)),
                LeftPlatterVelocity => Some(RawSlot::byte(xinput::offsets::THUMB_LX + 1)),
                RightPlatterVelocity => Some(RawSlot::byte(xinput::offsets::THUMB_LY + 1)),
                Crossfader => Some(RawSlot::byte(xinput::offsets::THUMB_RX + 1)),
                EffectsDial => Some(RawSlot::byte(xinput::offsets::THUMB_RY + 1)),
                // Faces go through suppression.
                _ => None,
            },
            TurntableSource::Ps3 { has_report_id } => {
                let base = has_report_id as usize;
                match field {
                    LeftTable => Some(RawSlot::bits(base + ps3::offsets::LEFT_TABLE, 0x07)),
                    RightTable => Some(RawSlot::bits(base + ps3::offsets::RIGHT_TABLE, 0x07)),
                    LeftPlatterVelocity => {
                        Some(RawSlot::byte(base + ps3::offsets::LEFT_VELOCITY))
                    }
                    RightPlatterVelocity => {
                        Some(RawSlot::byte(base + ps3::offsets::RIGHT_VELOCITY))
                    }
                    Crossfader => Some(RawSlot::byte(base + ps3::offsets::CROSSFADER)),
                    EffectsDial => Some(RawSlot::byte(base + ps3::offsets::EFFECTS_DIAL)),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openjam_canonical::flags::{face, table};

    #[test]
    fn test_shared_face_suppression() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = TurntableTranslator::bind(
            TurntableSource::Ps3 {
                has_report_id: false,
            },
            ps3::PS3_FORMAT,
        )?;
        let mut raw = [0u8; 27];
        raw[ps3::offsets::HAT] = 0x08;
        raw[0] = ps3::buttons0::CROSS | ps3::buttons0::L1; // face green + euphoria
        raw[ps3::offsets::LEFT_TABLE] = table::GREEN;

        let mut out = [0u8; 8];
        t.translate(&raw, &mut out)?;
        let state = TurntableState::read_from(&out)?;
        assert_eq!(state.left_table, table::GREEN);
        assert_eq!(
            state.faces,
            face::EUPHORIA,
            "green face shares the switch and is suppressed"
        );
        Ok(())
    }

    #[test]
    fn test_platter_velocities_and_dials() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = TurntableTranslator::bind(TurntableSource::XInput, xinput::XINPUT_FORMAT)?;
        let mut raw = [0u8; 20];
        raw[7] = (-90i8) as u8; // left platter
        raw[9] = 35; // right platter
        raw[11] = 0x80; // crossfader
        raw[13] = 0x10; // effects dial

        let mut out = [0u8; 8];
        t.translate(&raw, &mut out)?;
        let state = TurntableState::read_from(&out)?;
        assert_eq!(state.left_velocity, -90);
        assert_eq!(state.right_velocity, 35);
        assert_eq!(state.crossfader, 0x80);
        assert_eq!(state.effects_dial, 0x10);
        Ok(())
    }

    #[test]
    fn test_nav_packs_dpad_and_menu() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = TurntableTranslator::bind(TurntableSource::XInput, xinput::XINPUT_FORMAT)?;
        let mask = xinput::buttons::DPAD_LEFT | xinput::buttons::START;
        let mut raw = [0u8; 20];
        raw[2] = (mask & 0xFF) as u8;
        raw[3] = (mask >> 8) as u8;

        let mut out = [0u8; 8];
        t.translate(&raw, &mut out)?;
        let state = TurntableState::read_from(&out)?;
        assert_eq!(
            state.nav,
            flags::deck_nav::LEFT | flags::deck_nav::START
        );
        Ok(())
    }

    #[test]
    fn test_raw_slots() -> Result<(), Box<dyn std::error::Error>> {
        let t = TurntableTranslator::bind(
            TurntableSource::Ps3 {
                has_report_id: true,
            },
            ps3::PS3_FORMAT_WITH_ID,
        )?;
        assert_eq!(
            t.raw_slot_of(CanonicalField::Crossfader),
            Some(RawSlot::byte(1 + ps3::offsets::CROSSFADER))
        );
        assert_eq!(t.raw_slot_of(CanonicalField::FaceButtons), None);
        Ok(())
    }
}
