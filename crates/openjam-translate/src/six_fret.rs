//! Six-fret guitar translator.
//!
//! All three platforms report the strum bar as one signed axis; the
//! canonical layout wants two discrete directions that are never both
//! asserted. The PS3/Wii U dongle's whammy shares the family's 0x7F rest
//! sentinel and is held like the five-fret one.

use crate::algorithms::{pack_dpad, split_strum_axis, AxisHold};
use crate::convert::{dpad_byte, menu_byte};
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateError, TranslateResult};
use openjam_canonical::{flags, CanonicalField, CanonicalFormat, SixFretGuitarState};
use openjam_hid_common::RawFormat;

use hid_ps3_protocol as ps3;
use hid_ps4_protocol as ps4;
use hid_xinput_protocol as xinput;

/// Which hardware a [`SixFretTranslator`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SixFretSource {
    XInput,
    Ps3 { has_report_id: bool },
    Ps4,
}

impl SixFretSource {
    fn raw_format(self) -> RawFormat {
        match self {
            Self::XInput => xinput::XINPUT_FORMAT,
            Self::Ps3 { has_report_id } => ps3::ps3_format(has_report_id),
            Self::Ps4 => ps4::PS4_FORMAT,
        }
    }
}

pub struct SixFretTranslator {
    source: SixFretSource,
    format: RawFormat,
    whammy: Option<AxisHold>,
}

impl SixFretTranslator {
    pub fn bind(source: SixFretSource, declared: RawFormat) -> TranslateResult<Self> {
        let format = source.raw_format();
        check_format(format, declared)?;
        let whammy = match source {
            SixFretSource::Ps3 { .. } => Some(AxisHold::new(ps3::sentinels::WHAMMY_REST, 0x00)),
            SixFretSource::XInput | SixFretSource::Ps4 => None,
        };
        Ok(Self {
            source,
            format,
            whammy,
        })
    }

    fn mismatch(&self, actual: usize) -> TranslateError {
        TranslateError::FormatMismatch {
            expected_tag: self.format.tag,
            expected: self.format.size,
            actual,
        }
    }
}

fn fret_bits(b1: bool, b2: bool, b3: bool, w1: bool, w2: bool, w3: bool) -> u8 {
    use flags::six_fret::*;
    let mut bits = 0;
    if b1 {
        bits |= BLACK1;
    }
    if b2 {
        bits |= BLACK2;
    }
    if b3 {
        bits |= BLACK3;
    }
    if w1 {
        bits |= WHITE1;
    }
    if w2 {
        bits |= WHITE2;
    }
    if w3 {
        bits |= WHITE3;
    }
    bits
}

fn strum_byte(axis: i8) -> u8 {
    let (up, down) = split_strum_axis(axis);
    let mut bits = 0;
    if up {
        bits |= flags::strum::UP;
    }
    if down {
        bits |= flags::strum::DOWN;
    }
    bits
}

impl StateTranslator for SixFretTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        SixFretGuitarState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let state = match self.source {
            SixFretSource::XInput => {
                let s = xinput::parse_six_fret_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                SixFretGuitarState {
                    frets: fret_bits(s.black1, s.black2, s.black3, s.white1, s.white2, s.white3),
                    strum: strum_byte(s.strum_bar),
                    dpad: pack_dpad(s.dpad_up, s.dpad_down, s.dpad_left, s.dpad_right),
                    menu: menu_byte(s.menu.start, s.menu.back, s.menu.guide),
                    whammy: s.whammy,
                    tilt: s.tilt,
                }
            }
            SixFretSource::Ps3 { has_report_id } => {
                let s = ps3::parse_six_fret_report(raw, has_report_id)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                let whammy = match self.whammy.as_mut() {
                    Some(hold) => hold.feed(s.whammy),
                    None => s.whammy,
                };
                SixFretGuitarState {
                    frets: fret_bits(s.black1, s.black2, s.black3, s.white1, s.white2, s.white3),
                    strum: strum_byte(s.strum_bar),
                    dpad: dpad_byte(s.dpad),
                    menu: menu_byte(s.menu.start, s.menu.select, s.menu.system),
                    whammy,
                    tilt: s.tilt,
                }
            }
            SixFretSource::Ps4 => {
                let s = ps4::parse_six_fret_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                SixFretGuitarState {
                    frets: s.frets,
                    strum: strum_byte(s.strum_bar),
                    dpad: dpad_byte(s.dpad),
                    menu: menu_byte(s.menu.options, s.menu.share, s.menu.ps),
                    whammy: s.whammy,
                    tilt: s.tilt,
                }
            }
        };
        state.write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        match self.source {
            // Strum is a split axis everywhere; never positional.
            SixFretSource::XInput => match field {
                Whammy => Some(RawSlot::byte(xinput::offsets::THUMB_RX + 1)),
                Tilt => Some(RawSlot::byte(xinput::offsets::THUMB_RY + 1)),
                Dpad => Some(RawSlot::bits(2, 0x0F)),
                _ => None,
            },
            SixFretSource::Ps3 { has_report_id } => {
                let base = has_report_id as usize;
                match field {
                    Tilt => Some(RawSlot::byte(base + ps3::offsets::TILT)),
                    _ => None,
                }
            }
            SixFretSource::Ps4 => match field {
                Frets => Some(RawSlot::bits(
                    ps4::offsets::SIX_FRET_FRETS,
                    flags::six_fret::ALL,
                )),
                Whammy => Some(RawSlot::byte(ps4::offsets::SIX_FRET_WHAMMY)),
                Tilt => Some(RawSlot::byte(ps4::offsets::SIX_FRET_TILT)),
                MenuButtons => Some(RawSlot::bits(ps4::offsets::SIX_FRET_MENU, 0x07)),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openjam_canonical::flags::{six_fret, strum};

    #[test]
    fn test_strum_split_three_platforms() -> Result<(), Box<dyn std::error::Error>> {
        // XInput: signed axis in the left stick Y high byte.
        let mut t = SixFretTranslator::bind(SixFretSource::XInput, xinput::XINPUT_FORMAT)?;
        let mut raw = [0u8; 20];
        let mut out = [0u8; 8];

        raw[9] = (-50i8) as u8;
        t.translate(&raw, &mut out)?;
        assert_eq!(SixFretGuitarState::read_from(&out)?.strum, strum::DOWN);

        raw[9] = 50;
        t.translate(&raw, &mut out)?;
        assert_eq!(SixFretGuitarState::read_from(&out)?.strum, strum::UP);

        raw[9] = 0;
        t.translate(&raw, &mut out)?;
        assert_eq!(SixFretGuitarState::read_from(&out)?.strum, 0);
        Ok(())
    }

    #[test]
    fn test_ps3_strum_recentered_before_split() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = SixFretTranslator::bind(
            SixFretSource::Ps3 {
                has_report_id: false,
            },
            ps3::PS3_FORMAT,
        )?;
        let mut raw = [0u8; 27];
        raw[ps3::offsets::HAT] = 0x08;
        raw[ps3::offsets::STRUM_BAR] = 0x80 - 50;
        let mut out = [0u8; 8];
        t.translate(&raw, &mut out)?;
        assert_eq!(SixFretGuitarState::read_from(&out)?.strum, strum::DOWN);
        Ok(())
    }

    #[test]
    fn test_fret_bit_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = SixFretTranslator::bind(SixFretSource::Ps4, ps4::PS4_FORMAT)?;
        let mut raw = [0u8; 64];
        raw[0] = ps4::REPORT_ID;
        raw[ps4::offsets::SIX_FRET_FRETS] = six_fret::BLACK1 | six_fret::WHITE3;
        raw[ps4::offsets::SIX_FRET_HAT] = 0x08;
        let mut out = [0u8; 8];
        t.translate(&raw, &mut out)?;
        let state = SixFretGuitarState::read_from(&out)?;
        assert_eq!(state.frets, six_fret::BLACK1 | six_fret::WHITE3);
        Ok(())
    }

    #[test]
    fn test_bind_rejects_cross_platform_format() {
        assert!(SixFretTranslator::bind(SixFretSource::Ps4, xinput::XINPUT_FORMAT).is_err());
    }
}
