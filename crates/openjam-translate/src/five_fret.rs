//! Five-fret guitar translators.
//!
//! Two families exist. Flag-style hardware (XInput, PS3/Wii) reports one
//! shared set of fret bits plus a solo boolean; the translator forces the
//! non-selected canonical group to zero. Distinct-style hardware (PS4)
//! already reports separate regular and solo groups and translates as a
//! direct repack.

use crate::algorithms::{pack_dpad, resolve_solo_frets, AxisHold, NotchHold};
use crate::convert::{dpad_byte, menu_byte};
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateError, TranslateResult};
use openjam_canonical::{flags, CanonicalField, CanonicalFormat, FiveFretGuitarState};
use openjam_hid_common::RawFormat;

use hid_ps3_protocol as ps3;
use hid_ps4_protocol as ps4;
use hid_xinput_protocol as xinput;

/// Which flag-style hardware a [`FlagSoloGuitarTranslator`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiveFretSource {
    XInput,
    /// Alternate XInput layout: whammy on the right-stick Y high byte
    /// (rest sentinel 0x80), tilt collapsed to a button, no pickup switch.
    XInputAlt,
    Ps3 { has_report_id: bool },
}

impl FiveFretSource {
    fn raw_format(self) -> RawFormat {
        match self {
            Self::XInput | Self::XInputAlt => xinput::XINPUT_FORMAT,
            Self::Ps3 { has_report_id } => ps3::ps3_format(has_report_id),
        }
    }
}

/// Translator for flag-style five-fret guitars.
pub struct FlagSoloGuitarTranslator {
    source: FiveFretSource,
    format: RawFormat,
    whammy: Option<AxisHold>,
    notch: Option<NotchHold>,
}

impl FlagSoloGuitarTranslator {
    /// Bind to a declared raw format. A mismatch against the source's
    /// expected format is configuration-fatal.
    pub fn bind(source: FiveFretSource, declared: RawFormat) -> TranslateResult<Self> {
        let format = source.raw_format();
        check_format(format, declared)?;
        let whammy = match source {
            // Power-up default for the whammy is 0x00 on both families.
            FiveFretSource::XInput => None,
            FiveFretSource::XInputAlt => {
                Some(AxisHold::new(xinput::sentinels::ALT_WHAMMY_REST, 0x00))
            }
            FiveFretSource::Ps3 { .. } => Some(AxisHold::new(ps3::sentinels::WHAMMY_REST, 0x00)),
        };
        let notch = match source {
            FiveFretSource::XInputAlt => None,
            FiveFretSource::XInput => Some(NotchHold::new(xinput::sentinels::PICKUP_REST)),
            FiveFretSource::Ps3 { .. } => Some(NotchHold::new(ps3::sentinels::PICKUP_REST)),
        };
        Ok(Self {
            source,
            format,
            whammy,
            notch,
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

/// Decoded intermediate shared by the three flag-style layouts.
struct FlagSample {
    frets: u8,
    solo_flag: bool,
    dpad: u8,
    menu: u8,
    whammy_raw: u8,
    tilt: u8,
    pickup_raw: Option<u8>,
}

fn xinput_frets(green: bool, red: bool, yellow: bool, blue: bool, orange: bool) -> u8 {
    let mut bits = 0;
    if green {
        bits |= flags::fret::GREEN;
    }
    if red {
        bits |= flags::fret::RED;
    }
    if yellow {
        bits |= flags::fret::YELLOW;
    }
    if blue {
        bits |= flags::fret::BLUE;
    }
    if orange {
        bits |= flags::fret::ORANGE;
    }
    bits
}

impl StateTranslator for FlagSoloGuitarTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        FiveFretGuitarState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let sample = match self.source {
            FiveFretSource::XInput => {
                let s = xinput::parse_five_fret_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                FlagSample {
                    frets: xinput_frets(s.green, s.red, s.yellow, s.blue, s.orange),
                    solo_flag: s.solo_flag,
                    dpad: pack_dpad(s.dpad_up, s.dpad_down, s.dpad_left, s.dpad_right),
                    menu: menu_byte(s.menu.start, s.menu.back, s.menu.guide),
                    whammy_raw: s.whammy,
                    tilt: s.tilt,
                    pickup_raw: Some(s.pickup_raw),
                }
            }
            FiveFretSource::XInputAlt => {
                let s = xinput::parse_alt_five_fret_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                FlagSample {
                    frets: xinput_frets(s.green, s.red, s.yellow, s.blue, s.orange),
                    solo_flag: s.solo_flag,
                    dpad: pack_dpad(s.dpad_up, s.dpad_down, s.dpad_left, s.dpad_right),
                    menu: menu_byte(s.menu.start, s.menu.back, s.menu.guide),
                    whammy_raw: s.whammy,
                    tilt: if s.tilt_active { 0xFF } else { 0x00 },
                    pickup_raw: None,
                }
            }
            FiveFretSource::Ps3 { has_report_id } => {
                let s = ps3::parse_five_fret_report(raw, has_report_id)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                FlagSample {
                    frets: xinput_frets(s.green, s.red, s.yellow, s.blue, s.orange),
                    solo_flag: s.solo_flag,
                    dpad: dpad_byte(s.dpad),
                    menu: menu_byte(s.menu.start, s.menu.select, s.menu.system),
                    whammy_raw: s.whammy,
                    tilt: s.tilt,
                    pickup_raw: Some(s.pickup_raw),
                }
            }
        };

        let (frets, solo_frets) = resolve_solo_frets(sample.frets, sample.solo_flag);
        let whammy = match self.whammy.as_mut() {
            Some(hold) => hold.feed(sample.whammy_raw),
            None => sample.whammy_raw,
        };
        let pickup_notch = match (self.notch.as_mut(), sample.pickup_raw) {
            (Some(hold), Some(raw)) => hold.feed(raw),
            _ => 0,
        };

        FiveFretGuitarState {
            frets,
            solo_frets,
            dpad: sample.dpad,
            menu: sample.menu,
            whammy,
            tilt: sample.tilt,
            pickup_notch,
        }
        .write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        match self.source {
            // Frets depend on the solo flag, the pickup notch on held
            // state; neither is positional.
            FiveFretSource::XInput => match field {
                Whammy => Some(RawSlot::byte(xinput::offsets::THUMB_RX + 1)),
                Tilt => Some(RawSlot::byte(xinput::offsets::THUMB_RY + 1)),
                Dpad => Some(RawSlot::bits(2, 0x0F)),
                _ => None,
            },
            // Alt whammy is sentinel-held and tilt is synthesized.
            FiveFretSource::XInputAlt => match field {
                Dpad => Some(RawSlot::bits(2, 0x0F)),
                _ => None,
            },
            // The PS3 hat nibble is not a bitmask; whammy is sentinel-held.
            FiveFretSource::Ps3 { has_report_id } => {
                let base = has_report_id as usize;
                match field {
                    Tilt => Some(RawSlot::byte(base + ps3::offsets::TILT)),
                    _ => None,
                }
            }
        }
    }
}

/// Translator for distinct-style five-fret guitars (PS4).
pub struct DistinctSoloGuitarTranslator {
    notch: NotchHold,
}

impl DistinctSoloGuitarTranslator {
    pub fn bind(declared: RawFormat) -> TranslateResult<Self> {
        check_format(ps4::PS4_FORMAT, declared)?;
        Ok(Self {
            notch: NotchHold::new(ps4::sentinels::PICKUP_REST),
        })
    }
}

impl StateTranslator for DistinctSoloGuitarTranslator {
    fn raw_format(&self) -> RawFormat {
        ps4::PS4_FORMAT
    }

    fn canonical_format(&self) -> CanonicalFormat {
        FiveFretGuitarState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(ps4::PS4_FORMAT, raw)?;
        let s = ps4::parse_five_fret_report(raw).ok_or(TranslateError::FormatMismatch {
            expected_tag: ps4::PS4_FORMAT.tag,
            expected: ps4::PS4_FORMAT.size,
            actual: raw.len(),
        })?;
        FiveFretGuitarState {
            frets: s.frets,
            solo_frets: s.solo_frets,
            dpad: dpad_byte(s.dpad),
            menu: menu_byte(s.menu.options, s.menu.share, s.menu.ps),
            whammy: s.whammy,
            tilt: s.tilt,
            pickup_notch: self.notch.feed(s.pickup_raw),
        }
        .write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        match field {
            Frets => Some(RawSlot::bits(ps4::offsets::GUITAR_FRETS, flags::fret::ALL)),
            SoloFrets => Some(RawSlot::bits(
                ps4::offsets::GUITAR_SOLO_FRETS,
                flags::fret::ALL,
            )),
            // PS4 menu bits land on the canonical positions directly.
            MenuButtons => Some(RawSlot::bits(ps4::offsets::GUITAR_MENU, 0x07)),
            Whammy => Some(RawSlot::byte(ps4::offsets::GUITAR_WHAMMY)),
            Tilt => Some(RawSlot::byte(ps4::offsets::GUITAR_TILT)),
            _ => None,
        }
    }
}
