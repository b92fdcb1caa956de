//! Four-lane drum kit translator.
//!
//! XInput and PS3/Wii kits report four color flags plus pad/cymbal marker
//! booleans; when both markers land in one sample the colors are ambiguous
//! and the d-pad tie-break in [`resolve_pad_cymbal`] decides. Legacy kits
//! never assert the markers and every hit is a pad; whether a kit is legacy
//! is tracked per device with a sticky bit rather than configured. PS4 kits
//! report independent per-pad and per-cymbal velocities and need none of
//! this.

use crate::algorithms::{pack_dpad, resolve_pad_cymbal};
use crate::convert::{dpad_byte, menu_byte};
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateError, TranslateResult};
use openjam_canonical::{flags, CanonicalField, CanonicalFormat, FourLaneDrumsState};
use openjam_hid_common::RawFormat;
use tracing::debug;

use hid_ps3_protocol as ps3;
use hid_ps4_protocol as ps4;
use hid_xinput_protocol as xinput;

/// Which hardware a [`FourLaneTranslator`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourLaneSource {
    XInput,
    Ps3 { has_report_id: bool },
    Ps4,
}

impl FourLaneSource {
    fn raw_format(self) -> RawFormat {
        match self {
            Self::XInput => xinput::XINPUT_FORMAT,
            Self::Ps3 { has_report_id } => ps3::ps3_format(has_report_id),
            Self::Ps4 => ps4::PS4_FORMAT,
        }
    }
}

pub struct FourLaneTranslator {
    source: FourLaneSource,
    format: RawFormat,
    /// Sticky: set once the kit asserts a pad or cymbal marker, never
    /// cleared. A kit that has never asserted one is legacy hardware.
    flags_ever_seen: bool,
}

impl FourLaneTranslator {
    pub fn bind(source: FourLaneSource, declared: RawFormat) -> TranslateResult<Self> {
        let format = source.raw_format();
        check_format(format, declared)?;
        Ok(Self {
            source,
            format,
            flags_ever_seen: false,
        })
    }

    fn note_flags(&mut self, pad_flag: bool, cymbal_flag: bool) {
        if !self.flags_ever_seen && (pad_flag || cymbal_flag) {
            self.flags_ever_seen = true;
            debug!(source = ?self.source, "kit asserted a marker, leaving legacy interpretation");
        }
    }

    fn mismatch(&self, actual: usize) -> TranslateError {
        TranslateError::FormatMismatch {
            expected_tag: self.format.tag,
            expected: self.format.size,
            actual,
        }
    }
}

fn color_bits(red: bool, yellow: bool, blue: bool, green: bool) -> u8 {
    use flags::pad::*;
    let mut bits = 0;
    if red {
        bits |= RED;
    }
    if yellow {
        bits |= YELLOW;
    }
    if blue {
        bits |= BLUE;
    }
    if green {
        bits |= GREEN;
    }
    bits
}

fn kick_bits(kick1: bool, kick2: bool) -> u8 {
    let mut bits = 0;
    if kick1 {
        bits |= flags::kick::KICK1;
    }
    if kick2 {
        bits |= flags::kick::KICK2;
    }
    bits
}

/// Loudest velocity among the colors that registered a hit this sample.
/// `velocities` is in red, yellow, blue, green order.
fn hit_velocity(hits: u8, velocities: [u8; 4]) -> u8 {
    let mut max = 0;
    for (i, &v) in velocities.iter().enumerate() {
        if hits & (1 << i) != 0 && v > max {
            max = v;
        }
    }
    max
}

impl StateTranslator for FourLaneTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        FourLaneDrumsState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let state = match self.source {
            FourLaneSource::XInput => {
                let s = xinput::parse_four_lane_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                self.note_flags(s.pad_flag, s.cymbal_flag);
                let colors = color_bits(s.red, s.yellow, s.blue, s.green);
                let r = resolve_pad_cymbal(
                    colors,
                    s.pad_flag,
                    s.cymbal_flag,
                    s.dpad_up,
                    s.dpad_down,
                    self.flags_ever_seen,
                );
                FourLaneDrumsState {
                    pads: r.pads,
                    cymbals: r.cymbals,
                    dpad: pack_dpad(r.dpad_up, r.dpad_down, s.dpad_left, s.dpad_right),
                    menu: menu_byte(s.menu.start, s.menu.back, s.menu.guide),
                    kick: kick_bits(s.kick1, s.kick2),
                    hit_velocity: hit_velocity(colors, s.velocities),
                }
            }
            FourLaneSource::Ps3 { has_report_id } => {
                let s = ps3::parse_four_lane_report(raw, has_report_id)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                self.note_flags(s.pad_flag, s.cymbal_flag);
                let colors = color_bits(s.red, s.yellow, s.blue, s.green);
                let r = resolve_pad_cymbal(
                    colors,
                    s.pad_flag,
                    s.cymbal_flag,
                    s.dpad.up,
                    s.dpad.down,
                    self.flags_ever_seen,
                );
                FourLaneDrumsState {
                    pads: r.pads,
                    cymbals: r.cymbals,
                    dpad: pack_dpad(r.dpad_up, r.dpad_down, s.dpad.left, s.dpad.right),
                    menu: menu_byte(s.menu.start, s.menu.select, s.menu.system),
                    kick: kick_bits(s.kick1, s.kick2),
                    hit_velocity: hit_velocity(colors, s.velocities),
                }
            }
            FourLaneSource::Ps4 => {
                let s = ps4::parse_four_lane_report(raw)
                    .ok_or_else(|| self.mismatch(raw.len()))?;
                let mut pads = 0;
                let mut max = 0;
                for (i, &v) in s.pad_velocities.iter().enumerate() {
                    if v != 0 {
                        pads |= 1 << i;
                        max = max.max(v);
                    }
                }
                let mut cymbals = 0;
                for (i, &v) in s.cymbal_velocities.iter().enumerate() {
                    if v != 0 {
                        cymbals |= 1 << i;
                        max = max.max(v);
                    }
                }
                FourLaneDrumsState {
                    pads,
                    cymbals,
                    dpad: dpad_byte(s.dpad),
                    menu: menu_byte(s.menu.options, s.menu.share, s.menu.ps),
                    kick: kick_bits(s.kick1, s.kick2),
                    hit_velocity: max,
                }
            }
        };
        state.write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        match self.source {
            // Pads, cymbals, dpad, and hit velocity all pass through
            // disambiguation; nothing positional survives except the PS4
            // kick and menu bytes.
            FourLaneSource::XInput | FourLaneSource::Ps3 { .. } => None,
            FourLaneSource::Ps4 => match field {
                Kick => Some(RawSlot::bits(ps4::offsets::DRUM_KICK, 0x03)),
                MenuButtons => Some(RawSlot::bits(ps4::offsets::DRUM_MENU, 0x07)),
                _ => None,
            },
        }
    }
}
