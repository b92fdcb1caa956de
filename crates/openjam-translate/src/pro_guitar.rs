//! Pro guitar translator.
//!
//! Strings report a velocity byte, not a press bit. A string counts as
//! struck only when its velocity changed since the previous sample and is
//! nonzero; the resulting pulse bitmask is recomputed from scratch on every
//! call so it lasts exactly one sample.

use crate::algorithms::{strum_edge, NotchHold};
use crate::convert::menu_byte;
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateError, TranslateResult};
use openjam_canonical::{CanonicalField, CanonicalFormat, ProGuitarState, PRO_STRING_COUNT};
use openjam_hid_common::RawFormat;

use hid_ps3_protocol as ps3;

pub struct ProGuitarTranslator {
    has_report_id: bool,
    format: RawFormat,
    prev_velocities: [u8; PRO_STRING_COUNT],
    notch: NotchHold,
}

impl ProGuitarTranslator {
    pub fn bind(has_report_id: bool, declared: RawFormat) -> TranslateResult<Self> {
        let format = ps3::ps3_format(has_report_id);
        check_format(format, declared)?;
        Ok(Self {
            has_report_id,
            format,
            prev_velocities: [0; PRO_STRING_COUNT],
            notch: NotchHold::new(ps3::sentinels::PICKUP_REST),
        })
    }
}

impl StateTranslator for ProGuitarTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        ProGuitarState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let s = ps3::parse_pro_guitar_report(raw, self.has_report_id).ok_or(
            TranslateError::FormatMismatch {
                expected_tag: self.format.tag,
                expected: self.format.size,
                actual: raw.len(),
            },
        )?;

        let mut strummed = 0u8;
        for (i, &v) in s.string_velocities.iter().enumerate() {
            if strum_edge(self.prev_velocities[i], v) {
                strummed |= 1 << i;
            }
        }
        self.prev_velocities = s.string_velocities;

        ProGuitarState {
            string_frets: s.string_frets,
            string_velocities: s.string_velocities,
            strummed,
            menu: menu_byte(s.menu.start, s.menu.select, s.menu.system),
            pickup_notch: self.notch.feed(s.pickup_raw),
        }
        .write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot> {
        use CanonicalField::*;
        let base = self.has_report_id as usize;
        match field {
            StringFret(s) if (s as usize) < PRO_STRING_COUNT => {
                Some(RawSlot::byte(base + ps3::offsets::STRING_FRETS + s as usize))
            }
            StringVelocity(s) if (s as usize) < PRO_STRING_COUNT => Some(RawSlot::bits(
                base + ps3::offsets::STRING_VELOCITIES + s as usize,
                0x7F,
            )),
            // Strummed strings and the pickup notch are history-dependent.
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(velocities: [u8; 6]) -> [u8; 27] {
        let mut raw = [0u8; 27];
        raw[ps3::offsets::HAT] = 0x08;
        raw[ps3::offsets::STRING_VELOCITIES..ps3::offsets::STRING_VELOCITIES + 6]
            .copy_from_slice(&velocities);
        raw
    }

    fn strummed(
        t: &mut ProGuitarTranslator,
        raw: &[u8],
    ) -> Result<u8, Box<dyn std::error::Error>> {
        let mut out = [0u8; 16];
        t.translate(raw, &mut out)?;
        Ok(ProGuitarState::read_from(&out)?.strummed)
    }

    #[test]
    fn test_strum_pulse_sequence() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = ProGuitarTranslator::bind(false, ps3::PS3_FORMAT)?;

        // String 1 velocity sequence 0, 80, 80, 0, 40.
        assert_eq!(strummed(&mut t, &report([0, 0, 0, 0, 0, 0]))?, 0);
        assert_eq!(strummed(&mut t, &report([80, 0, 0, 0, 0, 0]))?, 0b000001);
        assert_eq!(strummed(&mut t, &report([80, 0, 0, 0, 0, 0]))?, 0, "level is not a strike");
        assert_eq!(strummed(&mut t, &report([0, 0, 0, 0, 0, 0]))?, 0, "decay is not a strike");
        assert_eq!(strummed(&mut t, &report([40, 0, 0, 0, 0, 0]))?, 0b000001);
        Ok(())
    }

    #[test]
    fn test_independent_strings() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = ProGuitarTranslator::bind(false, ps3::PS3_FORMAT)?;
        assert_eq!(
            strummed(&mut t, &report([50, 0, 0, 0, 0, 60]))?,
            0b100001,
            "strings 1 and 6 struck together"
        );
        assert_eq!(strummed(&mut t, &report([50, 0, 0, 70, 0, 60]))?, 0b001000);
        Ok(())
    }

    #[test]
    fn test_frets_and_notch_carried() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = ProGuitarTranslator::bind(false, ps3::PS3_FORMAT)?;
        let mut raw = report([0; 6]);
        raw[ps3::offsets::STRING_FRETS + 2] = 7;
        raw[ps3::offsets::PICKUP] = 128; // notch 2

        let mut out = [0u8; 16];
        t.translate(&raw, &mut out)?;
        let state = ProGuitarState::read_from(&out)?;
        assert_eq!(state.string_frets[2], 7);
        assert_eq!(state.pickup_notch, 2);

        raw[ps3::offsets::PICKUP] = 0xFF; // at rest
        t.translate(&raw, &mut out)?;
        assert_eq!(ProGuitarState::read_from(&out)?.pickup_notch, 2);
        Ok(())
    }

    #[test]
    fn test_raw_slots_for_strings() -> Result<(), Box<dyn std::error::Error>> {
        let t = ProGuitarTranslator::bind(true, ps3::PS3_FORMAT_WITH_ID)?;
        assert_eq!(
            t.raw_slot_of(CanonicalField::StringFret(0)),
            Some(RawSlot::byte(1 + ps3::offsets::STRING_FRETS))
        );
        assert_eq!(t.raw_slot_of(CanonicalField::StringFret(6)), None);
        assert_eq!(t.raw_slot_of(CanonicalField::StrummedStrings), None);
        Ok(())
    }
}
