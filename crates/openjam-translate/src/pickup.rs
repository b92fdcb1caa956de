//! Standalone pickup-switch translator.
//!
//! Quantizes the five-fret guitar's pickup byte into the 1-byte notch
//! layout, for hosts that bind the switch as its own control surface
//! instead of reading it out of the full guitar layout.

use crate::algorithms::NotchHold;
use crate::{check_format, check_len, RawSlot, StateTranslator, TranslateResult};
use openjam_canonical::{CanonicalField, CanonicalFormat, PickupSwitchState};
use openjam_hid_common::bitfield::read_u8;
use openjam_hid_common::RawFormat;

use hid_ps3_protocol as ps3;
use hid_xinput_protocol as xinput;

/// Which five-fret hardware the pickup byte is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupSource {
    XInput,
    Ps3 { has_report_id: bool },
}

pub struct PickupSwitchTranslator {
    format: RawFormat,
    /// Offset of the pickup byte inside the full report.
    offset: usize,
    notch: NotchHold,
}

impl PickupSwitchTranslator {
    pub fn bind(source: PickupSource, declared: RawFormat) -> TranslateResult<Self> {
        let (format, offset, sentinel) = match source {
            PickupSource::XInput => (
                xinput::XINPUT_FORMAT,
                xinput::offsets::LEFT_TRIGGER,
                xinput::sentinels::PICKUP_REST,
            ),
            PickupSource::Ps3 { has_report_id } => (
                ps3::ps3_format(has_report_id),
                has_report_id as usize + ps3::offsets::PICKUP,
                ps3::sentinels::PICKUP_REST,
            ),
        };
        check_format(format, declared)?;
        Ok(Self {
            format,
            offset,
            notch: NotchHold::new(sentinel),
        })
    }
}

impl StateTranslator for PickupSwitchTranslator {
    fn raw_format(&self) -> RawFormat {
        self.format
    }

    fn canonical_format(&self) -> CanonicalFormat {
        PickupSwitchState::FORMAT
    }

    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()> {
        check_len(self.format, raw)?;
        let notch = self.notch.feed(read_u8(raw, self.offset));
        PickupSwitchState { notch }.write_to(out)?;
        Ok(())
    }

    fn raw_slot_of(&self, _field: CanonicalField) -> Option<RawSlot> {
        // The notch is quantized and sentinel-held; never positional.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantizes_and_holds() -> Result<(), Box<dyn std::error::Error>> {
        let mut t =
            PickupSwitchTranslator::bind(PickupSource::XInput, xinput::XINPUT_FORMAT)?;
        let mut raw = [0u8; 20];
        let mut out = [0u8; 1];

        raw[xinput::offsets::LEFT_TRIGGER] = 128;
        t.translate(&raw, &mut out)?;
        assert_eq!(out[0], 2);

        raw[xinput::offsets::LEFT_TRIGGER] = 0xFF; // at rest
        t.translate(&raw, &mut out)?;
        assert_eq!(out[0], 2, "sentinel holds the previous notch");
        Ok(())
    }

    #[test]
    fn test_ps3_offset_includes_report_id() -> Result<(), Box<dyn std::error::Error>> {
        let mut t = PickupSwitchTranslator::bind(
            PickupSource::Ps3 {
                has_report_id: true,
            },
            ps3::PS3_FORMAT_WITH_ID,
        )?;
        let mut raw = [0u8; 28];
        raw[1 + ps3::offsets::PICKUP] = 254; // top notch
        let mut out = [0u8; 1];
        t.translate(&raw, &mut out)?;
        assert_eq!(out[0], 4);
        Ok(())
    }

    #[test]
    fn test_bind_rejects_wrong_format() {
        assert!(
            PickupSwitchTranslator::bind(PickupSource::XInput, ps3::PS3_FORMAT).is_err()
        );
    }
}
