//! PS4 vendor input report parsing.
//!
//! All functions are pure and allocation-free. Unlike the flag-style
//! families, the PS4 hardware reports already-disambiguated data: the
//! guitar carries separate regular and solo fret bit groups, and the drum
//! kit carries independent per-pad and per-cymbal velocity bytes.

use crate::ids::{menu_buttons, offsets, REPORT_ID, REPORT_LEN};
use openjam_hid_common::bitfield::ReportView;
use openjam_hid_common::hat::{decode_hat, HatDpad};

/// Menu buttons shared by every PS4 instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps4MenuButtons {
    pub options: bool,
    pub share: bool,
    pub ps: bool,
}

fn checked(data: &[u8]) -> Option<ReportView<'_>> {
    let view = ReportView::new(data, REPORT_LEN).ok()?;
    if view.u8_at(0) != REPORT_ID {
        return None;
    }
    Some(view)
}

fn parse_menu(view: ReportView<'_>, offset: usize) -> Ps4MenuButtons {
    Ps4MenuButtons {
        options: view.bit(offset, menu_buttons::OPTIONS),
        share: view.bit(offset, menu_buttons::SHARE),
        ps: view.bit(offset, menu_buttons::PS),
    }
}

/// Parsed state from a PS4 five-fret guitar report.
///
/// Distinct-style solo hardware: regular and solo frets are separate bit
/// groups on the wire, so no precedence logic applies downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps4FiveFretState {
    /// Regular frets, green bit 0 through orange bit 4.
    pub frets: u8,
    /// Solo frets, same bit order.
    pub solo_frets: u8,
    pub dpad: HatDpad,
    pub menu: Ps4MenuButtons,
    pub whammy: u8,
    pub tilt: u8,
    pub pickup_raw: u8,
}

/// Parse a PS4 five-fret guitar report (ID 0x01, 64 bytes).
///
/// Returns `None` if `data` is too short or does not begin with report
/// ID 0x01.
pub fn parse_five_fret_report(data: &[u8]) -> Option<Ps4FiveFretState> {
    let view = checked(data)?;
    Some(Ps4FiveFretState {
        frets: view.u8_at(offsets::GUITAR_FRETS) & 0x1F,
        solo_frets: view.u8_at(offsets::GUITAR_SOLO_FRETS) & 0x1F,
        dpad: decode_hat(view.u8_at(offsets::GUITAR_HAT) & 0x0F),
        menu: parse_menu(view, offsets::GUITAR_MENU),
        whammy: view.u8_at(offsets::GUITAR_WHAMMY),
        tilt: view.u8_at(offsets::GUITAR_TILT),
        pickup_raw: view.u8_at(offsets::GUITAR_PICKUP),
    })
}

/// Parsed state from a PS4 four-lane drum report.
///
/// Velocity bytes double as presence: nonzero = hit this sample. Pads and
/// cymbals are independent channels, so no flag disambiguation is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps4FourLaneState {
    /// Pad velocities in red, yellow, blue, green order.
    pub pad_velocities: [u8; 4],
    /// Cymbal velocities in yellow, blue, green order.
    pub cymbal_velocities: [u8; 3],
    pub kick1: bool,
    pub kick2: bool,
    pub dpad: HatDpad,
    pub menu: Ps4MenuButtons,
}

/// Parse a PS4 four-lane drum report (ID 0x01, 64 bytes).
pub fn parse_four_lane_report(data: &[u8]) -> Option<Ps4FourLaneState> {
    let view = checked(data)?;
    let p = offsets::DRUM_PAD_VELOCITIES;
    let c = offsets::DRUM_CYMBAL_VELOCITIES;
    Some(Ps4FourLaneState {
        pad_velocities: [
            view.u8_at(p),
            view.u8_at(p + 1),
            view.u8_at(p + 2),
            view.u8_at(p + 3),
        ],
        cymbal_velocities: [view.u8_at(c), view.u8_at(c + 1), view.u8_at(c + 2)],
        kick1: view.bit(offsets::DRUM_KICK, 0x01),
        kick2: view.bit(offsets::DRUM_KICK, 0x02),
        dpad: decode_hat(view.u8_at(offsets::DRUM_HAT) & 0x0F),
        menu: parse_menu(view, offsets::DRUM_MENU),
    })
}

/// Parsed state from a PS4 six-fret guitar report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ps4SixFretState {
    /// Fret bits: black1-3 at bits 0-2, white1-3 at bits 3-5.
    pub frets: u8,
    /// Strum bar: negative = strum-down, positive = strum-up, 0 = idle.
    pub strum_bar: i8,
    pub whammy: u8,
    pub tilt: u8,
    pub dpad: HatDpad,
    pub menu: Ps4MenuButtons,
}

/// Parse a PS4 six-fret guitar report (ID 0x01, 64 bytes).
pub fn parse_six_fret_report(data: &[u8]) -> Option<Ps4SixFretState> {
    let view = checked(data)?;
    Some(Ps4SixFretState {
        frets: view.u8_at(offsets::SIX_FRET_FRETS) & 0x3F,
        strum_bar: view.i8_at(offsets::SIX_FRET_STRUM),
        whammy: view.u8_at(offsets::SIX_FRET_WHAMMY),
        tilt: view.u8_at(offsets::SIX_FRET_TILT),
        dpad: decode_hat(view.u8_at(offsets::SIX_FRET_HAT) & 0x0F),
        menu: parse_menu(view, offsets::SIX_FRET_MENU),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> [u8; 64] {
        let mut data = [0u8; 64];
        data[0] = REPORT_ID;
        data[offsets::GUITAR_HAT] = 0x08;
        data
    }

    #[test]
    fn test_five_fret_distinct_groups() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = empty_report();
        data[offsets::GUITAR_FRETS] = 0b0_0011; // green + red
        data[offsets::GUITAR_SOLO_FRETS] = 0b1_0000; // solo orange
        let state = parse_five_fret_report(&data).ok_or("parse failed")?;
        assert_eq!(state.frets, 0b00011);
        assert_eq!(state.solo_frets, 0b10000);
        Ok(())
    }

    /// Kill mutant: `& 0x1F` → `| 0x1F` in fret extraction.
    #[test]
    fn test_five_fret_upper_bits_masked() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = empty_report();
        data[offsets::GUITAR_FRETS] = 0xE0; // only non-fret bits
        let state = parse_five_fret_report(&data).ok_or("parse failed")?;
        assert_eq!(state.frets, 0);
        Ok(())
    }

    #[test]
    fn test_five_fret_rejects_wrong_report_id() {
        let mut data = empty_report();
        data[0] = 0x02;
        assert!(parse_five_fret_report(&data).is_none());
    }

    #[test]
    fn test_five_fret_rejects_short_data() {
        let data = [REPORT_ID; 32];
        assert!(parse_five_fret_report(&data).is_none());
    }

    /// Kill mutant: `<` → `<=` in the view length check.
    #[test]
    fn test_report_len_boundary() {
        let data = empty_report();
        assert!(parse_five_fret_report(&data[..REPORT_LEN - 1]).is_none());
        assert!(parse_five_fret_report(&data).is_some());
    }

    #[test]
    fn test_four_lane_velocity_channels() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = empty_report();
        data[offsets::DRUM_PAD_VELOCITIES] = 90; // red pad
        data[offsets::DRUM_CYMBAL_VELOCITIES + 1] = 60; // blue cymbal
        data[offsets::DRUM_KICK] = 0x03;
        let state = parse_four_lane_report(&data).ok_or("parse failed")?;
        assert_eq!(state.pad_velocities, [90, 0, 0, 0]);
        assert_eq!(state.cymbal_velocities, [0, 60, 0]);
        assert!(state.kick1 && state.kick2);
        Ok(())
    }

    #[test]
    fn test_six_fret_strum_sign() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = empty_report();
        data[offsets::SIX_FRET_FRETS] = 0b10_0001; // black1 + white3
        data[offsets::SIX_FRET_STRUM] = (-50i8) as u8;
        let state = parse_six_fret_report(&data).ok_or("parse failed")?;
        assert_eq!(state.frets, 0b100001);
        assert_eq!(state.strum_bar, -50);
        Ok(())
    }

    #[test]
    fn test_menu_buttons() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = empty_report();
        data[offsets::GUITAR_MENU] = menu_buttons::OPTIONS | menu_buttons::PS;
        let state = parse_five_fret_report(&data).ok_or("parse failed")?;
        assert!(state.menu.options && state.menu.ps && !state.menu.share);
        Ok(())
    }
}
