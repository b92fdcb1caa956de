//! PS4 USB vendor and product ID constants.

/// Vendor ID of the licensed PS4 instrument line.
pub const PS4_INSTRUMENT_VENDOR_ID: u16 = 0x0E6F;

/// Vendor ID of the PS4 six-fret dongle.
pub const PS4_SIX_FRET_VENDOR_ID: u16 = 0x1430;

/// Known PS4 instrument product IDs (VID 0x0E6F).
pub mod product_ids {
    /// Five-fret guitar with distinct solo-fret bit group.
    pub const FIVE_FRET_GUITAR: u16 = 0x0170;
    /// Four-lane kit reporting independent per-pad and per-cymbal
    /// velocity bytes (no disambiguation needed).
    pub const FOUR_LANE_DRUMS: u16 = 0x0174;
}

/// Six-fret dongle product IDs (VID 0x1430).
pub mod six_fret_product_ids {
    /// PS4 six-fret dongle. Requires the keep-alive poke at most every
    /// 10 seconds or it truncates its reports.
    pub const PS4_DONGLE: u16 = 0x07BB;
}

/// Vendor input report ID carried by every PS4 instrument report.
pub const REPORT_ID: u8 = 0x01;

/// Fixed total report size, including the report-ID byte.
pub const REPORT_LEN: usize = 64;

/// Byte offsets inside the report (report-ID byte at offset 0).
pub mod offsets {
    /// Five-fret: regular frets, bits 0-4 (green through orange).
    pub const GUITAR_FRETS: usize = 1;
    /// Five-fret: solo frets, bits 0-4 (same order).
    pub const GUITAR_SOLO_FRETS: usize = 2;
    /// Five-fret: d-pad hat nibble.
    pub const GUITAR_HAT: usize = 3;
    /// Five-fret: whammy bar.
    pub const GUITAR_WHAMMY: usize = 4;
    /// Five-fret: tilt sensor.
    pub const GUITAR_TILT: usize = 5;
    /// Five-fret: pickup switch raw position.
    pub const GUITAR_PICKUP: usize = 6;
    /// Five-fret: menu button mask.
    pub const GUITAR_MENU: usize = 7;

    /// Drums: per-pad velocities, red/yellow/blue/green.
    pub const DRUM_PAD_VELOCITIES: usize = 1;
    /// Drums: per-cymbal velocities, yellow/blue/green.
    pub const DRUM_CYMBAL_VELOCITIES: usize = 5;
    /// Drums: kick bits 0-1.
    pub const DRUM_KICK: usize = 8;
    /// Drums: d-pad hat nibble.
    pub const DRUM_HAT: usize = 9;
    /// Drums: menu button mask.
    pub const DRUM_MENU: usize = 10;

    /// Six-fret: fret bits 0-5 (black1-3, white1-3).
    pub const SIX_FRET_FRETS: usize = 1;
    /// Six-fret: strum bar (i8; negative = down, positive = up).
    pub const SIX_FRET_STRUM: usize = 2;
    /// Six-fret: whammy bar.
    pub const SIX_FRET_WHAMMY: usize = 3;
    /// Six-fret: tilt sensor.
    pub const SIX_FRET_TILT: usize = 4;
    /// Six-fret: d-pad hat nibble.
    pub const SIX_FRET_HAT: usize = 5;
    /// Six-fret: menu button mask.
    pub const SIX_FRET_MENU: usize = 6;
}

/// Menu button mask bits.
pub mod menu_buttons {
    /// Options (start).
    pub const OPTIONS: u8 = 0x01;
    /// Share (select).
    pub const SHARE: u8 = 0x02;
    /// PS (system).
    pub const PS: u8 = 0x04;
}
