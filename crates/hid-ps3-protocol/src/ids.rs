//! PS3/Wii USB vendor and product ID constants.
//!
//! The PS3-licensed instruments enumerate under the shared licensed-peripheral
//! vendor ID; the Wii instruments ship the same 27-byte report body behind a
//! different VID and a leading report-ID byte. The registry keys on
//! (VID, PID, report-ID presence), so both families resolve to the same
//! decoders here.

/// Shared vendor ID used by PS3-licensed instrument peripherals.
pub const PS3_LICENSED_VENDOR_ID: u16 = 0x12BA;

/// Vendor ID used by the Wii instrument line.
pub const WII_INSTRUMENT_VENDOR_ID: u16 = 0x1BAD;

/// Vendor ID of the six-fret dongle line.
pub const SIX_FRET_DONGLE_VENDOR_ID: u16 = 0x1430;

/// Known PS3 instrument product IDs (VID 0x12BA).
pub mod ps3_product_ids {
    /// Five-fret guitar, flag-style solo reporting.
    pub const FIVE_FRET_GUITAR: u16 = 0x0100;
    /// Legacy four-lane kit: never asserts the pad/cymbal flag bits.
    pub const LEGACY_DRUMS: u16 = 0x0120;
    /// DJ turntable deck.
    pub const TURNTABLE: u16 = 0x0140;
    /// Five-fret guitar, later hardware revision; same report layout.
    pub const FIVE_FRET_GUITAR_V2: u16 = 0x0200;
    /// Four-lane kit with pad/cymbal flags and velocity bytes.
    pub const FOUR_LANE_DRUMS: u16 = 0x0210;
    /// Six-string pro guitar (velocity-per-string reporting).
    pub const PRO_GUITAR: u16 = 0x2430;
    /// Pro guitar, alternate body; same report layout.
    pub const PRO_GUITAR_ALT: u16 = 0x2530;
}

/// Known Wii instrument product IDs (VID 0x1BAD). Reports carry a leading
/// report-ID byte of 0x00 ahead of the same 27-byte body.
pub mod wii_product_ids {
    /// Five-fret guitar.
    pub const FIVE_FRET_GUITAR: u16 = 0x0004;
    /// Four-lane kit with pad/cymbal flags.
    pub const FOUR_LANE_DRUMS: u16 = 0x0005;
    /// DJ turntable deck.
    pub const TURNTABLE: u16 = 0x0140;
}

/// Six-fret dongle product IDs (VID 0x1430).
pub mod six_fret_product_ids {
    /// PS3 / Wii U six-fret dongle. Requires the keep-alive poke at most
    /// every 8 seconds or it truncates its reports.
    pub const PS3_WIIU_DONGLE: u16 = 0x074B;
}

/// Report body size. Excludes the optional leading report-ID byte.
pub const BODY_LEN: usize = 27;

/// Report ID prepended by the Wii dongles.
pub const REPORT_ID: u8 = 0x00;

/// Button mask bits in body byte 0.
pub mod buttons0 {
    pub const SQUARE: u8 = 0x01;
    pub const CROSS: u8 = 0x02;
    pub const CIRCLE: u8 = 0x04;
    pub const TRIANGLE: u8 = 0x08;
    pub const L1: u8 = 0x10;
    pub const R1: u8 = 0x20;
    pub const L2: u8 = 0x40;
    pub const R2: u8 = 0x80;
}

/// Button mask bits in body byte 1.
pub mod buttons1 {
    pub const SELECT: u8 = 0x01;
    pub const START: u8 = 0x02;
    pub const L3: u8 = 0x04;
    pub const R3: u8 = 0x08;
    pub const SYSTEM: u8 = 0x10;
    /// Guitar solo-fret flag.
    pub const SOLO_FLAG: u8 = 0x40;
}

/// Axis and extension byte offsets inside the 27-byte body.
pub mod offsets {
    /// D-pad hat nibble.
    pub const HAT: usize = 2;
    /// Six-fret strum bar axis (0x80 = idle).
    pub const STRUM_BAR: usize = 3;
    /// Pickup switch raw position.
    pub const PICKUP: usize = 4;
    /// Whammy bar.
    pub const WHAMMY: usize = 5;
    /// Tilt sensor.
    pub const TILT: usize = 6;
    /// Drum velocities: yellow, red, green, blue.
    pub const DRUM_VELOCITIES: usize = 7;
    /// Pro guitar per-string velocities (6 bytes, low string first).
    pub const STRING_VELOCITIES: usize = 7;
    /// Pro guitar per-string fret numbers (6 bytes).
    pub const STRING_FRETS: usize = 13;
    /// Turntable left table buttons (bits 0-2).
    pub const LEFT_TABLE: usize = 7;
    /// Turntable right table buttons (bits 0-2).
    pub const RIGHT_TABLE: usize = 8;
    /// Turntable left platter velocity (i8).
    pub const LEFT_VELOCITY: usize = 9;
    /// Turntable right platter velocity (i8).
    pub const RIGHT_VELOCITY: usize = 10;
    /// Turntable crossfader.
    pub const CROSSFADER: usize = 11;
    /// Turntable effects dial.
    pub const EFFECTS_DIAL: usize = 12;
}
