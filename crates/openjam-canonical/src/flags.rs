//! Bitmask constants for the canonical layouts.
//!
//! These are the logical value sets shared between decoders, disambiguation
//! functions, and downstream bindings. The bit assignments are part of the
//! canonical contract.

/// Five-fret guitar fret bits (canonical byte 0 regular, byte 1 solo).
pub mod fret {
    pub const GREEN: u8 = 0x01;
    pub const RED: u8 = 0x02;
    pub const YELLOW: u8 = 0x04;
    pub const BLUE: u8 = 0x08;
    pub const ORANGE: u8 = 0x10;
    pub const ALL: u8 = 0x1F;
}

/// Six-fret guitar fret bits.
pub mod six_fret {
    pub const BLACK1: u8 = 0x01;
    pub const BLACK2: u8 = 0x02;
    pub const BLACK3: u8 = 0x04;
    pub const WHITE1: u8 = 0x08;
    pub const WHITE2: u8 = 0x10;
    pub const WHITE3: u8 = 0x20;
    pub const ALL: u8 = 0x3F;
}

/// Strum direction bits (six-fret byte 1). Never both set.
pub mod strum {
    pub const UP: u8 = 0x01;
    pub const DOWN: u8 = 0x02;
}

/// Directional pad bits.
pub mod dpad {
    pub const UP: u8 = 0x01;
    pub const DOWN: u8 = 0x02;
    pub const LEFT: u8 = 0x04;
    pub const RIGHT: u8 = 0x08;
}

/// Menu button bits.
pub mod menu {
    pub const START: u8 = 0x01;
    pub const SELECT: u8 = 0x02;
    pub const SYSTEM: u8 = 0x04;
}

/// Four-lane drum pad bits (canonical byte 0).
pub mod pad {
    pub const RED: u8 = 0x01;
    pub const YELLOW: u8 = 0x02;
    pub const BLUE: u8 = 0x04;
    pub const GREEN: u8 = 0x08;
}

/// Four-lane cymbal bits (canonical byte 1). Red has no cymbal.
pub mod cymbal {
    pub const YELLOW: u8 = 0x01;
    pub const BLUE: u8 = 0x02;
    pub const GREEN: u8 = 0x04;
}

/// Kick pedal bits (four-lane byte 4).
pub mod kick {
    pub const KICK1: u8 = 0x01;
    pub const KICK2: u8 = 0x02;
}

/// Turntable platter button bits (left/right table bytes).
pub mod table {
    pub const GREEN: u8 = 0x01;
    pub const RED: u8 = 0x02;
    pub const BLUE: u8 = 0x04;
}

/// Turntable face button bits (post-suppression).
pub mod face {
    pub const GREEN: u8 = 0x01;
    pub const RED: u8 = 0x02;
    pub const BLUE: u8 = 0x04;
    pub const EUPHORIA: u8 = 0x08;
}

/// Turntable navigation byte (byte 3): dpad plus start/select.
pub mod deck_nav {
    pub const UP: u8 = 0x01;
    pub const DOWN: u8 = 0x02;
    pub const LEFT: u8 = 0x04;
    pub const RIGHT: u8 = 0x08;
    pub const START: u8 = 0x10;
    pub const SELECT: u8 = 0x20;
}
