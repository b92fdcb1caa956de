//! XInput subtype identifiers for rhythm instruments.
//!
//! XInput devices do not expose a USB VID/PID through the gamepad API; the
//! capability query returns a device subtype byte instead. The registry uses
//! that byte where a product ID would otherwise go.

/// XInput device subtypes (`XINPUT_CAPABILITIES.SubType`).
pub mod subtypes {
    /// Five-fret guitar.
    pub const GUITAR: u8 = 0x06;
    /// Five-fret guitar, alternate layout (tilt reported as a button).
    pub const GUITAR_ALTERNATE: u8 = 0x07;
    /// Four-lane drum kit.
    pub const DRUM_KIT: u8 = 0x08;
    /// Bass variant of the five-fret guitar; identical report layout.
    pub const GUITAR_BASS: u8 = 0x0B;
    /// DJ turntable deck.
    pub const TURNTABLE: u8 = 0x17;
    /// Six-fret guitar dongle. Enumerates as a plain gamepad subtype and is
    /// told apart by the wireless receiver's vendor descriptor.
    pub const GUITAR_LIVE: u8 = 0x01;
}

/// Fixed size of every XInput gamepad input report.
pub const REPORT_LEN: usize = 20;

/// Button mask bits (u16 LE at report bytes 2-3).
pub mod buttons {
    pub const DPAD_UP: u16 = 0x0001;
    pub const DPAD_DOWN: u16 = 0x0002;
    pub const DPAD_LEFT: u16 = 0x0004;
    pub const DPAD_RIGHT: u16 = 0x0008;
    pub const START: u16 = 0x0010;
    pub const BACK: u16 = 0x0020;
    pub const LEFT_THUMB: u16 = 0x0040;
    pub const RIGHT_THUMB: u16 = 0x0080;
    pub const LEFT_SHOULDER: u16 = 0x0100;
    pub const RIGHT_SHOULDER: u16 = 0x0200;
    pub const GUIDE: u16 = 0x0400;
    pub const A: u16 = 0x1000;
    pub const B: u16 = 0x2000;
    pub const X: u16 = 0x4000;
    pub const Y: u16 = 0x8000;
}

/// Axis byte offsets inside the 20-byte report.
pub mod offsets {
    /// Left trigger byte.
    pub const LEFT_TRIGGER: usize = 4;
    /// Right trigger byte.
    pub const RIGHT_TRIGGER: usize = 5;
    /// Left stick X (i16 LE); low byte first.
    pub const THUMB_LX: usize = 6;
    /// Left stick Y (i16 LE).
    pub const THUMB_LY: usize = 8;
    /// Right stick X (i16 LE).
    pub const THUMB_RX: usize = 10;
    /// Right stick Y (i16 LE).
    pub const THUMB_RY: usize = 12;
}
