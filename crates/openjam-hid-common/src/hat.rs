//! HID hat-switch (d-pad) nibble decoding.

/// Discrete d-pad state decoded from a hat nibble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HatDpad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Decode the standard HID hat nibble (0 = north, clockwise through 7 =
/// north-west). Values 8 and above are "neutral"; hardware emits undefined
/// transients there, which decode as no input rather than an error.
pub fn decode_hat(nibble: u8) -> HatDpad {
    match nibble {
        0 => HatDpad { up: true, ..Default::default() },
        1 => HatDpad { up: true, right: true, ..Default::default() },
        2 => HatDpad { right: true, ..Default::default() },
        3 => HatDpad { down: true, right: true, ..Default::default() },
        4 => HatDpad { down: true, ..Default::default() },
        5 => HatDpad { down: true, left: true, ..Default::default() },
        6 => HatDpad { left: true, ..Default::default() },
        7 => HatDpad { up: true, left: true, ..Default::default() },
        _ => HatDpad::default(),
    }
}
