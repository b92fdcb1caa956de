//! The pure disambiguation and compensation algorithms.
//!
//! Everything in this module is a function of its arguments (plus, for the
//! hold cells, one explicit byte of carried state). Translators compose
//! these; tests exercise them in isolation.

use openjam_canonical::{flags, PICKUP_NOTCH_COUNT};

/// Resolve flag-style solo frets into mutually exclusive regular/solo
/// groups. The hardware has one set of fret bits plus a solo boolean; the
/// non-selected group is forced to zero.
pub fn resolve_solo_frets(frets: u8, solo_flag: bool) -> (u8, u8) {
    if solo_flag {
        (0, frets)
    } else {
        (frets, 0)
    }
}

/// Split the signed six-fret strum axis into `(up, down)`. Zero is idle;
/// the two directions are never both asserted.
pub fn split_strum_axis(axis: i8) -> (bool, bool) {
    (axis > 0, axis < 0)
}

/// One string was struck this sample iff its velocity changed and is
/// nonzero. A sustained level is not a strike; neither is the decay to zero.
pub fn strum_edge(prev: u8, current: u8) -> bool {
    current != prev && current != 0
}

/// Quantize a raw pickup-switch byte into a notch in `0..PICKUP_NOTCH_COUNT`.
///
/// Equivalent to `raw / (256 / PICKUP_NOTCH_COUNT)`; the product form never
/// exceeds the top notch for raw = 0xFF.
pub fn quantize_notch(raw: u8) -> u8 {
    ((raw as u16 * PICKUP_NOTCH_COUNT as u16) >> 8) as u8
}

/// Sentinel-suppressing last-good-value cell for one axis.
///
/// Hardware emits `sentinel` after a period of no movement; feeding it
/// returns the last non-sentinel value instead. The seed is the device's
/// power-up default, so nothing is substituted before real input arrives.
#[derive(Debug, Clone, Copy)]
pub struct AxisHold {
    sentinel: u8,
    last: u8,
}

impl AxisHold {
    pub const fn new(sentinel: u8, seed: u8) -> Self {
        Self {
            sentinel,
            last: seed,
        }
    }

    pub fn feed(&mut self, raw: u8) -> u8 {
        if raw != self.sentinel {
            self.last = raw;
        }
        self.last
    }
}

/// Pickup-notch quantizer with sentinel suppression: the sentinel returns
/// the previously computed notch unchanged.
#[derive(Debug, Clone, Copy)]
pub struct NotchHold {
    sentinel: u8,
    notch: u8,
}

impl NotchHold {
    pub const fn new(sentinel: u8) -> Self {
        Self { sentinel, notch: 0 }
    }

    pub fn feed(&mut self, raw: u8) -> u8 {
        if raw != self.sentinel {
            self.notch = quantize_notch(raw);
        }
        self.notch
    }
}

/// Outcome of four-lane pad/cymbal disambiguation for one sample.
///
/// `dpad_up`/`dpad_down` are the post-suppression directional bits: a bit
/// consumed as a cymbal tie-breaker is cleared so the hit is not also read
/// as a directional press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadCymbalResolution {
    pub pads: u8,
    pub cymbals: u8,
    pub dpad_up: bool,
    pub dpad_down: bool,
}

/// Disambiguate four-lane color hits into pads and cymbals.
///
/// `colors` uses the canonical pad bit order (red 0x01, yellow 0x02, blue
/// 0x04, green 0x08). Red is always a pad; it has no cymbal. With both
/// flags asserted, yellow/blue/green are individually ambiguous and the
/// d-pad decides: up makes yellow the cymbal, down makes blue the cymbal,
/// neither makes green the cymbal. Up and down together is physically
/// impossible on a d-pad and is treated as up.
///
/// With neither flag asserted, a kit that has never asserted them is legacy
/// hardware and every hit is a pad; a kit known to assert them is reporting
/// plain face-button presses, which carry no hit at all.
pub fn resolve_pad_cymbal(
    colors: u8,
    pad_flag: bool,
    cymbal_flag: bool,
    dpad_up: bool,
    dpad_down: bool,
    flags_ever_seen: bool,
) -> PadCymbalResolution {
    use flags::{cymbal, pad};

    match (pad_flag, cymbal_flag) {
        (true, false) => PadCymbalResolution {
            pads: colors,
            cymbals: 0,
            dpad_up,
            dpad_down,
        },
        (false, true) => {
            let mut cymbals = 0;
            if colors & pad::YELLOW != 0 {
                cymbals |= cymbal::YELLOW;
            }
            if colors & pad::BLUE != 0 {
                cymbals |= cymbal::BLUE;
            }
            if colors & pad::GREEN != 0 {
                cymbals |= cymbal::GREEN;
            }
            PadCymbalResolution {
                pads: colors & pad::RED,
                cymbals,
                dpad_up,
                dpad_down,
            }
        }
        (true, true) => {
            let up = dpad_up;
            let down = dpad_down && !dpad_up;

            let mut pads = colors & pad::RED;
            let mut cymbals = 0;
            let mut consumed_up = false;
            let mut consumed_down = false;

            if colors & pad::YELLOW != 0 {
                if up {
                    cymbals |= cymbal::YELLOW;
                    consumed_up = true;
                } else {
                    pads |= pad::YELLOW;
                }
            }
            if colors & pad::BLUE != 0 {
                if down {
                    cymbals |= cymbal::BLUE;
                    consumed_down = true;
                } else {
                    pads |= pad::BLUE;
                }
            }
            if colors & pad::GREEN != 0 {
                if !up && !down {
                    cymbals |= cymbal::GREEN;
                } else {
                    pads |= pad::GREEN;
                }
            }

            PadCymbalResolution {
                pads,
                cymbals,
                dpad_up: dpad_up && !consumed_up,
                dpad_down: dpad_down && !consumed_down,
            }
        }
        (false, false) => PadCymbalResolution {
            pads: if flags_ever_seen { 0 } else { colors },
            cymbals: 0,
            dpad_up,
            dpad_down,
        },
    }
}

/// Clear face-button colors that are asserted on either table this sample.
///
/// Some decks reuse one physical switch for a table button and the same
/// color face button; the action must not be reported twice. Euphoria has
/// no table counterpart and passes through.
pub fn suppress_shared_faces(faces: u8, left_table: u8, right_table: u8) -> u8 {
    faces & !((left_table | right_table) & 0x07)
}

/// Pack discrete directional bools into the canonical d-pad byte.
pub fn pack_dpad(up: bool, down: bool, left: bool, right: bool) -> u8 {
    let mut bits = 0;
    if up {
        bits |= flags::dpad::UP;
    }
    if down {
        bits |= flags::dpad::DOWN;
    }
    if left {
        bits |= flags::dpad::LEFT;
    }
    if right {
        bits |= flags::dpad::RIGHT;
    }
    bits
}
