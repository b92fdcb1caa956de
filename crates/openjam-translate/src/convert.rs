//! Small packing helpers shared by the translator modules.

use crate::algorithms::pack_dpad;
use openjam_canonical::flags::menu;
use openjam_hid_common::HatDpad;

pub(crate) fn dpad_byte(hat: HatDpad) -> u8 {
    pack_dpad(hat.up, hat.down, hat.left, hat.right)
}

pub(crate) fn menu_byte(start: bool, select: bool, system: bool) -> u8 {
    let mut bits = 0;
    if start {
        bits |= menu::START;
    }
    if select {
        bits |= menu::SELECT;
    }
    if system {
        bits |= menu::SYSTEM;
    }
    bits
}
