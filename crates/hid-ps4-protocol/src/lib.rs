//! PS4 rhythm instrument HID protocol: report parsing and keep-alive
//! encoding.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! It provides pure functions and types that can be tested without hardware
//! or OS-level HID plumbing.
//!
//! The PS4 line reports pre-disambiguated state: distinct solo-fret bits on
//! the guitar and independent pad/cymbal velocity channels on the drum kit,
//! so the translators built on this crate need no flag-resolution logic.

pub mod ids;
pub mod input;
pub mod output;
pub mod types;

pub use ids::{
    menu_buttons, offsets, product_ids, six_fret_product_ids, PS4_INSTRUMENT_VENDOR_ID,
    PS4_SIX_FRET_VENDOR_ID, REPORT_ID, REPORT_LEN,
};
pub use input::{
    parse_five_fret_report, parse_four_lane_report, parse_six_fret_report, Ps4FiveFretState,
    Ps4FourLaneState, Ps4MenuButtons, Ps4SixFretState,
};
pub use output::{
    build_keep_alive_report, KEEP_ALIVE_MAX_INTERVAL_SECS, KEEP_ALIVE_REPORT_LEN,
};
pub use types::{sentinels, Ps4Model, PS4_FORMAT};
