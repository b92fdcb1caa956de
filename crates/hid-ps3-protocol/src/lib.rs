//! PS3/Wii rhythm instrument HID protocol: report parsing and keep-alive
//! encoding.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! It provides pure functions and types that can be tested without hardware
//! or OS-level HID plumbing.
//!
//! Every instrument in this family shares one 27-byte report body. The Wii
//! dongles ship the identical body behind a leading report-ID byte of 0x00;
//! decoders take the presence flag as a parameter so the registry can probe
//! it once at connect time and reuse the same parsing for both lines.

pub mod ids;
pub mod input;
pub mod output;
pub mod types;

pub use ids::{
    buttons0, buttons1, offsets, ps3_product_ids, six_fret_product_ids, wii_product_ids,
    BODY_LEN, PS3_LICENSED_VENDOR_ID, REPORT_ID, SIX_FRET_DONGLE_VENDOR_ID,
    WII_INSTRUMENT_VENDOR_ID,
};
pub use input::{
    parse_five_fret_report, parse_four_lane_report, parse_pro_guitar_report,
    parse_six_fret_report, parse_turntable_report, Ps3FiveFretState, Ps3FourLaneState,
    Ps3MenuButtons, Ps3ProGuitarState, Ps3SixFretState, Ps3TurntableState,
};
pub use output::{
    build_keep_alive_report, KEEP_ALIVE_MAX_INTERVAL_SECS, KEEP_ALIVE_REPORT_LEN,
};
pub use types::{ps3_format, sentinels, Ps3Model, PS3_FORMAT, PS3_FORMAT_WITH_ID};
