//! PS3/Wii U output report encoding.
//!
//! The only outbound traffic in this family is the six-fret dongle
//! keep-alive: without a periodic vendor poke the dongle silently truncates
//! its input reports to omit the extended data.

/// Length of the six-fret keep-alive output report.
pub const KEEP_ALIVE_REPORT_LEN: usize = 9;

/// Upper bound on the poke interval; beyond this the dongle stops
/// reporting full data.
pub const KEEP_ALIVE_MAX_INTERVAL_SECS: u64 = 8;

/// Build the six-fret dongle keep-alive report.
pub fn build_keep_alive_report() -> [u8; KEEP_ALIVE_REPORT_LEN] {
    [0x02, 0x08, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
}
