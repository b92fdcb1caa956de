//! PS4 output report encoding.

/// Size of the six-fret dongle keep-alive output report.
pub const KEEP_ALIVE_REPORT_LEN: usize = 9;

/// The PS4 dongle truncates its input reports if it does not receive a
/// poke at least this often.
pub const KEEP_ALIVE_MAX_INTERVAL_SECS: u64 = 10;

/// Build the keep-alive poke for the PS4 six-fret dongle.
///
/// The payload is fixed; only periodic delivery matters.
pub fn build_keep_alive_report() -> [u8; KEEP_ALIVE_REPORT_LEN] {
    let mut report = [0u8; KEEP_ALIVE_REPORT_LEN];
    report[0] = 0x30;
    report[1] = 0x02;
    report[2] = 0x08;
    report[3] = 0x0A;
    report
}
