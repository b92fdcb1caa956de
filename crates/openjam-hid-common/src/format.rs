//! Raw report format identity.

use serde::{Deserialize, Serialize};

/// Identifies one raw report format: a tag byte and the total report size
/// in bytes (including the report-ID byte when the format carries one).
///
/// Raw tags keep the high bit clear; canonical layout tags set it. A
/// translator bound to the wrong format fails at setup, not per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawFormat {
    pub tag: u8,
    pub size: usize,
}

impl RawFormat {
    pub const fn new(tag: u8, size: usize) -> Self {
        Self { tag, size }
    }
}
