//! Raw-to-canonical state translation.
//!
//! Each translator turns one hardware family's raw report into the fixed
//! canonical layout for its instrument class. Translation is synchronous,
//! allocation-free, and single-threaded per device: several translators
//! carry per-device history (sentinel holds, strum-edge memory, the sticky
//! drum-flag bit), so one instance must never be shared across physical
//! devices.
//!
//! Binding a translator to the wrong raw format is a configuration defect
//! and fails fatally at setup; per-event hardware oddities (undefined hat
//! nibbles, sentinel bytes) are decoded as "no input" or held values,
//! never errors.

pub mod algorithms;
mod convert;
pub mod five_fret;
pub mod four_lane;
pub mod pickup;
pub mod pro_guitar;
pub mod six_fret;
pub mod turntable;

pub use five_fret::{DistinctSoloGuitarTranslator, FiveFretSource, FlagSoloGuitarTranslator};
pub use four_lane::{FourLaneSource, FourLaneTranslator};
pub use pickup::{PickupSource, PickupSwitchTranslator};
pub use pro_guitar::ProGuitarTranslator;
pub use six_fret::{SixFretSource, SixFretTranslator};
pub use turntable::{TurntableSource, TurntableTranslator};

use openjam_canonical::{CanonicalField, CanonicalFormat, LayoutError};
use openjam_hid_common::RawFormat;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranslateError {
    #[error(
        "Raw buffer does not match format 0x{expected_tag:02X}: expected {expected} bytes, got {actual}"
    )]
    FormatMismatch {
        expected_tag: u8,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Location of a field inside a raw report: byte offset plus, for flag
/// fields, the mask covering the field's bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSlot {
    pub byte: usize,
    /// `None` means the field owns the whole byte.
    pub mask: Option<u8>,
}

impl RawSlot {
    pub(crate) const fn byte(byte: usize) -> Self {
        Self { byte, mask: None }
    }

    pub(crate) const fn bits(byte: usize, mask: u8) -> Self {
        Self {
            byte,
            mask: Some(mask),
        }
    }
}

/// One hardware family's raw-report-to-canonical-layout translation.
///
/// `translate` may read and update per-device history; callers own one
/// instance per physical device and drop it on disconnect.
pub trait StateTranslator: Send {
    /// The raw format this translator was bound to (tag plus total size,
    /// report-ID byte included when the format carries one).
    fn raw_format(&self) -> RawFormat;

    /// The canonical layout this translator produces.
    fn canonical_format(&self) -> CanonicalFormat;

    /// Translate one raw report into `out`. The buffer length is re-checked
    /// and a mismatch is the same configuration defect as a bad bind.
    fn translate(&mut self, raw: &[u8], out: &mut [u8]) -> TranslateResult<()>;

    /// Single-field fast path: where `field` lives inside the raw buffer,
    /// for fields that translate positionally. Fields whose canonical value
    /// depends on disambiguation or carried state return `None`.
    fn raw_slot_of(&self, field: CanonicalField) -> Option<RawSlot>;
}

/// Shared bind/translate-time format check.
pub(crate) fn check_format(expected: RawFormat, declared: RawFormat) -> TranslateResult<()> {
    if declared != expected {
        return Err(TranslateError::FormatMismatch {
            expected_tag: expected.tag,
            expected: expected.size,
            actual: declared.size,
        });
    }
    Ok(())
}

/// Per-event buffer length check against the bound format.
pub(crate) fn check_len(expected: RawFormat, raw: &[u8]) -> TranslateResult<()> {
    if raw.len() != expected.size {
        return Err(TranslateError::FormatMismatch {
            expected_tag: expected.tag,
            expected: expected.size,
            actual: raw.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checks() {
        let fmt = RawFormat::new(0x01, 20);
        assert!(check_format(fmt, RawFormat::new(0x01, 20)).is_ok());
        assert_eq!(
            check_format(fmt, RawFormat::new(0x02, 27)),
            Err(TranslateError::FormatMismatch {
                expected_tag: 0x01,
                expected: 20,
                actual: 27,
            })
        );
        assert!(check_len(fmt, &[0u8; 20]).is_ok());
        assert!(check_len(fmt, &[0u8; 19]).is_err());
        assert!(check_len(fmt, &[0u8; 21]).is_err());
    }
}
