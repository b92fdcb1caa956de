//! Connect-time device resolution.
//!
//! The host probes a device once at connect: which input platform it
//! arrived on, its vendor/product identity (XInput reports a capability
//! subtype instead), and whether its HID reports carry a leading report-ID
//! byte. [`resolve`] maps that key through a closed match table to the
//! decoder family, a freshly bound translator instance, and the keep-alive
//! plan when the hardware needs one. Nothing on the per-event path ever
//! re-matches; unknown devices fail here, at connect time.

use std::time::Duration;

use openjam_translate::{
    DistinctSoloGuitarTranslator, FiveFretSource, FlagSoloGuitarTranslator, FourLaneSource,
    FourLaneTranslator, ProGuitarTranslator, SixFretSource, SixFretTranslator, StateTranslator,
    TranslateError, TurntableSource, TurntableTranslator,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use hid_ps3_protocol as ps3;
use hid_ps4_protocol as ps4;
use hid_xinput_protocol as xinput;

/// How the device reached the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// XInput gamepad slot; no VID/PID, identified by capability subtype.
    XInput,
    /// Raw HID enumeration (PS3, Wii, and PS4 instrument lines).
    Hid,
}

/// Connect-time identity of one device.
///
/// For XInput devices `vendor_id` is zero and `product_id` carries the
/// capability subtype byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceKey {
    pub platform: Platform,
    pub vendor_id: u16,
    pub product_id: u16,
    pub has_report_id: bool,
}

/// Which raw decoder family serves the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoderId {
    XInputFiveFret,
    XInputAltFiveFret,
    XInputSixFret,
    XInputFourLane,
    XInputTurntable,
    Ps3FiveFret,
    Ps3FourLane,
    Ps3SixFret,
    Ps3ProGuitar,
    Ps3Turntable,
    Ps4FiveFret,
    Ps4FourLane,
    Ps4SixFret,
}

/// Scheduled output poke a device needs to keep reporting full-resolution
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAlivePlan {
    pub payload: Vec<u8>,
    pub max_interval: Duration,
}

/// Everything the host needs to run one connected device.
pub struct DeviceBinding {
    pub decoder: DecoderId,
    pub translator: Box<dyn StateTranslator>,
    pub keep_alive: Option<KeepAlivePlan>,
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(
        "Unsupported device: platform {platform:?}, vendor 0x{vendor_id:04X}, product 0x{product_id:04X}"
    )]
    UnsupportedDevice {
        platform: Platform,
        vendor_id: u16,
        product_id: u16,
    },

    #[error("Translator setup failed: {0}")]
    Translate(#[from] TranslateError),
}

fn ps3_keep_alive() -> KeepAlivePlan {
    KeepAlivePlan {
        payload: ps3::build_keep_alive_report().to_vec(),
        max_interval: Duration::from_secs(ps3::KEEP_ALIVE_MAX_INTERVAL_SECS),
    }
}

fn ps4_keep_alive() -> KeepAlivePlan {
    KeepAlivePlan {
        payload: ps4::build_keep_alive_report().to_vec(),
        max_interval: Duration::from_secs(ps4::KEEP_ALIVE_MAX_INTERVAL_SECS),
    }
}

fn unsupported(key: &DeviceKey) -> RegistryError {
    warn!(
        platform = ?key.platform,
        vendor_id = format_args!("0x{:04X}", key.vendor_id),
        product_id = format_args!("0x{:04X}", key.product_id),
        "no decoder for device"
    );
    RegistryError::UnsupportedDevice {
        platform: key.platform,
        vendor_id: key.vendor_id,
        product_id: key.product_id,
    }
}

fn resolve_xinput(key: &DeviceKey) -> Result<DeviceBinding, RegistryError> {
    let fmt = xinput::XINPUT_FORMAT;
    let subtype = (key.product_id & 0xFF) as u8;
    let model = xinput::XInputModel::from_subtype(subtype).ok_or_else(|| unsupported(key))?;
    let binding = match model {
        xinput::XInputModel::FiveFretGuitar => DeviceBinding {
            decoder: DecoderId::XInputFiveFret,
            translator: Box::new(FlagSoloGuitarTranslator::bind(FiveFretSource::XInput, fmt)?),
            keep_alive: None,
        },
        xinput::XInputModel::AltFiveFretGuitar => DeviceBinding {
            decoder: DecoderId::XInputAltFiveFret,
            translator: Box::new(FlagSoloGuitarTranslator::bind(
                FiveFretSource::XInputAlt,
                fmt,
            )?),
            keep_alive: None,
        },
        xinput::XInputModel::SixFretGuitar => DeviceBinding {
            decoder: DecoderId::XInputSixFret,
            translator: Box::new(SixFretTranslator::bind(SixFretSource::XInput, fmt)?),
            keep_alive: None,
        },
        xinput::XInputModel::FourLaneDrums => DeviceBinding {
            decoder: DecoderId::XInputFourLane,
            translator: Box::new(FourLaneTranslator::bind(FourLaneSource::XInput, fmt)?),
            keep_alive: None,
        },
        xinput::XInputModel::Turntable => DeviceBinding {
            decoder: DecoderId::XInputTurntable,
            translator: Box::new(TurntableTranslator::bind(TurntableSource::XInput, fmt)?),
            keep_alive: None,
        },
    };
    Ok(binding)
}

fn resolve_ps3_model(
    model: ps3::Ps3Model,
    has_report_id: bool,
) -> Result<DeviceBinding, RegistryError> {
    let fmt = ps3::ps3_format(has_report_id);
    let binding = match model {
        ps3::Ps3Model::FiveFretGuitar => DeviceBinding {
            decoder: DecoderId::Ps3FiveFret,
            translator: Box::new(FlagSoloGuitarTranslator::bind(
                FiveFretSource::Ps3 { has_report_id },
                fmt,
            )?),
            keep_alive: None,
        },
        // Legacy kits bind the same translator; its sticky marker bit just
        // never gets set.
        ps3::Ps3Model::FourLaneDrums | ps3::Ps3Model::LegacyFourLaneDrums => DeviceBinding {
            decoder: DecoderId::Ps3FourLane,
            translator: Box::new(FourLaneTranslator::bind(
                FourLaneSource::Ps3 { has_report_id },
                fmt,
            )?),
            keep_alive: None,
        },
        ps3::Ps3Model::SixFretGuitar => DeviceBinding {
            decoder: DecoderId::Ps3SixFret,
            translator: Box::new(SixFretTranslator::bind(
                SixFretSource::Ps3 { has_report_id },
                fmt,
            )?),
            keep_alive: Some(ps3_keep_alive()),
        },
        ps3::Ps3Model::ProGuitar => DeviceBinding {
            decoder: DecoderId::Ps3ProGuitar,
            translator: Box::new(ProGuitarTranslator::bind(has_report_id, fmt)?),
            keep_alive: None,
        },
        ps3::Ps3Model::Turntable => DeviceBinding {
            decoder: DecoderId::Ps3Turntable,
            translator: Box::new(TurntableTranslator::bind(
                TurntableSource::Ps3 { has_report_id },
                fmt,
            )?),
            keep_alive: None,
        },
    };
    Ok(binding)
}

fn resolve_ps4_model(model: ps4::Ps4Model) -> Result<DeviceBinding, RegistryError> {
    let fmt = ps4::PS4_FORMAT;
    let binding = match model {
        ps4::Ps4Model::FiveFretGuitar => DeviceBinding {
            decoder: DecoderId::Ps4FiveFret,
            translator: Box::new(DistinctSoloGuitarTranslator::bind(fmt)?),
            keep_alive: None,
        },
        ps4::Ps4Model::FourLaneDrums => DeviceBinding {
            decoder: DecoderId::Ps4FourLane,
            translator: Box::new(FourLaneTranslator::bind(FourLaneSource::Ps4, fmt)?),
            keep_alive: None,
        },
        ps4::Ps4Model::SixFretGuitar => DeviceBinding {
            decoder: DecoderId::Ps4SixFret,
            translator: Box::new(SixFretTranslator::bind(SixFretSource::Ps4, fmt)?),
            keep_alive: Some(ps4_keep_alive()),
        },
    };
    Ok(binding)
}

fn resolve_hid(key: &DeviceKey) -> Result<DeviceBinding, RegistryError> {
    match key.vendor_id {
        ps3::PS3_LICENSED_VENDOR_ID => ps3::Ps3Model::from_ps3_product(key.product_id)
            .ok_or_else(|| unsupported(key))
            .and_then(|m| resolve_ps3_model(m, key.has_report_id)),
        ps3::WII_INSTRUMENT_VENDOR_ID => ps3::Ps3Model::from_wii_product(key.product_id)
            .ok_or_else(|| unsupported(key))
            .and_then(|m| resolve_ps3_model(m, key.has_report_id)),
        // The six-fret dongle vendor ships both generations; the product ID
        // separates the 27-byte and 64-byte report lines.
        ps3::SIX_FRET_DONGLE_VENDOR_ID => {
            if let Some(m) = ps3::Ps3Model::from_dongle_product(key.product_id) {
                resolve_ps3_model(m, key.has_report_id)
            } else if let Some(m) = ps4::Ps4Model::from_dongle_product(key.product_id) {
                resolve_ps4_model(m)
            } else {
                Err(unsupported(key))
            }
        }
        ps4::PS4_INSTRUMENT_VENDOR_ID => ps4::Ps4Model::from_product(key.product_id)
            .ok_or_else(|| unsupported(key))
            .and_then(resolve_ps4_model),
        _ => Err(unsupported(key)),
    }
}

/// Resolve a connect-time device key to its binding.
pub fn resolve(key: &DeviceKey) -> Result<DeviceBinding, RegistryError> {
    let binding = match key.platform {
        Platform::XInput => resolve_xinput(key)?,
        Platform::Hid => resolve_hid(key)?,
    };
    debug!(
        decoder = ?binding.decoder,
        keep_alive = binding.keep_alive.is_some(),
        "resolved device binding"
    );
    Ok(binding)
}
