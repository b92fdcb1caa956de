//! Layout and naming stability.
//!
//! Host binding files reference canonical fields by serialized name and
//! downstream consumers overlay the packed buffers directly, so both the
//! JSON spellings and the byte offsets are frozen contracts.

use proptest::prelude::*;
use serde_json::json;

use openjam_canonical::{
    slot_of, CanonicalField, FieldSlot, FiveFretGuitarState, ProGuitarState, TurntableState,
};

#[test]
fn test_field_names_are_frozen() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(serde_json::to_value(CanonicalField::Frets)?, json!("Frets"));
    assert_eq!(
        serde_json::to_value(CanonicalField::HitVelocity)?,
        json!("HitVelocity")
    );
    assert_eq!(
        serde_json::to_value(CanonicalField::StringFret(3))?,
        json!({ "StringFret": 3 })
    );

    let back: CanonicalField = serde_json::from_value(json!({ "StringVelocity": 5 }))?;
    assert_eq!(back, CanonicalField::StringVelocity(5));
    Ok(())
}

#[test]
fn test_state_field_names_are_frozen() -> Result<(), Box<dyn std::error::Error>> {
    let state = FiveFretGuitarState {
        frets: 0x11,
        solo_frets: 0,
        dpad: 0x01,
        menu: 0x01,
        whammy: 0xC0,
        tilt: 0x40,
        pickup_notch: 3,
    };
    assert_eq!(
        serde_json::to_value(state)?,
        json!({
            "frets": 0x11,
            "solo_frets": 0,
            "dpad": 1,
            "menu": 1,
            "whammy": 0xC0,
            "tilt": 0x40,
            "pickup_notch": 3,
        })
    );
    Ok(())
}

#[test]
fn test_slot_table_is_frozen() -> Result<(), Box<dyn std::error::Error>> {
    // The turntable layout is the densest one; pin its full slot table.
    use CanonicalField::*;
    let fmt = TurntableState::FORMAT;
    let table: Vec<Option<FieldSlot>> = [
        LeftTable,
        RightTable,
        FaceButtons,
        DeckNav,
        LeftPlatterVelocity,
        RightPlatterVelocity,
        Crossfader,
        EffectsDial,
    ]
    .into_iter()
    .map(|f| slot_of(fmt, f))
    .collect();
    assert_eq!(
        serde_json::to_value(&table)?,
        json!([
            { "byte": 0, "mask": 0x07 },
            { "byte": 1, "mask": 0x07 },
            { "byte": 2, "mask": 0x0F },
            { "byte": 3, "mask": 0x3F },
            { "byte": 4, "mask": null },
            { "byte": 5, "mask": null },
            { "byte": 6, "mask": null },
            { "byte": 7, "mask": null },
        ])
    );
    Ok(())
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Repacking into a dirty buffer leaves no stale bytes: every byte is
    /// either a packed field or written zero.
    #[test]
    fn prop_five_fret_repack_owns_every_byte(
        frets in 0u8..=0x1F,
        dpad in 0u8..=0x0F,
        whammy in any::<u8>(),
        fill in any::<u8>(),
    ) {
        let state = FiveFretGuitarState { frets, dpad, whammy, ..Default::default() };
        let mut dirty = [fill; 8];
        state.write_to(&mut dirty).unwrap();
        prop_assert_eq!(dirty[7], 0, "reserved byte must be rewritten");
        prop_assert_eq!(FiveFretGuitarState::read_from(&dirty).unwrap(), state);
    }

    /// Pro guitar string arrays survive packing positionally.
    #[test]
    fn prop_pro_guitar_strings_positional(
        frets in proptest::array::uniform6(0u8..=22),
        velocities in proptest::array::uniform6(0u8..=0x7F),
    ) {
        let state = ProGuitarState {
            string_frets: frets,
            string_velocities: velocities,
            ..Default::default()
        };
        let mut buf = [0u8; 16];
        state.write_to(&mut buf).unwrap();
        prop_assert_eq!(&buf[..6], &frets[..]);
        prop_assert_eq!(&buf[6..12], &velocities[..]);
    }
}
