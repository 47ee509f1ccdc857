//! Merge-policy property tests
//!
//! The fill-if-empty invariant, checked across arbitrary interleavings of
//! user edits and adapter merges rather than a handful of hand-picked orders.

use std::collections::HashMap;

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use agroyield_app::services::FormSession;
use shared::{Coordinate, Farm, FormField, RawWeatherSample, SoilSample, SoilType};

const GEODATA_FIELDS: [FormField; 6] = [
    FormField::Nitrogen,
    FormField::Phosphorus,
    FormField::Potassium,
    FormField::Ph,
    FormField::Temperature,
    FormField::Humidity,
];

#[derive(Debug, Clone)]
enum Op {
    /// User types into one of the auto-fillable fields
    Edit(usize),
    Weather(RawWeatherSample),
    Soil(SoilSample),
}

fn weather_op() -> impl Strategy<Value = Op> {
    (-10.0..50.0f64, 0.0..100.0f64).prop_map(|(temp, humidity)| {
        Op::Weather(RawWeatherSample {
            temperature_celsius: temp,
            relative_humidity_percent: humidity,
        })
    })
}

fn soil_op() -> impl Strategy<Value = Op> {
    (
        proptest::option::of(0.0..200.0f64),
        proptest::option::of(0.0..200.0f64),
        proptest::option::of(0.0..200.0f64),
        proptest::option::of(0.0..14.0f64),
    )
        .prop_map(|(nitrogen, phosphorus, potassium, ph)| {
            Op::Soil(SoilSample {
                nitrogen,
                phosphorus,
                potassium,
                ph,
            })
        })
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..GEODATA_FIELDS.len()).prop_map(Op::Edit),
        weather_op(),
        soil_op(),
    ]
}

fn merge_op() -> impl Strategy<Value = Op> {
    prop_oneof![weather_op(), soil_op()]
}

fn farm(latitude: f64) -> Farm {
    Farm {
        farm_id: Uuid::new_v4(),
        name: "Test farm".to_string(),
        location: Coordinate::new(latitude, 77.0).unwrap(),
        soil_type: SoilType::Black,
        area_ha: 2.0,
        created_at: Utc::now(),
    }
}

proptest! {
    /// Whatever order edits and merges land in, a field the user typed into
    /// holds the user's latest value at the end.
    #[test]
    fn user_values_survive_any_merge_interleaving(
        ops in proptest::collection::vec(any_op(), 1..16),
    ) {
        let session = FormSession::new();
        let epoch = session.begin_selection(&farm(20.0));

        let mut user_values: HashMap<usize, String> = HashMap::new();
        for (i, op) in ops.iter().enumerate() {
            match op {
                Op::Edit(field) => {
                    let value = format!("{}.5", i + 1);
                    session.edit(GEODATA_FIELDS[*field], value.clone());
                    user_values.insert(*field, value);
                }
                Op::Weather(sample) => {
                    session.apply_weather(epoch, sample);
                }
                Op::Soil(sample) => {
                    session.apply_soil(epoch, sample);
                }
            }
        }

        let form = session.snapshot();
        for (field, value) in &user_values {
            prop_assert_eq!(form.field(GEODATA_FIELDS[*field]), value.as_str());
        }
    }

    /// Merges presented with a superseded epoch leave the form bit-for-bit
    /// unchanged.
    #[test]
    fn stale_merges_never_change_state(
        ops in proptest::collection::vec(merge_op(), 1..16),
    ) {
        let session = FormSession::new();
        let stale = session.begin_selection(&farm(10.0));
        let _current = session.begin_selection(&farm(20.0));

        let before = session.snapshot();
        for op in &ops {
            let applied = match op {
                Op::Weather(sample) => session.apply_weather(stale, sample),
                Op::Soil(sample) => session.apply_soil(stale, sample),
                Op::Edit(_) => unreachable!(),
            };
            prop_assert!(!applied);
        }
        prop_assert_eq!(session.snapshot(), before);
    }

    /// A merge never empties a field: every non-empty field stays non-empty.
    #[test]
    fn merges_never_clear_fields(
        ops in proptest::collection::vec(merge_op(), 1..16),
    ) {
        let session = FormSession::new();
        let epoch = session.begin_selection(&farm(20.0));
        session.edit(FormField::Nitrogen, "12");

        for op in &ops {
            let filled_before: Vec<bool> = {
                let form = session.snapshot();
                GEODATA_FIELDS.iter().map(|f| !form.field(*f).is_empty()).collect()
            };
            match op {
                Op::Weather(sample) => { session.apply_weather(epoch, sample); }
                Op::Soil(sample) => { session.apply_soil(epoch, sample); }
                Op::Edit(_) => unreachable!(),
            }
            let form = session.snapshot();
            for (field, was_filled) in GEODATA_FIELDS.iter().zip(filled_before) {
                if was_filled {
                    prop_assert!(!form.field(*field).is_empty());
                }
            }
        }
    }
}
