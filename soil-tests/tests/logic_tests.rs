//! Integration Tests für Prozent-Umrechnung, Profile und Telemetrie
//!
//! Diese Tests laufen auf dem Host (x86_64)

use soil_core::{
    ADC_MAX, CalibrationBounds, PLANT_PROFILES, PlantSelection, ProfileSource, TelemetryRecord,
    lookup, moisture_percent, parse_plant_type,
};

// ============================================================================
// Tests: moisture_percent()
// ============================================================================

const CALIBRATIONS: [(u16, u16); 4] = [(4095, 1800), (1800, 4095), (3000, 2999), (0, ADC_MAX)];

#[test]
fn test_percent_endpoints_for_all_calibrations() {
    for (dry, wet) in CALIBRATIONS {
        assert_eq!(moisture_percent(dry, dry, wet), 0, "dry={dry} wet={wet}");
        assert_eq!(moisture_percent(wet, dry, wet), 100, "dry={dry} wet={wet}");
    }
}

#[test]
fn test_percent_monotonic_from_dry_to_wet() {
    for (dry, wet) in CALIBRATIONS {
        let mut previous = 0;
        let steps: Box<dyn Iterator<Item = u16>> = if dry > wet {
            Box::new((wet..=dry).rev())
        } else {
            Box::new(dry..=wet)
        };

        // Von trocken nach nass darf der Prozentwert nie fallen
        for raw in steps {
            let percent = moisture_percent(raw, dry, wet);
            assert!(percent >= previous, "raw={raw} dry={dry} wet={wet}");
            previous = percent;
        }
        assert_eq!(previous, 100);
    }
}

#[test]
fn test_percent_clamped_outside_calibration() {
    for (dry, wet) in CALIBRATIONS {
        let (low, high) = (dry.min(wet), dry.max(wet));
        for raw in (0..low).chain(high.saturating_add(1)..=ADC_MAX) {
            let percent = moisture_percent(raw, dry, wet);
            let expected = if (raw < low) == (wet < dry) { 100 } else { 0 };
            assert_eq!(percent, expected, "raw={raw} dry={dry} wet={wet}");
        }
    }
}

#[test]
fn test_percent_never_exceeds_bounds() {
    let calibration = CalibrationBounds::default();
    for raw in 0..=u16::MAX {
        assert!(calibration.percent(raw) <= 100);
    }
}

// ============================================================================
// Tests: Profile Registry
// ============================================================================

#[test]
fn test_lookup_is_total() {
    for plant_type in -1000..1000 {
        let profile = lookup(plant_type);
        assert!(PLANT_PROFILES.contains(&profile));
    }
    assert_eq!(lookup(i32::MIN), PLANT_PROFILES[0]);
    assert_eq!(lookup(i32::MAX), PLANT_PROFILES[0]);
}

#[test]
fn test_lookup_exact_entries() {
    assert_eq!(lookup(1).name, "Samambaia");
    assert_eq!(lookup(1).threshold, 3600);
    assert_eq!(lookup(2).name, "Bananeira");
    assert_eq!(lookup(2).threshold, 3000);
    assert_eq!(lookup(3).name, "Cacto");
    assert_eq!(lookup(3).threshold, 4200);
}

#[test]
fn test_select_invalid_keeps_previous() {
    let selection = PlantSelection::new();
    selection.select(2);
    let previous = selection.current();

    for invalid in [0, -1, 4, 100, i32::MIN, i32::MAX] {
        selection.select(invalid);
        assert_eq!(selection.current(), previous);
        assert_eq!(selection.active_profile(), previous);
    }
}

#[test]
fn test_select_from_payload() {
    let selection = PlantSelection::new();

    if let Some(plant_type) = parse_plant_type(b"3\n") {
        selection.select(plant_type);
    }
    assert_eq!(selection.current_type(), 3);
}

#[test]
fn test_apply_message_sequence() {
    let selection = PlantSelection::new();

    // Nachrichten in Empfangsreihenfolge, ungültige dazwischen
    let messages: [&[u8]; 6] = [b"2", b"", b"0", b"abc", b" 3 ", b"4"];
    let accepted: Vec<_> = messages
        .iter()
        .filter_map(|payload| selection.apply_message(payload))
        .map(|profile| profile.name)
        .collect();

    assert_eq!(accepted, ["Bananeira", "Cacto"]);
    assert_eq!(selection.current_type(), 3);
    assert_eq!(selection.active_profile(), lookup(3));
}

// ============================================================================
// Tests: TelemetryRecord
// ============================================================================

#[test]
fn test_telemetry_capture() {
    let record = TelemetryRecord::capture(
        3700,
        1,
        PLANT_PROFILES[0],
        CalibrationBounds::default(),
        42_000,
    );
    assert_eq!(record.plant_type, 1);
    assert_eq!(record.plant_name, "Samambaia");
    assert_eq!(record.moisture_percent, 17);
    assert!(record.needs_water);
    assert_eq!(record.timestamp_ms, 42_000);
}

#[test]
fn test_telemetry_json_keys() {
    let record = TelemetryRecord::capture(
        3000,
        2,
        PLANT_PROFILES[1],
        CalibrationBounds::default(),
        10_000,
    );

    let mut buffer = [0u8; 128];
    let len = serde_json_core::to_slice(&record, &mut buffer).unwrap();
    let json = std::str::from_utf8(&buffer[..len]).unwrap();

    assert_eq!(
        json,
        r#"{"plantType":2,"plantName":"Bananeira","umidade":47,"precisaDeAgua":false,"timestamp":10000}"#
    );
}
