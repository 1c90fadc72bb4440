//! Nebenläufigkeits-Tests für den Shared State
//!
//! Ein Producer-Thread veröffentlicht steigende Werte, mehrere Leser pollen
//! parallel. Jeder gelesene Wert muss veröffentlicht worden sein.

use std::thread;

use soil_core::{PLANT_PROFILES, PlantSelection, SensorCell, StopSignal};

const READERS: usize = 4;
const LAST_VALUE: u16 = 4095;

#[test]
fn test_concurrent_publish_and_read() {
    let cell = SensorCell::new();
    let done = StopSignal::new();

    thread::scope(|scope| {
        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                scope.spawn(|| {
                    let mut last_seen = 0;
                    let mut changes = 0usize;
                    loop {
                        let finished = done.is_stopped();
                        let raw = cell.read();

                        // Nur veröffentlichte Werte (oder der Startwert 0)
                        assert!(raw <= LAST_VALUE);
                        // Ein einzelner Leser sieht nie einen älteren Wert als zuvor
                        assert!(raw >= last_seen, "read {raw} after {last_seen}");

                        if raw != last_seen {
                            changes += 1;
                            last_seen = raw;
                        }
                        if finished {
                            break;
                        }
                    }
                    (last_seen, changes)
                })
            })
            .collect();

        scope.spawn(|| {
            for raw in 1..=LAST_VALUE {
                cell.publish(raw);
                thread::yield_now();
            }
            done.stop();
        });

        for reader in readers {
            let (last_seen, changes) = reader.join().unwrap();
            assert_eq!(last_seen, LAST_VALUE);
            assert!(changes <= usize::from(LAST_VALUE));
        }
    });
}

#[test]
fn test_concurrent_selection_stays_valid() {
    let selection = PlantSelection::new();
    let done = StopSignal::new();

    thread::scope(|scope| {
        let reader = scope.spawn(|| {
            while !done.is_stopped() {
                let plant_type = selection.current_type();
                assert!((1..=PLANT_PROFILES.len() as u8).contains(&plant_type));
                assert!(PLANT_PROFILES.contains(&selection.current()));
            }
        });

        scope.spawn(|| {
            for request in -50..50 {
                selection.select(request);
                thread::yield_now();
            }
            done.stop();
        });

        reader.join().unwrap();
    });

    // Letzte gültige Anfrage war 3
    assert_eq!(selection.current_type(), 3);
}
