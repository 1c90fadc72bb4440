//! Shared Sensor State
//!
//! Ein einzelner Rohwert, geschrieben vom Sensor-Task, gelesen von Display,
//! LED, Kommando- und MQTT-Task. Kein Lock: ein Wort, atomar geschrieben.

use core::sync::atomic::{AtomicU16, Ordering};

/// Wert vor der ersten Messung
pub const INITIAL_READING: u16 = 0;

/// Atomare Zelle für den letzten Sensor-Rohwert
///
/// Wird einmal angelegt (z.B. in einer `StaticCell`) und als Referenz an
/// jeden Task übergeben. Leser sehen höchstens einen Zyklus alte Werte.
#[derive(Debug)]
pub struct SensorCell {
    raw: AtomicU16,
}

impl SensorCell {
    pub const fn new() -> Self {
        Self {
            raw: AtomicU16::new(INITIAL_READING),
        }
    }

    /// Veröffentlicht einen neuen Rohwert
    pub fn publish(&self, raw: u16) {
        self.raw.store(raw, Ordering::Relaxed);
    }

    /// Liest den zuletzt veröffentlichten Rohwert
    pub fn read(&self) -> u16 {
        self.raw.load(Ordering::Relaxed)
    }
}

impl Default for SensorCell {
    fn default() -> Self {
        Self::new()
    }
}
