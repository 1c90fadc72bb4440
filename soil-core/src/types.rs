//! Core Types für die Bodenfeuchte-Überwachung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::logic::{moisture_percent, needs_water};

/// Kalibrierung des Feuchtesensors
///
/// Rohwerte, die 0 % (`dry`) bzw. 100 % (`wet`) Feuchte entsprechen.
/// Die Reihenfolge ist nicht festgelegt: beim kapazitiven Sensor gilt
/// `dry > wet` (höherer Rohwert = trockener Boden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationBounds {
    pub dry: u16,
    pub wet: u16,
}

impl CalibrationBounds {
    pub const fn new(dry: u16, wet: u16) -> Self {
        Self { dry, wet }
    }

    /// Feuchte in Prozent für einen Rohwert (siehe [`moisture_percent`])
    pub fn percent(&self, raw: u16) -> u8 {
        moisture_percent(raw, self.dry, self.wet)
    }
}

impl Default for CalibrationBounds {
    /// Gemessen am kapazitiven Sensor v1.2: Luft = 4095, Wasser = 1800
    fn default() -> Self {
        Self::new(4095, 1800)
    }
}

/// Pflanzen-Profil: Anzeigename und Feuchte-Schwelle
///
/// `threshold` ist ein Rohwert (ADC-Einheiten). Liegt die Messung darüber,
/// braucht die Pflanze Wasser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantProfile {
    pub name: &'static str,
    pub threshold: u16,
}

impl PlantProfile {
    pub const fn new(name: &'static str, threshold: u16) -> Self {
        Self { name, threshold }
    }

    /// `true` wenn der Rohwert für dieses Profil zu trocken ist
    pub fn is_dry(&self, raw: u16) -> bool {
        needs_water(raw, self.threshold)
    }
}

/// Telemetrie-Datensatz für den periodischen Upload
///
/// Die JSON-Schlüssel entsprechen dem bestehenden Dashboard
/// (`plantType`, `plantName`, `umidade`, `precisaDeAgua`, `timestamp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TelemetryRecord {
    #[cfg_attr(feature = "serde", serde(rename = "plantType"))]
    pub plant_type: u8,
    #[cfg_attr(feature = "serde", serde(rename = "plantName"))]
    pub plant_name: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "umidade"))]
    pub moisture_percent: u8,
    #[cfg_attr(feature = "serde", serde(rename = "precisaDeAgua"))]
    pub needs_water: bool,
    #[cfg_attr(feature = "serde", serde(rename = "timestamp"))]
    pub timestamp_ms: u64,
}

impl TelemetryRecord {
    /// Erstellt einen Datensatz aus dem aktuellen Rohwert und Profil
    pub fn capture(
        raw: u16,
        plant_type: u8,
        profile: PlantProfile,
        calibration: CalibrationBounds,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            plant_type,
            plant_name: profile.name,
            moisture_percent: calibration.percent(raw),
            needs_water: profile.is_dry(raw),
            timestamp_ms,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PlantProfile {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PlantProfile {{ name: {}, threshold: {} }}",
            self.name,
            self.threshold
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetryRecord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TelemetryRecord {{ type: {}, name: {}, percent: {}, dry: {}, t: {} }}",
            self.plant_type,
            self.plant_name,
            self.moisture_percent,
            self.needs_water,
            self.timestamp_ms
        )
    }
}
